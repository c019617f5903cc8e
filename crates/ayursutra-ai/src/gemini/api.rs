//! CompletionService implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, Completion, CompletionService};

use super::client::GeminiClient;
use super::wire::parse_response_body;

fn transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::Network(e.to_string())
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<Completion, AiError> {
        let body = self.build_request_body(prompt);
        let url = self.api_url();

        debug!(model = %self.config.model, "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "Gemini API error response");
            return Err(AiError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let text = response.text().await.map_err(transport_error)?;
        let completion = parse_response_body(&text)?;

        debug!(
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            "Gemini API response"
        );
        Ok(completion)
    }
}
