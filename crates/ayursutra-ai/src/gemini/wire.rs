//! Request and response bodies of `generateContent`.
//!
//! Every response field is optional on the wire; [`GenerateResponse::into_completion`]
//! turns a missing step of `candidates[0].content.parts[0].text` into a
//! decode error.

use serde::{Deserialize, Serialize};

use crate::{AiError, Completion, TokenUsage};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest<'a> {
    pub contents: [Content<'a>; 1],
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content<'a> {
    pub parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateResponse {
    pub candidates: Option<Vec<Candidate>>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsageMetadata {
    pub prompt_token_count: Option<u64>,
    pub candidates_token_count: Option<u64>,
}

impl GenerateResponse {
    pub(crate) fn into_completion(self) -> Result<Completion, AiError> {
        let usage = self
            .usage_metadata
            .map(|meta| TokenUsage {
                input_tokens: meta.prompt_token_count.unwrap_or(0),
                output_tokens: meta.candidates_token_count.unwrap_or(0),
            })
            .unwrap_or_default();

        let text = self
            .candidates
            .ok_or_else(|| missing("candidates"))?
            .into_iter()
            .next()
            .ok_or_else(|| missing("candidates[0]"))?
            .content
            .ok_or_else(|| missing("candidates[0].content"))?
            .parts
            .ok_or_else(|| missing("candidates[0].content.parts"))?
            .into_iter()
            .next()
            .ok_or_else(|| missing("candidates[0].content.parts[0]"))?
            .text
            .ok_or_else(|| missing("candidates[0].content.parts[0].text"))?;

        Ok(Completion { text, usage })
    }
}

fn missing(path: &str) -> AiError {
    AiError::Decode(format!("response has no {path}"))
}

/// Decode a raw `generateContent` body into a completion.
pub fn parse_response_body(body: &str) -> Result<Completion, AiError> {
    serde_json::from_str::<GenerateResponse>(body)
        .map_err(|e| AiError::Decode(e.to_string()))?
        .into_completion()
}
