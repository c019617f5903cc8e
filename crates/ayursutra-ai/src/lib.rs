//! AI engine for the AyurSutra assistant.
//!
//! Provides:
//! - the `CompletionService` seam and its Gemini implementation
//! - failure classification into fixed, user-facing apologies
//! - the chat session manager (transcript, open/close, submission gate)
//! - token usage tracking

pub mod classify;
pub mod gemini;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;

pub use classify::{classify, FailureKind};
pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{ChatSession, IgnoredReason, Persona, SubmitOutcome};
pub use token_tracker::TokenTracker;

/// An external text-generation endpoint.
///
/// One call is one outbound request. Implementations never retry.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<Completion, AiError>;
}

/// A successful completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub usage: TokenUsage,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: TokenUsage::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// The service answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    /// The body was not JSON or lacked the expected fields.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl AiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            AiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_only_for_http_errors() {
        let err = AiError::Http {
            status: 429,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(429));
        assert_eq!(AiError::Timeout.status(), None);
        assert_eq!(AiError::Network("refused".into()).status(), None);
        assert_eq!(AiError::Decode("eof".into()).status(), None);
    }

    #[test]
    fn error_display() {
        let err = AiError::Http {
            status: 503,
            body: "overloaded".into(),
        };
        assert_eq!(err.to_string(), "HTTP 503: overloaded");
        assert_eq!(AiError::Timeout.to_string(), "Timeout");
    }

    #[test]
    fn total_tokens_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 5,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }
}
