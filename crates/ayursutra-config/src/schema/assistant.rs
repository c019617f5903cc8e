//! Completion service settings.

use serde::{Deserialize, Serialize};

/// Where the assistant sends completion requests and how it samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub model: String,
    pub api_base: String,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Valid range: 1-100.
    pub top_k: u32,
    /// Valid range: 0.0-1.0.
    pub top_p: f64,
    /// Valid range: 1-8192.
    pub max_output_tokens: u32,
    /// Seconds, valid range: 1-60.
    pub connect_timeout: u32,
    /// Seconds, valid range: 1-600.
    pub request_timeout: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".into(),
            api_base: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
            connect_timeout: 10,
            request_timeout: 60,
        }
    }
}
