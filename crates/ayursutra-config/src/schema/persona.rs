//! Assistant persona: display name, greeting, and the prompt preamble.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PREAMBLE: &str = "You are AyurSutra Assistant, a helpful and knowledgeable chatbot for an Ayurvedic therapy platform.
You should provide helpful, accurate information about:
- Ayurvedic principles and treatments
- Platform registration and navigation
- Therapy session booking and preparation
- General wellness guidance based on Ayurvedic principles

Keep responses concise but informative. Be friendly and professional.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    pub name: String,
    /// First bot message of every freshly opened transcript.
    pub greeting: String,
    /// Prepended to every user message sent to the completion service.
    pub preamble: String,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: "AyurSutra Assistant".into(),
            greeting: "Hello! I'm AyurSutra Assistant. How can I help you today?".into(),
            preamble: DEFAULT_PREAMBLE.into(),
        }
    }
}
