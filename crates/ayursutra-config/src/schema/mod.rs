//! Configuration schema types for the AyurSutra assistant.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the chat widget ships with.

mod assistant;
mod panel;
mod persona;
mod system;

pub use assistant::*;
pub use panel::*;
pub use persona::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// The completion API key is deliberately absent; see [`crate::secrets`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AyurConfig {
    pub assistant: AssistantConfig,
    pub persona: PersonaConfig,
    pub panel: PanelConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_assistant_settings() {
        let config = AyurConfig::default();
        assert_eq!(config.assistant.model, "gemini-2.0-flash");
        assert_eq!(
            config.assistant.api_base,
            "https://generativelanguage.googleapis.com/v1beta/models"
        );
        assert_eq!(config.assistant.temperature, 0.7);
        assert_eq!(config.assistant.top_k, 40);
        assert_eq!(config.assistant.top_p, 0.95);
        assert_eq!(config.assistant.max_output_tokens, 1024);
        assert_eq!(config.assistant.connect_timeout, 10);
        assert_eq!(config.assistant.request_timeout, 60);
    }

    #[test]
    fn default_persona() {
        let config = AyurConfig::default();
        assert_eq!(config.persona.name, "AyurSutra Assistant");
        assert_eq!(
            config.persona.greeting,
            "Hello! I'm AyurSutra Assistant. How can I help you today?"
        );
        assert!(config.persona.preamble.starts_with("You are AyurSutra Assistant"));
        assert!(config.persona.preamble.contains("Therapy session booking and preparation"));
    }

    #[test]
    fn default_panel_and_logging() {
        let config = AyurConfig::default();
        assert_eq!(config.panel.initial_x, 20.0);
        assert_eq!(config.panel.initial_y, 100.0);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: AyurConfig = toml::from_str("").unwrap();
        assert_eq!(config.assistant.model, "gemini-2.0-flash");
        assert_eq!(config.persona.name, "AyurSutra Assistant");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: AyurConfig = toml::from_str(
            r#"
[assistant]
model = "gemini-1.5-pro"
top_k = 20
"#,
        )
        .unwrap();
        assert_eq!(config.assistant.model, "gemini-1.5-pro");
        assert_eq!(config.assistant.top_k, 20);
        assert_eq!(config.assistant.top_p, 0.95);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: AyurConfig = toml::from_str("[logging]\nlevel = \"WARNING\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Warning);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: AyurConfig = toml::from_str("[assistant]\nstreaming = true\n").unwrap();
        assert_eq!(config.assistant.model, "gemini-2.0-flash");
    }
}
