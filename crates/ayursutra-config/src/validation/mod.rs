//! Full configuration validation.
//!
//! Validates numeric ranges and required strings. Each section has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod assistant;
mod helpers;
mod persona;


use crate::schema::AyurConfig;
use ayursutra_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AyurConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    assistant::validate_assistant(&mut errors, config);
    persona::validate_persona(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
