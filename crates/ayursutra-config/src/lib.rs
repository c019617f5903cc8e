//! AyurSutra assistant configuration.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box. Secrets
//! are resolved separately from the environment.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ayursutra_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod secrets;
pub mod toml_loader;
pub mod validation;

pub use schema::{AyurConfig, CONFIG_SCHEMA_VERSION};
pub use secrets::{resolve_api_key, API_KEY_VARS};

use ayursutra_common::ConfigError;
use std::path::Path;

/// Load config from an explicit path, or from the platform default path.
///
/// An explicit path must exist. The default path is created with a
/// commented template when missing.
pub fn load_config(path: Option<&Path>) -> Result<AyurConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &AyurConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
