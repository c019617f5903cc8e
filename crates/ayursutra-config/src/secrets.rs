//! Resolution of secrets that must never live in the TOML file.
//!
//! The completion API key is read once at process start from the
//! environment. A `.env` file can seed the environment beforehand; values
//! already set in the real environment win.

use ayursutra_common::ConfigError;
use std::path::Path;
use tracing::debug;

/// Environment variables consulted for the API key, in priority order.
pub const API_KEY_VARS: [&str; 2] = ["AYURSUTRA_API_KEY", "GEMINI_API_KEY"];

/// Resolve the completion API key from the process environment.
pub fn resolve_api_key() -> Result<String, ConfigError> {
    resolve_api_key_with(|name| std::env::var(name).ok())
}

/// Resolve the API key through an arbitrary lookup. Blank values are skipped.
pub fn resolve_api_key_with(lookup: impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
    for name in API_KEY_VARS {
        if let Some(value) = lookup(name) {
            let value = value.trim();
            if !value.is_empty() {
                debug!(var = name, "API key resolved");
                return Ok(value.to_string());
            }
        }
    }
    Err(ConfigError::MissingSecret(format!(
        "set one of {} (environment or .env file)",
        API_KEY_VARS.join(", ")
    )))
}

/// Parse `KEY=VALUE` lines. Blank lines and `#` comments are skipped; one
/// level of surrounding quotes is stripped from values.
pub fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Load a `.env` file into the process environment without overriding
/// variables that are already set. Returns how many variables were set.
pub fn load_dotenv(path: &Path) -> usize {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return 0;
    };
    let mut applied = 0;
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(&key, value);
            applied += 1;
        }
    }
    debug!(path = %path.display(), applied, "loaded .env file");
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn prefers_ayursutra_variable() {
        let vars = env(&[("AYURSUTRA_API_KEY", "primary"), ("GEMINI_API_KEY", "fallback")]);
        let key = resolve_api_key_with(|n| vars.get(n).cloned()).unwrap();
        assert_eq!(key, "primary");
    }

    #[test]
    fn falls_back_to_gemini_variable() {
        let vars = env(&[("GEMINI_API_KEY", "fallback")]);
        let key = resolve_api_key_with(|n| vars.get(n).cloned()).unwrap();
        assert_eq!(key, "fallback");
    }

    #[test]
    fn blank_value_is_skipped() {
        let vars = env(&[("AYURSUTRA_API_KEY", "   "), ("GEMINI_API_KEY", "k")]);
        let key = resolve_api_key_with(|n| vars.get(n).cloned()).unwrap();
        assert_eq!(key, "k");
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = resolve_api_key_with(|_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecret(_)));
        assert!(err.to_string().contains("AYURSUTRA_API_KEY"));
    }

    #[test]
    fn parse_dotenv_lines() {
        let parsed = parse_dotenv(
            "# comment\n\nAYURSUTRA_API_KEY=\"abc\"\nexport OTHER='x y'\nbroken line\n=novalue\n",
        );
        assert_eq!(
            parsed,
            vec![
                ("AYURSUTRA_API_KEY".to_string(), "abc".to_string()),
                ("OTHER".to_string(), "x y".to_string()),
            ]
        );
    }

    #[test]
    fn load_dotenv_missing_file_is_noop() {
        assert_eq!(load_dotenv(Path::new("/tmp/definitely_missing_ayursutra.env")), 0);
    }

    #[test]
    fn load_dotenv_does_not_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "PATH=overridden\nAYURSUTRA_DOTENV_TEST_ONLY=1\n").unwrap();

        load_dotenv(&path);
        assert_ne!(std::env::var("PATH").unwrap(), "overridden");
        assert_eq!(std::env::var("AYURSUTRA_DOTENV_TEST_ONLY").unwrap(), "1");
    }
}
