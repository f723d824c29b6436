//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), "Configuration file loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SinkKind;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse_config(
            r##"
            [logging]
            sink = "element"
            target_selector = "#log"

            [markers]
            vh = "fit-vh"
            "##,
        )
        .unwrap();
        assert!(config.logging.enabled);
        assert_eq!(config.logging.sink, SinkKind::Element);
        assert_eq!(config.logging.target_selector.as_deref(), Some("#log"));
        assert_eq!(config.markers.vh, "fit-vh");
        assert_eq!(config.markers.vw, "js-vw");
        assert!(!config.events.coalesce_resize);
    }

    #[test]
    fn test_rejects_unknown_sink() {
        let err = parse_config("[logging]\nsink = \"pager\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_message_lists_errors() {
        let err = parse_config("[markers]\nvh = \"\"\nvw = \"\"\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: markers.vh must not be empty, markers.vw must not be empty"
        );
    }
}
