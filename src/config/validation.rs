//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Marker classes must be usable class names and distinct
//! - The element sink's selector must parse
//! - The log level must be one `tracing` understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - A missing selector is not an error; the element sink is then a no-op

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::dom::{Selector, SelectorError};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("markers.{field} must not be empty")]
    EmptyMarker { field: &'static str },

    #[error("markers.{field} must be a single class name, got {value:?}")]
    MarkerWhitespace { field: &'static str, value: String },

    #[error("markers.{field} reuses class {class:?} already assigned to markers.{other}")]
    DuplicateMarker {
        field: &'static str,
        other: &'static str,
        class: String,
    },

    #[error("logging.target_selector is invalid: {0}")]
    Selector(#[from] SelectorError),

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error, off")]
    LogLevel(String),
}

/// Check a parsed configuration, collecting every problem.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen: HashMap<&str, &'static str> = HashMap::new();
    for (field, class) in config.markers.entries() {
        if class.is_empty() {
            errors.push(ValidationError::EmptyMarker { field });
            continue;
        }
        if class.chars().any(char::is_whitespace) {
            errors.push(ValidationError::MarkerWhitespace {
                field,
                value: class.to_string(),
            });
            continue;
        }
        if let Some(other) = seen.insert(class, field) {
            errors.push(ValidationError::DuplicateMarker {
                field,
                other,
                class: class.to_string(),
            });
        }
    }

    if let Some(selector) = &config.logging.target_selector {
        if let Err(e) = Selector::parse(selector) {
            errors.push(e.into());
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.markers.vw = String::new();
        config.markers.letterbox = "js-vh".to_string();
        config.markers.vcenter = "two words".to_string();
        config.logging.target_selector = Some("div > p".to_string());
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[0], ValidationError::EmptyMarker { field: "vw" });
        assert_eq!(
            errors[1],
            ValidationError::DuplicateMarker {
                field: "letterbox",
                other: "vh",
                class: "js-vh".to_string(),
            }
        );
        assert!(matches!(errors[2], ValidationError::MarkerWhitespace { field: "vcenter", .. }));
        assert!(matches!(errors[3], ValidationError::Selector(_)));
        assert_eq!(errors[4], ValidationError::LogLevel("loud".to_string()));
    }
}
