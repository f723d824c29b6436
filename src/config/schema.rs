//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! With no file at all, [`AppConfig::default`] reproduces the stock
//! behavior: console logging enabled and the `js-*` marker classes.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Diagnostic logger (the sink adjustments report to).
    pub logging: LogConfig,

    /// Marker classes that opt elements into each pass.
    pub markers: MarkerConfig,

    /// Event handling.
    pub events: EventConfig,

    /// Process-level structured logging.
    pub observability: ObservabilityConfig,
}

/// Where diagnostic messages go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Write each message as a line to the diagnostic stream.
    #[default]
    Console,
    /// Append each message as text to the elements matching `target_selector`.
    Element,
    /// Hand each message to a blocking alert presenter.
    Alert,
}

/// Logger configuration. Immutable once built.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Master switch; when false every message is dropped.
    pub enabled: bool,

    /// Output sink.
    pub sink: SinkKind,

    /// Selector for the element sink. Ignored by other sinks.
    pub target_selector: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sink: SinkKind::Console,
            target_selector: None,
        }
    }
}

/// Marker class names.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MarkerConfig {
    /// Height as a percentage of viewport height (`data-vh`).
    pub vh: String,

    /// Width as a percentage of viewport width (`data-vw`).
    pub vw: String,

    /// Full-width 16:9 box.
    pub letterbox: String,

    /// Vertical centering by top margin.
    pub vcenter: String,
}

impl MarkerConfig {
    /// `(field, class)` pairs, in pass order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("vh", self.vh.as_str()),
            ("vw", self.vw.as_str()),
            ("letterbox", self.letterbox.as_str()),
            ("vcenter", self.vcenter.as_str()),
        ]
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            vh: "js-vh".to_string(),
            vw: "js-vw".to_string(),
            letterbox: "js-letterbox".to_string(),
            vcenter: "js-margin-vcenter".to_string(),
        }
    }
}

/// Event loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct EventConfig {
    /// Collapse a burst of already-queued resize events into the last one.
    pub coalesce_resize: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
