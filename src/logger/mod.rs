//! Diagnostic logger.
//!
//! # Responsibilities
//! - Route adjustment messages to the configured sink
//! - Never fail: every sink error is swallowed
//!
//! # Sinks
//! - `console`: one line per message on the diagnostic stream (stderr)
//! - `element`: message appended as text to each element matching the
//!   target selector; no-op when the selector is unset or matches nothing
//! - `alert`: blocking presenter, see [`AlertPresenter`]
//!
//! # Design Decisions
//! - Configuration is an immutable [`LogConfig`] handed over at
//!   construction; there is no global logger state
//! - The selector is parsed once, up front
//! - Independent of `tracing`: this is the user-facing diagnostic channel,
//!   `tracing` is the process log

pub mod sink;

use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::{LogConfig, SinkKind};
use crate::dom::{Document, Selector, SelectorError};

pub use sink::{AlertPresenter, BufferWriter, StderrAlert, TerminalAlert};

/// Text logged for a `None` message.
pub const NULL_MESSAGE: &str = "null";

/// Configured diagnostic sink.
pub struct Logger {
    config: LogConfig,
    target: Option<Selector>,
    console: Mutex<Box<dyn Write + Send>>,
    alert: Box<dyn AlertPresenter>,
}

impl Logger {
    /// Build a logger writing console output to stderr and alerts to the
    /// terminal.
    ///
    /// Fails only if `target_selector` is set and does not parse.
    pub fn new(config: LogConfig) -> Result<Self, SelectorError> {
        let target = config
            .target_selector
            .as_deref()
            .map(Selector::parse)
            .transpose()?;
        Ok(Self {
            config,
            target,
            console: Mutex::new(Box::new(io::stderr())),
            alert: Box::new(TerminalAlert),
        })
    }

    /// A logger that drops everything.
    pub fn disabled() -> Self {
        Self {
            config: LogConfig {
                enabled: false,
                ..LogConfig::default()
            },
            target: None,
            console: Mutex::new(Box::new(io::sink())),
            alert: Box::new(StderrAlert),
        }
    }

    /// Replace the console writer.
    pub fn with_console(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console = Mutex::new(Box::new(writer));
        self
    }

    /// Replace the alert presenter.
    pub fn with_alert(mut self, presenter: impl AlertPresenter + 'static) -> Self {
        self.alert = Box::new(presenter);
        self
    }

    /// Log a message. `None` logs `null`.
    ///
    /// The element sink writes into `doc`; the other sinks ignore it.
    pub fn log(&self, doc: &mut Document, message: Option<&str>) {
        if !self.config.enabled {
            return;
        }
        let message = message.unwrap_or(NULL_MESSAGE);

        match self.config.sink {
            SinkKind::Console => {
                if let Ok(mut console) = self.console.lock() {
                    let _ = writeln!(console, "{message}");
                }
            }
            SinkKind::Element => {
                let Some(selector) = &self.target else {
                    return;
                };
                for node in doc.select(selector) {
                    doc.append_text(node, message);
                }
            }
            SinkKind::Alert => self.alert.present(message),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("target", &self.target.as_ref().map(Selector::as_str))
            .finish_non_exhaustive()
    }
}
