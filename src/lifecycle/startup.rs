//! Startup orchestration.
//!
//! Turns a validated [`AppConfig`] and a parsed document into a ready
//! [`EventLoop`]. Any failure here is fatal to the caller; once the loop is
//! running nothing fails.

use thiserror::Error;

use crate::adjust::ViewportAdjuster;
use crate::config::AppConfig;
use crate::dom::{Document, SelectorError};
use crate::lifecycle::event_loop::EventLoop;
use crate::logger::{AlertPresenter, Logger};
use crate::viewport::{SharedViewport, ViewportSize};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid log target: {0}")]
    LogTarget(#[from] SelectorError),
}

/// Build the logger described by `config`, using `alert` for the alert sink.
pub fn build_logger(
    config: &AppConfig,
    alert: impl AlertPresenter + 'static,
) -> Result<Logger, StartupError> {
    Ok(Logger::new(config.logging.clone())?.with_alert(alert))
}

/// Wire logger, adjuster and viewport around `document`.
pub fn build_event_loop(
    config: &AppConfig,
    document: Document,
    initial: ViewportSize,
    logger: Logger,
) -> EventLoop {
    tracing::info!(
        sink = ?config.logging.sink,
        logging_enabled = config.logging.enabled,
        vh = %config.markers.vh,
        vw = %config.markers.vw,
        letterbox = %config.markers.letterbox,
        vcenter = %config.markers.vcenter,
        "Configuration loaded"
    );

    let adjuster = ViewportAdjuster::new(config.markers.clone(), logger);
    EventLoop::new(document, adjuster, SharedViewport::new(initial))
        .coalesce_resize(config.events.coalesce_resize)
}
