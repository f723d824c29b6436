//! Viewport-relative element adjustment.
//!
//! # Data Flow
//! ```text
//! adjust(doc, viewport)
//!     → percent.rs   (.js-vh, .js-vw: data-vh / data-vw → inline height / width)
//!     → letterbox.rs (.js-letterbox: width 100%, height = width * 9/16)
//!     → vcenter.rs   (.js-margin-vcenter: margin-top = (parent - element) / 2)
//!     → AdjustSummary
//! ```
//!
//! # Design Decisions
//! - Passes are independent and select disjoint marker classes; their order
//!   only shows in the log
//! - Matched elements are collected before a pass mutates anything
//! - Nothing is fatal: a bad attribute or impossible layout skips that one
//!   element, is logged, and the run continues
//! - No state survives between runs; re-running overwrites earlier styles

mod letterbox;
mod percent;
mod vcenter;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::MarkerConfig;
use crate::dom::{Document, NodeId};
use crate::logger::Logger;
use crate::viewport::Viewport;

pub use percent::{parse_percent, Axis};

/// Why an element was left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdjustIssue {
    /// Required numeric attribute missing, non-numeric or negative.
    #[error("element not resized.  {attribute} not set, not numeric, or is less than 0")]
    InvalidConfiguration {
        attribute: &'static str,
        value: Option<String>,
    },

    /// The element is at least as tall as its parent.
    #[error("vertical center not possible.  element is taller than its parent.")]
    TallerThanParent {
        parent_height: f64,
        element_height: f64,
    },

    /// The element has no parent element to center in.
    #[error("vertical center not possible.  element has no parent element.")]
    NoParent,
}

/// Counters for one adjustment run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustSummary {
    /// Elements whose style was written.
    pub applied: usize,
    /// Elements skipped because of an [`AdjustIssue`].
    pub skipped: usize,
    /// Non-fatal warnings, such as centering an element that has siblings.
    pub warnings: usize,
}

/// Runs the four adjustment passes over a document.
#[derive(Debug)]
pub struct ViewportAdjuster {
    markers: MarkerConfig,
    logger: Logger,
}

impl ViewportAdjuster {
    pub fn new(markers: MarkerConfig, logger: Logger) -> Self {
        Self { markers, logger }
    }

    /// Run every pass to completion against the current viewport.
    ///
    /// The viewport is queried at each use, never cached.
    pub fn adjust<V: Viewport + ?Sized>(&self, doc: &mut Document, viewport: &V) -> AdjustSummary {
        let mut pass = Pass {
            doc,
            logger: &self.logger,
            summary: AdjustSummary::default(),
        };

        percent::run(&mut pass, &self.markers.vh, Axis::Height, viewport);
        percent::run(&mut pass, &self.markers.vw, Axis::Width, viewport);
        letterbox::run(&mut pass, &self.markers.letterbox, viewport);
        vcenter::run(&mut pass, &self.markers.vcenter, viewport);

        let summary = pass.summary;
        tracing::debug!(
            applied = summary.applied,
            skipped = summary.skipped,
            warnings = summary.warnings,
            width = viewport.width(),
            height = viewport.height(),
            "Adjustment run complete"
        );
        summary
    }
}

/// Mutable state shared by the passes within one run.
struct Pass<'a> {
    doc: &'a mut Document,
    logger: &'a Logger,
    summary: AdjustSummary,
}

impl Pass<'_> {
    fn log(&mut self, message: &str) {
        self.logger.log(self.doc, Some(message));
    }

    fn applied(&mut self) {
        self.summary.applied += 1;
    }

    fn warn(&mut self, message: &str) {
        self.summary.warnings += 1;
        tracing::warn!("{message}");
        self.log(message);
    }

    fn skip(&mut self, node: NodeId, issue: AdjustIssue) {
        self.summary.skipped += 1;
        tracing::warn!(node = ?node, issue = ?issue, "Element skipped");
        self.log(&issue.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogConfig, SinkKind};
    use crate::dom::parse_html;
    use crate::logger::BufferWriter;
    use crate::viewport::ViewportSize;

    #[test]
    fn test_runs_passes_in_order() {
        let out = BufferWriter::new();
        let logger = Logger::new(LogConfig {
            enabled: true,
            sink: SinkKind::Console,
            target_selector: None,
        })
        .unwrap()
        .with_console(out.clone());
        let adjuster = ViewportAdjuster::new(MarkerConfig::default(), logger);

        let mut doc = parse_html(
            r#"<div style="height: 400px"><div class="js-margin-vcenter" style="height: 100px"></div></div><div style="width: 320px"><div class="js-letterbox"></div></div><div class="js-vw" data-vw="25"></div><div class="js-vh" data-vh="50"></div>"#,
        )
        .unwrap();
        let summary = adjuster.adjust(&mut doc, &ViewportSize::new(800.0, 500.0));

        assert_eq!(
            summary,
            AdjustSummary {
                applied: 4,
                skipped: 0,
                warnings: 0,
            }
        );
        assert_eq!(
            out.lines(),
            vec![
                "resizing element to 50vh",
                "resizing element to 25vw",
                "calculated ratio: 1.7777777777777777",
                "parent height: 400",
                "element height: 100",
            ]
        );
    }

    #[test]
    fn test_issue_messages() {
        let issue = AdjustIssue::InvalidConfiguration {
            attribute: "data-vw",
            value: None,
        };
        assert_eq!(
            issue.to_string(),
            "element not resized.  data-vw not set, not numeric, or is less than 0"
        );
    }
}
