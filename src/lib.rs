//! Viewport-relative sizing for HTML documents.
//!
//! Elements opt in with marker classes and are resized against the current
//! viewport: percentage heights and widths, 16:9 letterboxes and vertical
//! centering. Adjustments run once when the document is ready and again on
//! every resize.

pub mod adjust;
pub mod config;
pub mod dom;
pub mod layout;
pub mod lifecycle;
pub mod logger;
pub mod observability;
pub mod viewport;

pub use adjust::{AdjustIssue, AdjustSummary, ViewportAdjuster};
pub use config::AppConfig;
pub use dom::{parse_html, Document};
pub use lifecycle::{EventLoop, ViewportEvent};
pub use logger::Logger;
pub use viewport::{SharedViewport, Viewport, ViewportSize};
