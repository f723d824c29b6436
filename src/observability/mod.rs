//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured, leveled)
//!     → logging.rs installs the subscriber that formats them
//! ```
//!
//! Separate from [`crate::logger`], which carries the user-facing
//! adjustment messages to their configured sink.

pub mod logging;

pub use logging::init_tracing;
