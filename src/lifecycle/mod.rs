//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build logger → Build adjuster → Event loop
//!
//! Event loop (event_loop.rs):
//!     Ready / Resize (FIFO) → update viewport → adjust → record
//!     Sender closed → return document
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - After startup nothing fails; problems are logged and skipped

pub mod event_loop;
pub mod startup;

pub use event_loop::{EventLoop, RunRecord, ViewportEvent};
pub use startup::{build_event_loop, build_logger, StartupError};
