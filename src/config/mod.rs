//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → LogConfig / MarkerConfig handed to the logger and adjuster
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no runtime reconfiguration
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AppConfig, EventConfig, LogConfig, MarkerConfig, ObservabilityConfig, SinkKind};
pub use validation::{validate_config, ValidationError};
