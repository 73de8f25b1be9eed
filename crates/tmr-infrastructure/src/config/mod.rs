//! Configuration
//!
//! TOML configuration merged with defaults and `TMR_` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, OperationsConfig};
