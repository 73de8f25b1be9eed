//! # Infrastructure Layer
//!
//! Technical concerns around the tooling model registry.
//!
//! ## Module Categories
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML configuration merged with environment overrides |
//! | [`bootstrap`] | Root registry and shared executor |
//! | [`constants`] | Infrastructure constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`operations`] | Traced build operation executor and tracker |
//!
//! ### Utilities
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`utils`] | Timing helpers |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod operations;
pub mod utils;

// Re-export commonly used types
pub use bootstrap::ToolingServices;
pub use error_ext::ErrorContext;
pub use operations::{OperationTracker, TracingBuildOperationExecutor};
pub use utils::TimedOperation;
