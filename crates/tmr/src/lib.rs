//! # Tooling Model Registry
//!
//! Resolves, by name, the builder able to produce a tooling model of a
//! project, and runs every build as a traced build operation.
//!
//! ## Example
//!
//! ```ignore
//! use tmr::infrastructure::{ToolingServices, config::AppConfig};
//! use tmr::{ProjectPath, ToolingModelBuilderRegistry};
//!
//! let services = ToolingServices::from_config(&AppConfig::default());
//! let builder = services.registry().get_builder("void")?;
//! let model = builder.build_all("void", &ProjectPath::root("shop"))?;
//! assert!(model.is_empty());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - builder, project and executor contracts, errors, value objects
//! - `application` - registry, resolution and operation-wrapping builders
//! - `infrastructure` - tracing executor, configuration, logging, wiring

/// Domain layer - contracts, errors and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tmr_domain::*;
}

/// Application layer - builder registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use tmr_application::*;
}

/// Infrastructure layer - executor, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use tmr_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the registry at the crate root
pub use application::{
    DefaultToolingModelBuilderRegistry, MODEL_BUILDERS, ModelBuilderEntry,
    ToolingModelBuilderRegistry, list_model_builders,
};

// Re-export wiring for convenience
pub use infrastructure::{ToolingServices, TracingBuildOperationExecutor};
