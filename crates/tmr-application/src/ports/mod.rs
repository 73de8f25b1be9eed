//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **registry/** - Builder registry contract and auto-registration of builders

/// Builder registry contract and builder discovery
pub mod registry;

pub use registry::{
    MODEL_BUILDERS, ModelBuilderEntry, ToolingModelBuilderRegistry, list_model_builders,
};
