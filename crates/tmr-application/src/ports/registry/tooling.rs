//! Tooling Model Builder Registry Port

use std::sync::Arc;

use tmr_domain::error::Result;
use tmr_domain::ports::ModelBuilder;

/// A registry of model builders, looked up by model name
///
/// Registration requires exclusive access and is expected to happen during
/// build setup. Once a registry is shared (for example behind an `Arc`) it
/// is read-only and `get_builder` may be called from any thread.
pub trait ToolingModelBuilderRegistry: Send + Sync {
    /// Add a builder to this registry
    ///
    /// No uniqueness check is made here: overlapping builders only become an
    /// error when someone asks for a model more than one of them can build.
    fn register(&mut self, builder: Arc<dyn ModelBuilder>);

    /// Find the single builder able to build `model_name`
    ///
    /// The returned builder runs every build as a build operation.
    fn get_builder(&self, model_name: &str) -> Result<Arc<dyn ModelBuilder>>;
}
