//! Service bootstrap
//!
//! Composition root for the tooling model services: one executor shared by
//! a root registry and every child registry created from it.
//!
//! ```text
//! AppConfig → TracingBuildOperationExecutor ─┐
//!                                            ├→ root registry ← child registries
//! MODEL_BUILDERS (linkme) ───────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let services = ToolingServices::from_config(&AppConfig::default());
//! let builder = services.registry().get_builder("void")?;
//! let model = builder.build_all("void", &ProjectPath::root("shop"))?;
//! ```

use std::sync::Arc;

use tmr_application::ports::registry::ToolingModelBuilderRegistry;
use tmr_application::registry::DefaultToolingModelBuilderRegistry;
use tmr_domain::ports::{BuildOperationExecutor, ModelBuilder};
use tracing::info;

use crate::config::AppConfig;
use crate::operations::{OperationTracker, TracingBuildOperationExecutor};

/// Root registry and the executor its builds run on
pub struct ToolingServices {
    /// Application configuration
    pub config: Arc<AppConfig>,

    executor: Arc<TracingBuildOperationExecutor>,
    registry: Arc<dyn ToolingModelBuilderRegistry>,
}

impl ToolingServices {
    /// Create the services with the discovered builders only
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_builders(config, std::iter::empty())
    }

    /// Create the services, registering `builders` after the discovered ones
    pub fn with_builders<I>(config: &AppConfig, builders: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn ModelBuilder>>,
    {
        let executor = Arc::new(TracingBuildOperationExecutor::from_config(&config.operations));
        let shared: Arc<dyn BuildOperationExecutor> = executor.clone();

        let mut registry = DefaultToolingModelBuilderRegistry::new(shared);
        let discovered = registry.register_discovered();
        for builder in builders {
            registry.register(builder);
        }

        info!(
            discovered,
            builders = registry.len(),
            tracking = config.operations.tracking_enabled,
            "Tooling model services initialized"
        );

        Self {
            config: Arc::new(config.clone()),
            executor,
            registry: Arc::new(registry),
        }
    }

    /// Root registry
    pub fn registry(&self) -> Arc<dyn ToolingModelBuilderRegistry> {
        self.registry.clone()
    }

    /// Shared build operation executor
    pub fn executor(&self) -> Arc<TracingBuildOperationExecutor> {
        self.executor.clone()
    }

    /// Operation tracker, when tracking is enabled
    pub fn tracker(&self) -> Option<Arc<OperationTracker>> {
        self.executor.tracker().cloned()
    }

    /// New empty registry delegating unknown models to the root
    pub fn child_registry(&self) -> DefaultToolingModelBuilderRegistry {
        DefaultToolingModelBuilderRegistry::with_parent(self.executor.clone(), self.registry())
    }
}
