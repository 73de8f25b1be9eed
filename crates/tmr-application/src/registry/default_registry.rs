//! Default tooling model builder registry
//!
//! Holds an ordered list of builders and an optional parent registry.
//! Resolution rules:
//!
//! - every local builder is asked, so overlapping builders are always noticed
//! - two or more local matches fail, without asking the parent
//! - one local match is wrapped and returned
//! - no local match is answered by the parent, verbatim, or fails as unknown
//!
//! Ambiguity is only checked within one registry. A builder in a child that
//! shadows a builder in its parent is not an error: the parent is never
//! consulted once the child has a match.

use std::fmt;
use std::sync::Arc;

use tmr_domain::error::{Error, Result};
use tmr_domain::ports::{BuildOperationExecutor, ModelBuilder};
use tracing::{debug, trace};

use super::void_builder::VoidModelBuilder;
use super::wrapping::{BuildOperationWrappingBuilder, ParameterizedBuildOperationWrappingBuilder};
use crate::ports::registry::{MODEL_BUILDERS, ToolingModelBuilderRegistry};

/// Registry of model builders with optional delegation to a parent
pub struct DefaultToolingModelBuilderRegistry {
    parent: Option<Arc<dyn ToolingModelBuilderRegistry>>,
    builders: Vec<Arc<dyn ModelBuilder>>,
    executor: Arc<dyn BuildOperationExecutor>,
}

impl DefaultToolingModelBuilderRegistry {
    /// Create a root registry
    ///
    /// The void model builder is registered automatically.
    pub fn new(executor: Arc<dyn BuildOperationExecutor>) -> Self {
        let mut registry = Self {
            parent: None,
            builders: Vec::new(),
            executor,
        };
        registry.register(Arc::new(VoidModelBuilder::new()));
        registry
    }

    /// Create a registry that falls back to `parent` for unknown models
    ///
    /// No void builder is registered here; requests for the void model reach
    /// the root through delegation.
    pub fn with_parent(
        executor: Arc<dyn BuildOperationExecutor>,
        parent: Arc<dyn ToolingModelBuilderRegistry>,
    ) -> Self {
        Self {
            parent: Some(parent),
            builders: Vec::new(),
            executor,
        }
    }

    /// Register every builder declared in [`MODEL_BUILDERS`]
    ///
    /// Returns the number of builders registered.
    pub fn register_discovered(&mut self) -> usize {
        for entry in MODEL_BUILDERS {
            debug!(builder = entry.name, "Registering discovered model builder");
            self.register((entry.factory)());
        }
        MODEL_BUILDERS.len()
    }

    /// Diagnostic names of the local builders, in registration order
    pub fn builder_names(&self) -> Vec<&str> {
        self.builders.iter().map(|b| b.builder_name()).collect()
    }

    /// Number of local builders
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Whether no builder is registered locally
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Parent registry, if any
    pub fn parent(&self) -> Option<&Arc<dyn ToolingModelBuilderRegistry>> {
        self.parent.as_ref()
    }

    /// Executor used by the builders this registry hands out
    pub fn executor(&self) -> &Arc<dyn BuildOperationExecutor> {
        &self.executor
    }

    fn wrap(&self, builder: Arc<dyn ModelBuilder>) -> Arc<dyn ModelBuilder> {
        match Arc::clone(&builder).as_parameterized() {
            Some(parameterized) => Arc::new(ParameterizedBuildOperationWrappingBuilder::new(
                builder,
                parameterized,
                Arc::clone(&self.executor),
            )),
            None => Arc::new(BuildOperationWrappingBuilder::new(
                builder,
                Arc::clone(&self.executor),
            )),
        }
    }
}

impl ToolingModelBuilderRegistry for DefaultToolingModelBuilderRegistry {
    fn register(&mut self, builder: Arc<dyn ModelBuilder>) {
        debug!(builder = builder.builder_name(), "Registered model builder");
        self.builders.push(builder);
    }

    fn get_builder(&self, model_name: &str) -> Result<Arc<dyn ModelBuilder>> {
        let matches: Vec<&Arc<dyn ModelBuilder>> = self
            .builders
            .iter()
            .filter(|builder| builder.can_build(model_name))
            .collect();

        match matches.as_slice() {
            [builder] => {
                trace!(
                    model = model_name,
                    builder = builder.builder_name(),
                    "Resolved model builder"
                );
                Ok(self.wrap(Arc::clone(builder)))
            }
            [] => match &self.parent {
                Some(parent) => {
                    trace!(model = model_name, "No local model builder, asking parent");
                    parent.get_builder(model_name)
                }
                None => Err(Error::unknown_model(model_name)),
            },
            _ => Err(Error::ambiguous_builder(
                model_name,
                matches
                    .iter()
                    .map(|builder| builder.builder_name().to_string())
                    .collect(),
            )),
        }
    }
}

impl fmt::Debug for DefaultToolingModelBuilderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultToolingModelBuilderRegistry")
            .field("builders", &self.builder_names())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}
