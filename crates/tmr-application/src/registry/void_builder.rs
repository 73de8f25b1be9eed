//! Void model builder
//!
//! Built-in fallback registered by every root registry. It claims only the
//! reserved [`VOID_MODEL_NAME`] and produces an empty model, so callers can
//! always ask for "no model" without any builder being declared.

use tmr_domain::constants::VOID_MODEL_NAME;
use tmr_domain::error::Result;
use tmr_domain::ports::{ModelBuilder, Project};
use tmr_domain::value_objects::ToolingModel;

/// Builder for the reserved void model
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidModelBuilder;

impl VoidModelBuilder {
    /// Create a new void model builder
    pub fn new() -> Self {
        Self
    }
}

impl ModelBuilder for VoidModelBuilder {
    fn can_build(&self, model_name: &str) -> bool {
        model_name == VOID_MODEL_NAME
    }

    fn build_all(&self, _model_name: &str, _project: &dyn Project) -> Result<ToolingModel> {
        Ok(ToolingModel::empty())
    }

    fn builder_name(&self) -> &str {
        "void"
    }
}
