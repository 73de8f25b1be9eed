//! Model Builder Ports
//!
//! Defines the contract implemented by anything able to produce a
//! tooling model for a project.

use crate::error::Result;
use crate::ports::Project;
use crate::value_objects::{ModelParameter, ParameterType, ToolingModel};
use std::sync::Arc;

/// Builds named tooling models for a project
///
/// Builders are registered with a registry during build setup and looked
/// up by model name. `can_build` must be side-effect free and give the same
/// answer every time it is asked about the same name.
pub trait ModelBuilder: Send + Sync {
    /// Whether this builder can build the model called `model_name`
    fn can_build(&self, model_name: &str) -> bool;

    /// Build the model called `model_name` for `project`
    fn build_all(&self, model_name: &str, project: &dyn Project) -> Result<ToolingModel>;

    /// Name used in diagnostics, such as ambiguity errors
    fn builder_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Capability query for the parameterized variant
    ///
    /// Parameterized builders return themselves; everything else keeps the
    /// default `None`.
    fn as_parameterized(self: Arc<Self>) -> Option<Arc<dyn ParameterizedModelBuilder>> {
        None
    }
}

/// A model builder that accepts one extra typed parameter
pub trait ParameterizedModelBuilder: ModelBuilder {
    /// Type of the parameter expected by `build_all_with_parameter`
    fn parameter_type(&self) -> ParameterType;

    /// Build the model called `model_name` for `project` using `parameter`
    fn build_all_with_parameter(
        &self,
        model_name: &str,
        parameter: &ModelParameter,
        project: &dyn Project,
    ) -> Result<ToolingModel>;
}
