//! Operation-wrapping builders
//!
//! A resolved builder is never handed out bare. It is wrapped so that each
//! `build_all` call runs inside exactly one build operation. The wrapper
//! never catches, translates or retries: whatever the delegate returns is
//! what the caller gets.

use std::sync::Arc;

use tmr_domain::constants::{
    BUILD_MODEL_DISPLAY_PREFIX, BUILD_MODEL_PROGRESS_PREFIX,
    BUILD_PARAMETERIZED_MODEL_DISPLAY_PREFIX, BUILD_PARAMETERIZED_MODEL_PROGRESS_PREFIX,
};
use tmr_domain::error::Result;
use tmr_domain::ports::{
    BuildOperationExecutor, CallableBuildOperation, ModelBuilder, ParameterizedModelBuilder,
    Project,
};
use tmr_domain::value_objects::{
    BuildOperationContext, BuildOperationDescriptor, ModelParameter, ParameterType, ToolingModel,
};

/// Wraps a resolved builder so that builds run as build operations
pub struct BuildOperationWrappingBuilder {
    delegate: Arc<dyn ModelBuilder>,
    executor: Arc<dyn BuildOperationExecutor>,
}

impl BuildOperationWrappingBuilder {
    /// Wrap `delegate`, running its builds on `executor`
    pub fn new(delegate: Arc<dyn ModelBuilder>, executor: Arc<dyn BuildOperationExecutor>) -> Self {
        Self { delegate, executor }
    }
}

impl ModelBuilder for BuildOperationWrappingBuilder {
    fn can_build(&self, model_name: &str) -> bool {
        self.delegate.can_build(model_name)
    }

    fn build_all(&self, model_name: &str, project: &dyn Project) -> Result<ToolingModel> {
        self.executor.call(Box::new(BuildModelOperation {
            delegate: self.delegate.as_ref(),
            model_name,
            project,
        }))
    }

    fn builder_name(&self) -> &str {
        self.delegate.builder_name()
    }
}

/// Parameterized counterpart of [`BuildOperationWrappingBuilder`]
///
/// Still a plain model builder: `build_all` goes through the same path as
/// the simple wrapper.
pub struct ParameterizedBuildOperationWrappingBuilder {
    inner: BuildOperationWrappingBuilder,
    delegate: Arc<dyn ParameterizedModelBuilder>,
}

impl ParameterizedBuildOperationWrappingBuilder {
    /// Wrap `delegate`, whose parameterized capability is `parameterized`
    pub fn new(
        delegate: Arc<dyn ModelBuilder>,
        parameterized: Arc<dyn ParameterizedModelBuilder>,
        executor: Arc<dyn BuildOperationExecutor>,
    ) -> Self {
        Self {
            inner: BuildOperationWrappingBuilder::new(delegate, executor),
            delegate: parameterized,
        }
    }
}

impl ModelBuilder for ParameterizedBuildOperationWrappingBuilder {
    fn can_build(&self, model_name: &str) -> bool {
        self.delegate.can_build(model_name)
    }

    fn build_all(&self, model_name: &str, project: &dyn Project) -> Result<ToolingModel> {
        self.inner.build_all(model_name, project)
    }

    fn builder_name(&self) -> &str {
        self.delegate.builder_name()
    }

    fn as_parameterized(self: Arc<Self>) -> Option<Arc<dyn ParameterizedModelBuilder>> {
        Some(self)
    }
}

impl ParameterizedModelBuilder for ParameterizedBuildOperationWrappingBuilder {
    fn parameter_type(&self) -> ParameterType {
        self.delegate.parameter_type()
    }

    fn build_all_with_parameter(
        &self,
        model_name: &str,
        parameter: &ModelParameter,
        project: &dyn Project,
    ) -> Result<ToolingModel> {
        self.inner
            .executor
            .call(Box::new(BuildParameterizedModelOperation {
                delegate: self.delegate.as_ref(),
                model_name,
                parameter,
                project,
            }))
    }
}

struct BuildModelOperation<'a> {
    delegate: &'a dyn ModelBuilder,
    model_name: &'a str,
    project: &'a dyn Project,
}

impl CallableBuildOperation for BuildModelOperation<'_> {
    fn description(&self) -> BuildOperationDescriptor {
        BuildOperationDescriptor::display_name(format!(
            "{BUILD_MODEL_DISPLAY_PREFIX} '{}' for {}",
            self.model_name,
            self.project.display_name()
        ))
        .progress_display_name(format!(
            "{BUILD_MODEL_PROGRESS_PREFIX} '{}'",
            self.model_name
        ))
    }

    fn call(self: Box<Self>, _context: &mut BuildOperationContext) -> Result<ToolingModel> {
        self.delegate.build_all(self.model_name, self.project)
    }
}

struct BuildParameterizedModelOperation<'a> {
    delegate: &'a dyn ParameterizedModelBuilder,
    model_name: &'a str,
    parameter: &'a ModelParameter,
    project: &'a dyn Project,
}

impl CallableBuildOperation for BuildParameterizedModelOperation<'_> {
    fn description(&self) -> BuildOperationDescriptor {
        BuildOperationDescriptor::display_name(format!(
            "{BUILD_PARAMETERIZED_MODEL_DISPLAY_PREFIX} '{}' for {}",
            self.model_name,
            self.project.display_name()
        ))
        .progress_display_name(format!(
            "{BUILD_PARAMETERIZED_MODEL_PROGRESS_PREFIX} '{}'",
            self.model_name
        ))
    }

    fn call(self: Box<Self>, _context: &mut BuildOperationContext) -> Result<ToolingModel> {
        self.delegate
            .build_all_with_parameter(self.model_name, self.parameter, self.project)
    }
}
