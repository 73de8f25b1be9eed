//! Tests for the operation-wrapping builders handed out by the registry

use std::error::Error as _;
use std::sync::Arc;

use tmr_application::{DefaultToolingModelBuilderRegistry, ToolingModelBuilderRegistry};
use tmr_domain::error::Error;
use tmr_domain::ports::ModelBuilder;
use tmr_domain::value_objects::{ModelParameter, ParameterType, ProjectPath};

use crate::support::{
    CountingProject, EchoParameterBuilder, FailingBuilder, FixedBuilder, RecordingExecutor,
    SilentExecutor,
};

fn registry_with(
    executor: Arc<RecordingExecutor>,
    builder: Arc<dyn ModelBuilder>,
) -> DefaultToolingModelBuilderRegistry {
    let mut registry = DefaultToolingModelBuilderRegistry::new(executor);
    registry.register(builder);
    registry
}

// ============================================================================
// Simple builders
// ============================================================================

#[test]
fn test_one_operation_per_build() {
    let executor = RecordingExecutor::shared();
    let registry = registry_with(executor.clone(), FixedBuilder::new("idea", &["idea"]));
    let builder = registry.get_builder("idea").expect("idea resolves");
    let project = ProjectPath::root("shop");

    assert!(builder.can_build("idea"));
    assert!(!builder.can_build("eclipse"));
    assert_eq!(executor.calls(), 0);

    builder.build_all("idea", &project).expect("first build");
    builder.build_all("idea", &project).expect("second build");
    assert_eq!(executor.calls(), 2);
}

#[test]
fn test_simple_operation_description() {
    let executor = RecordingExecutor::shared();
    let registry = registry_with(executor.clone(), FixedBuilder::new("idea", &["idea"]));

    registry
        .get_builder("idea")
        .expect("idea resolves")
        .build_all("idea", &ProjectPath::root("shop").child("app"))
        .expect("build succeeds");

    let descriptors = executor.descriptors();
    assert_eq!(descriptors.len(), 1);
    assert_eq!(
        descriptors[0].display_name,
        "Build model 'idea' for project ':app'"
    );
    assert_eq!(
        descriptors[0].progress_display_name.as_deref(),
        Some("Building model 'idea'")
    );
}

#[test]
fn test_description_is_computed_lazily() {
    let project = CountingProject::new("shop");

    let executor = RecordingExecutor::shared();
    let registry = registry_with(executor, FixedBuilder::new("idea", &["idea"]));
    let builder = registry.get_builder("idea").expect("idea resolves");
    assert_eq!(project.lookups(), 0);

    // The builder itself looks the display name up once, the description once more
    builder.build_all("idea", &project).expect("build succeeds");
    assert_eq!(project.lookups(), 2);

    let mut silent = DefaultToolingModelBuilderRegistry::new(Arc::new(SilentExecutor));
    silent.register(FixedBuilder::new("idea", &["idea"]));
    let project = CountingProject::new("shop");
    silent
        .get_builder("idea")
        .expect("idea resolves")
        .build_all("idea", &project)
        .expect("build succeeds");
    assert_eq!(project.lookups(), 1);
}

#[test]
fn test_builder_name_is_forwarded() {
    let registry = registry_with(RecordingExecutor::shared(), FixedBuilder::new("idea", &["idea"]));
    let builder = registry.get_builder("idea").expect("idea resolves");
    assert_eq!(builder.builder_name(), "idea");
}

#[test]
fn test_simple_builder_has_no_parameterized_capability() {
    let registry = registry_with(RecordingExecutor::shared(), FixedBuilder::new("idea", &["idea"]));
    let builder = registry.get_builder("idea").expect("idea resolves");
    assert!(builder.as_parameterized().is_none());
}

#[test]
fn test_builder_failure_propagates_unchanged() {
    let executor = RecordingExecutor::shared();
    let registry = registry_with(
        executor.clone(),
        FailingBuilder::new("broken", "could not configure project"),
    );

    let error = match registry
        .get_builder("broken")
        .expect("broken resolves")
        .build_all("broken", &ProjectPath::root("shop"))
    {
        Ok(_) => panic!("Expected the build to fail"),
        Err(error) => error,
    };

    assert!(matches!(error, Error::ModelBuild { .. }));
    assert_eq!(error.to_string(), "could not configure project");
    assert_eq!(
        error.source().map(ToString::to_string).as_deref(),
        Some("build script missing")
    );
    assert_eq!(executor.calls(), 1);
}

// ============================================================================
// Parameterized builders
// ============================================================================

#[test]
fn test_parameterized_builder_resolves_with_capability() {
    let registry = registry_with(RecordingExecutor::shared(), EchoParameterBuilder::new("echo"));

    let builder = registry.get_builder("echo").expect("echo resolves");
    let parameterized = builder
        .as_parameterized()
        .expect("parameterized capability is kept");

    assert_eq!(parameterized.parameter_type(), ParameterType::of::<String>());
    assert!(parameterized.can_build("echo"));
}

#[test]
fn test_parameter_is_forwarded_unchanged() {
    let executor = RecordingExecutor::shared();
    let registry = registry_with(executor.clone(), EchoParameterBuilder::new("echo"));
    let parameterized = registry
        .get_builder("echo")
        .expect("echo resolves")
        .as_parameterized()
        .expect("parameterized capability is kept");

    let parameter: Box<ModelParameter> = Box::new("offline".to_string());
    let model = parameterized
        .build_all_with_parameter("echo", &*parameter, &ProjectPath::root("shop"))
        .expect("build succeeds");

    assert_eq!(model.downcast_ref::<String>().map(String::as_str), Some("offline"));
    assert_eq!(executor.calls(), 1);
    let descriptors = executor.descriptors();
    assert_eq!(
        descriptors[0].display_name,
        "Build parameterized model 'echo' for root project 'shop'"
    );
    assert_eq!(
        descriptors[0].progress_display_name.as_deref(),
        Some("Building parameterized model 'echo'")
    );
}

#[test]
fn test_parameterized_wrapper_still_builds_without_parameter() {
    let executor = RecordingExecutor::shared();
    let registry = registry_with(executor.clone(), EchoParameterBuilder::new("echo"));

    let model = registry
        .get_builder("echo")
        .expect("echo resolves")
        .build_all("echo", &ProjectPath::root("shop"))
        .expect("build succeeds");

    assert_eq!(model.downcast_ref::<String>().map(String::as_str), Some("no parameter"));
    assert_eq!(
        executor.descriptors()[0].display_name,
        "Build model 'echo' for root project 'shop'"
    );
}

#[test]
fn test_parameterized_failure_propagates_unchanged() {
    let registry = registry_with(RecordingExecutor::shared(), EchoParameterBuilder::new("echo"));
    let parameterized = registry
        .get_builder("echo")
        .expect("echo resolves")
        .as_parameterized()
        .expect("parameterized capability is kept");

    let parameter: Box<ModelParameter> = Box::new(42_u32);
    let result = parameterized.build_all_with_parameter("echo", &*parameter, &ProjectPath::root("shop"));

    match result {
        Err(Error::InvalidArgument { message }) => {
            assert_eq!(message, "expected a String parameter");
        }
        Err(other) => panic!("Expected InvalidArgument, got {other:?}"),
        Ok(_) => panic!("Expected the build to fail"),
    }
}
