//! Resolution and dispatch through the traced services

use std::sync::Arc;

use tmr::infrastructure::config::AppConfig;
use tmr::{
    DefaultToolingModelBuilderRegistry, Error, ModelBuilder, ProjectPath, ToolingModelBuilderRegistry,
    ToolingServices, VOID_MODEL_NAME,
};

use crate::builders::{BrokenBuilder, LayoutBuilder, StaticBuilder};

fn services_with(builders: Vec<Arc<dyn ModelBuilder>>) -> ToolingServices {
    ToolingServices::with_builders(&AppConfig::default(), builders)
}

#[test]
fn test_overlapping_builders_are_ambiguous() {
    let services = services_with(vec![
        StaticBuilder::shared("idea", "X"),
        StaticBuilder::shared("eclipse", "X"),
    ]);

    let error = services.registry().get_builder("X").err().expect("two builders match");
    match &error {
        Error::AmbiguousBuilder {
            model_name,
            candidates,
        } => {
            assert_eq!(model_name, "X");
            assert_eq!(candidates, &vec!["idea".to_string(), "eclipse".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        error.to_string(),
        "Multiple builders are available to build a model of type 'X'."
    );
}

#[test]
fn test_child_delegates_to_parent_builder() {
    let services = services_with(vec![StaticBuilder::shared("C", "Y")]);
    let child = services.child_registry();

    let model = child
        .get_builder("Y")
        .expect("parent builds Y")
        .build_all("Y", &ProjectPath::root("included"))
        .expect("build succeeds");

    assert_eq!(
        model.downcast_ref::<String>().map(String::as_str),
        Some("C for root project 'included'")
    );
    let tracker = services.tracker().expect("tracking enabled");
    assert_eq!(
        tracker.recent()[0].display_name,
        "Build model 'Y' for root project 'included'"
    );
}

#[test]
fn test_unknown_model_names_the_model() {
    let services = services_with(Vec::new());

    let error = services
        .registry()
        .get_builder("com.example.Unknown")
        .err()
        .expect("nobody builds it");

    assert_eq!(error.model_name(), Some("com.example.Unknown"));
    assert_eq!(
        error.to_string(),
        "No builders are available to build a model of type 'com.example.Unknown'."
    );
}

#[test]
fn test_builder_error_passes_through_unchanged() {
    let services = services_with(vec![Arc::new(BrokenBuilder)]);
    let project = ProjectPath::root("shop").child("app");

    let error = services
        .registry()
        .get_builder("broken.Model")
        .expect("resolves")
        .build_all("broken.Model", &project)
        .expect_err("builder fails");

    assert!(matches!(error, Error::ModelBuild { .. }));
    assert_eq!(
        error.to_string(),
        "Could not resolve all dependencies for configuration ':app:runtimeClasspath'"
    );
    let source = std::error::Error::source(&error).expect("cause kept");
    assert_eq!(source.to_string(), "repository timed out");

    let tracker = services.tracker().expect("tracking enabled");
    assert_eq!(tracker.failed_count(), 1);
}

#[test]
fn test_parameterized_builder_keeps_its_capability() {
    let services = services_with(vec![Arc::new(LayoutBuilder)]);
    let project = ProjectPath::root("shop");

    let builder = services.registry().get_builder("layout.Model").expect("resolves");
    let parameterized = builder
        .clone()
        .as_parameterized()
        .expect("parameterized capability survives wrapping");

    assert_eq!(parameterized.parameter_type().name(), "u8");
    let depth: u8 = 3;
    let model = parameterized
        .build_all_with_parameter("layout.Model", &depth, &project)
        .expect("parameterized build");
    assert_eq!(
        model.downcast_ref::<String>().map(String::as_str),
        Some("layout of root project 'shop' at depth 3")
    );

    let plain = builder.build_all("layout.Model", &project).expect("plain build");
    assert_eq!(
        plain.downcast_ref::<String>().map(String::as_str),
        Some("layout of root project 'shop'")
    );

    let tracker = services.tracker().expect("tracking enabled");
    let names: Vec<String> = tracker.recent().into_iter().map(|r| r.display_name).collect();
    assert_eq!(
        names,
        vec![
            "Build parameterized model 'layout.Model' for root project 'shop'".to_string(),
            "Build model 'layout.Model' for root project 'shop'".to_string(),
        ]
    );
}

#[test]
fn test_void_model_from_nested_registries() {
    let services = services_with(Vec::new());
    let child: Arc<dyn ToolingModelBuilderRegistry> = Arc::new(services.child_registry());
    let grandchild =
        DefaultToolingModelBuilderRegistry::with_parent(services.executor(), child);

    let model = grandchild
        .get_builder(VOID_MODEL_NAME)
        .expect("void resolves at the root")
        .build_all(VOID_MODEL_NAME, &ProjectPath::root("deep"))
        .expect("void build");
    assert!(model.is_empty());
}
