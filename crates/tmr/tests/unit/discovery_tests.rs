//! Builders declared at compile time are picked up by the services

use std::sync::Arc;

use linkme::distributed_slice;
use tmr::infrastructure::config::AppConfig;
use tmr::{
    MODEL_BUILDERS, ModelBuilder, ModelBuilderEntry, ProjectPath, ToolingModelBuilderRegistry,
    ToolingServices, list_model_builders,
};

use crate::builders::StaticBuilder;

#[distributed_slice(MODEL_BUILDERS)]
static KOTLIN_DSL_SCRIPTS: ModelBuilderEntry = ModelBuilderEntry {
    name: "kotlin-dsl-scripts",
    description: "Kotlin DSL script classpath model",
    factory: kotlin_dsl_scripts,
};

fn kotlin_dsl_scripts() -> Arc<dyn ModelBuilder> {
    StaticBuilder::shared("kotlin-dsl-scripts", "kotlin.dsl.Scripts")
}

#[test]
fn test_declared_builder_is_listed() {
    assert!(
        list_model_builders()
            .iter()
            .any(|(name, description)| *name == "kotlin-dsl-scripts"
                && description.contains("Kotlin DSL"))
    );
}

#[test]
fn test_services_register_declared_builders() {
    let services = ToolingServices::from_config(&AppConfig::default());

    let model = services
        .registry()
        .get_builder("kotlin.dsl.Scripts")
        .expect("declared builder resolves")
        .build_all("kotlin.dsl.Scripts", &ProjectPath::root("shop"))
        .expect("build succeeds");

    assert_eq!(
        model.downcast_ref::<String>().map(String::as_str),
        Some("kotlin-dsl-scripts for root project 'shop'")
    );
}

#[test]
fn test_child_registry_does_not_duplicate_declared_builders() {
    let services = ToolingServices::from_config(&AppConfig::default());
    let child = services.child_registry();

    assert!(child.is_empty());
    assert!(child.get_builder("kotlin.dsl.Scripts").is_ok());
}
