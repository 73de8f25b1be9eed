//! Unit tests for tooling model and project value objects

use tmr_domain::{ParameterType, Project, ProjectPath, ToolingModel};

#[derive(Debug, PartialEq)]
struct IdeaModel {
    modules: Vec<String>,
}

#[test]
fn test_model_clone_shares_value() {
    let model = ToolingModel::new(IdeaModel {
        modules: vec!["app".to_string()],
    });
    let copy = model.clone();

    assert!(model.ptr_eq(&copy));
    assert_eq!(
        copy.downcast_ref::<IdeaModel>().map(|m| m.modules.len()),
        Some(1)
    );
}

#[test]
fn test_empty_models_compare_equal() {
    assert!(ToolingModel::empty().ptr_eq(&ToolingModel::default()));
    assert!(!ToolingModel::empty().ptr_eq(&ToolingModel::new(1_u8)));
}

#[test]
fn test_parameter_type_identity() {
    assert_eq!(ParameterType::of::<String>(), ParameterType::of::<String>());
    assert_ne!(ParameterType::of::<String>(), ParameterType::of::<&str>());
    assert!(ParameterType::of::<String>().name().contains("String"));
}

#[test]
fn test_project_display_names() {
    let root = ProjectPath::root("shop");
    let app = root.child("app");

    assert_eq!(root.display_name(), "root project 'shop'");
    assert_eq!(app.display_name(), "project ':app'");
    assert_eq!(ProjectPath::parse(":app").ok(), Some(app));
}

#[test]
fn test_root_path_without_name_is_rejected() {
    assert!(ProjectPath::parse(":").is_err());
    assert!(ProjectPath::named_root("").is_err());
    assert_eq!(
        ProjectPath::named_root("shop").ok(),
        Some(ProjectPath::root("shop"))
    );
}

#[test]
fn test_deserialized_paths_are_validated() {
    let app: ProjectPath =
        serde_json::from_str(r#"{"name":"app","path":":app"}"#).expect("valid nested path");
    assert_eq!(app, ProjectPath::root("shop").child("app"));

    let root: ProjectPath =
        serde_json::from_str(r#"{"name":"shop","path":":"}"#).expect("valid root");
    assert_eq!(root.display_name(), "root project 'shop'");

    for invalid in [
        r#"{"name":"","path":":"}"#,
        r#"{"name":"app","path":"app"}"#,
        r#"{"name":"core","path":":libs::core"}"#,
        r#"{"name":"other","path":":app"}"#,
    ] {
        assert!(
            serde_json::from_str::<ProjectPath>(invalid).is_err(),
            "{invalid} should be rejected"
        );
    }
}

#[test]
fn test_serialized_path_reads_back() {
    let core = ProjectPath::root("shop").child("libs").child("core");
    let json = serde_json::to_string(&core).expect("serializes");
    let back: ProjectPath = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, core);
}
