//! Domain Value Objects
//!
//! Immutable value objects shared by builders, registries and executors.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ToolingModel`] | Opaque result of a model build |
//! | [`ParameterType`] | Parameter type expected by a parameterized builder |
//! | [`ProjectPath`] | Identity and display name of a project |
//! | [`BuildOperationDescriptor`] | Display text of a build operation |
//! | [`BuildOperationContext`] | Context handed to a running operation |

/// Tooling model and parameter value objects
pub mod model;
/// Build operation value objects
pub mod operation;
/// Project identity value objects
pub mod project;

pub use model::{ModelParameter, ParameterType, ToolingModel};
pub use operation::{BuildOperationContext, BuildOperationDescriptor, OperationId};
pub use project::ProjectPath;
