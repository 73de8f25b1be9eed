//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the registry core and the code
//! around it. Builders and executors are implemented outside the core and
//! consumed through these traits.
//!
//! ## Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ModelBuilder`] | Builds named tooling models |
//! | [`ParameterizedModelBuilder`] | Builds models from an extra typed parameter |
//! | [`Project`] | Project a model is built for |
//! | [`BuildOperationExecutor`] | Runs builds as traced units of work |

/// Model builder ports
pub mod builder;
/// Build operation ports
pub mod operations;
/// Project port
pub mod project;

pub use builder::{ModelBuilder, ParameterizedModelBuilder};
pub use operations::{BuildOperationExecutor, CallableBuildOperation};
pub use project::Project;
