//! # Domain Layer
//!
//! Core contracts of the Tooling Model Registry.
//!
//! A tooling model is an opaque object describing some aspect of a project
//! (its dependencies, its source layout, ...). Model builders produce them,
//! a registry picks the builder for a requested model name, and every build
//! runs as a traced build operation.
//!
//! This crate holds only the contracts:
//!
//! - [`error`] - domain error taxonomy and `Result` alias
//! - [`constants`] - reserved names and description prefixes
//! - [`ports`] - builder, project and executor traits
//! - [`value_objects`] - models, parameter types, project paths, operation descriptors

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use constants::*;
pub use error::{Error, Result};
pub use ports::*;
pub use value_objects::*;
