//! Builder registry implementation
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DefaultToolingModelBuilderRegistry`] | Ordered builders plus optional parent, with resolution |
//! | [`BuildOperationWrappingBuilder`] | Runs a resolved builder's builds as build operations |
//! | [`ParameterizedBuildOperationWrappingBuilder`] | Same, for parameterized builders |
//! | [`VoidModelBuilder`] | Built-in builder for the reserved void model |

mod default_registry;
mod void_builder;
mod wrapping;

pub use default_registry::DefaultToolingModelBuilderRegistry;
pub use void_builder::VoidModelBuilder;
pub use wrapping::{BuildOperationWrappingBuilder, ParameterizedBuildOperationWrappingBuilder};
