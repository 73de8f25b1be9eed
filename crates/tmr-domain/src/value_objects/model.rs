//! Tooling model value objects
//!
//! Models are opaque to the registry: a builder produces one and the
//! caller interprets it. Parameters travel the other way, unchanged.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Type-erased parameter passed to a parameterized builder
pub type ModelParameter = dyn Any + Send + Sync;

/// Opaque result of a model build
///
/// Wraps any `Send + Sync` value, or nothing at all for the void model.
/// Cloning is cheap and shares the underlying value.
#[derive(Clone, Default)]
pub struct ToolingModel(Option<Arc<dyn Any + Send + Sync>>);

impl ToolingModel {
    /// Wrap a computed model
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Some(Arc::new(value)))
    }

    /// The absent model, as produced for the void model name
    pub fn empty() -> Self {
        Self(None)
    }

    /// Whether this is the absent model
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the model as `T` if it holds a value of that type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_deref().and_then(|value| value.downcast_ref::<T>())
    }

    /// Whether two models share the same underlying value
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for ToolingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(_) => f.write_str("ToolingModel(..)"),
            None => f.write_str("ToolingModel(empty)"),
        }
    }
}

/// Descriptor of the parameter type a parameterized builder expects
#[derive(Debug, Clone, Copy)]
pub struct ParameterType {
    name: &'static str,
    id: TypeId,
}

impl ParameterType {
    /// Descriptor for `T`
    pub fn of<T: Any>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Rust type name of the parameter
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `parameter` is an instance of this type
    pub fn matches(&self, parameter: &ModelParameter) -> bool {
        parameter.type_id() == self.id
    }
}

impl PartialEq for ParameterType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ParameterType {}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
