//! Build operation value objects
//!
//! A build operation is a named unit of work executed by a
//! [`BuildOperationExecutor`](crate::ports::BuildOperationExecutor).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a build operation, unique within one executor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperationId(u64);

impl OperationId {
    /// Wrap a raw identifier
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw identifier value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable description of a build operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOperationDescriptor {
    /// Full display name, e.g. `Build model 'x' for root project 'shop'`
    pub display_name: String,
    /// Shorter text for progress reporting
    pub progress_display_name: Option<String>,
}

impl BuildOperationDescriptor {
    /// Descriptor with the given display name and no progress text
    pub fn display_name<S: Into<String>>(display_name: S) -> Self {
        Self {
            display_name: display_name.into(),
            progress_display_name: None,
        }
    }

    /// Set the progress display name
    pub fn progress_display_name<S: Into<String>>(mut self, progress: S) -> Self {
        self.progress_display_name = Some(progress.into());
        self
    }

    /// Progress text, falling back to the display name
    pub fn progress_text(&self) -> &str {
        self.progress_display_name
            .as_deref()
            .unwrap_or(&self.display_name)
    }
}

/// Per-operation context handed to the operation body
#[derive(Debug, Clone)]
pub struct BuildOperationContext {
    id: OperationId,
    status: Option<String>,
}

impl BuildOperationContext {
    /// Context for the operation `id`
    pub fn new(id: OperationId) -> Self {
        Self { id, status: None }
    }

    /// Identifier of the running operation
    pub fn id(&self) -> OperationId {
        self.id
    }

    /// Report a short status for the running operation
    pub fn set_status<S: Into<String>>(&mut self, status: S) {
        self.status = Some(status.into());
    }

    /// Last reported status
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
