//! Build Operation Ports
//!
//! Defines the contract of the executor that runs model builds as traced
//! units of work. How an executor schedules, times or reports operations is
//! its own business; callers only rely on the guarantees below.

use crate::error::Result;
use crate::value_objects::{BuildOperationContext, BuildOperationDescriptor, ToolingModel};

/// A unit of work that produces a tooling model
pub trait CallableBuildOperation: Send {
    /// Describe the operation
    ///
    /// Evaluated by the executor only when the operation actually starts.
    fn description(&self) -> BuildOperationDescriptor;

    /// Run the operation body
    fn call(self: Box<Self>, context: &mut BuildOperationContext) -> Result<ToolingModel>;
}

/// Executes build operations
///
/// Implementations must invoke [`CallableBuildOperation::call`] exactly once
/// and return its result verbatim, success or failure.
pub trait BuildOperationExecutor: Send + Sync {
    /// Run `operation` as a traced unit of work
    fn call(&self, operation: Box<dyn CallableBuildOperation + '_>) -> Result<ToolingModel>;
}
