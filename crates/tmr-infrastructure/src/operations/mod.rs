//! Build operation execution
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`TracingBuildOperationExecutor`] | Runs builds inside `build_operation` spans |
//! | [`OperationTracker`] | Running operations and bounded history |

mod executor;
mod tracker;

pub use executor::TracingBuildOperationExecutor;
pub use tracker::{OperationOutcome, OperationRecord, OperationTracker, RunningOperation};
