//! Tracing build operation executor
//!
//! Runs every build operation inside a `build_operation` span and, when a
//! tracker is attached, records it as running until its body returns.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tmr_domain::error::Result;
use tmr_domain::ports::{BuildOperationExecutor, CallableBuildOperation};
use tmr_domain::value_objects::{BuildOperationContext, OperationId, ToolingModel};
use tracing::{debug, info_span};

use super::tracker::{OperationOutcome, OperationTracker};
use crate::config::OperationsConfig;
use crate::utils::TimedOperation;

/// Build operation executor backed by `tracing` spans
#[derive(Debug)]
pub struct TracingBuildOperationExecutor {
    next_id: AtomicU64,
    tracker: Option<Arc<OperationTracker>>,
}

impl TracingBuildOperationExecutor {
    /// Executor that only emits spans
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            tracker: None,
        }
    }

    /// Executor that also records operations in `tracker`
    pub fn with_tracker(tracker: Arc<OperationTracker>) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            tracker: Some(tracker),
        }
    }

    /// Executor configured from the `[operations]` section
    pub fn from_config(config: &OperationsConfig) -> Self {
        if config.tracking_enabled {
            Self::with_tracker(Arc::new(OperationTracker::from_config(config)))
        } else {
            Self::new()
        }
    }

    /// Attached tracker, if tracking is enabled
    pub fn tracker(&self) -> Option<&Arc<OperationTracker>> {
        self.tracker.as_ref()
    }

    fn allocate_id(&self) -> OperationId {
        OperationId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TracingBuildOperationExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildOperationExecutor for TracingBuildOperationExecutor {
    fn call(&self, operation: Box<dyn CallableBuildOperation + '_>) -> Result<ToolingModel> {
        let id = self.allocate_id();
        let descriptor = operation.description();

        let span = info_span!(
            "build_operation",
            id = id.value(),
            name = %descriptor.display_name,
            progress = %descriptor.progress_text(),
        );
        let _entered = span.enter();

        let timer = TimedOperation::start();
        let mut guard = self.tracker.as_deref().map(|tracker| {
            tracker.started(id, &descriptor);
            RunningGuard {
                tracker,
                id,
                timer,
                armed: true,
            }
        });

        let mut context = BuildOperationContext::new(id);
        let result = operation.call(&mut context);

        let outcome = match &result {
            Ok(_) => {
                debug!(elapsed_ms = timer.elapsed_ms(), "Build operation completed");
                OperationOutcome::Succeeded
            }
            Err(e) => {
                debug!(elapsed_ms = timer.elapsed_ms(), error = %e, "Build operation failed");
                OperationOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };

        if let Some(guard) = guard.as_mut() {
            guard.finish(context.status().map(str::to_string), outcome);
        }
        result
    }
}

/// Marks the operation abandoned if the body unwinds
struct RunningGuard<'a> {
    tracker: &'a OperationTracker,
    id: OperationId,
    timer: TimedOperation,
    armed: bool,
}

impl RunningGuard<'_> {
    fn finish(&mut self, status: Option<String>, outcome: OperationOutcome) {
        self.armed = false;
        self.tracker
            .finished(self.id, self.timer.elapsed_ms(), status, outcome);
    }
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.tracker.finished(
                self.id,
                self.timer.elapsed_ms(),
                None,
                OperationOutcome::Abandoned,
            );
        }
    }
}
