//! Build operation tracking
//!
//! Keeps the set of running build operations and a bounded history of
//! finished ones, so that tooling front-ends can show what the registry is
//! busy building.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::Mutex;
use serde::Serialize;
use tmr_domain::value_objects::{BuildOperationDescriptor, OperationId};

use crate::config::OperationsConfig;

/// A build operation that has started and not finished yet
#[derive(Debug, Clone, Serialize)]
pub struct RunningOperation {
    /// Operation identifier
    pub id: OperationId,
    /// Full display name
    pub display_name: String,
    /// Progress display name, if any
    pub progress_display_name: Option<String>,
    /// Wall-clock start time
    pub started_at: DateTime<Utc>,
}

/// How a build operation ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OperationOutcome {
    /// The body returned a model
    Succeeded,
    /// The body returned an error
    Failed {
        /// Display text of the error
        message: String,
    },
    /// The body never returned (it panicked)
    Abandoned,
}

/// A finished build operation
#[derive(Debug, Clone, Serialize)]
pub struct OperationRecord {
    /// Operation identifier
    pub id: OperationId,
    /// Full display name
    pub display_name: String,
    /// Wall-clock start time
    pub started_at: DateTime<Utc>,
    /// Duration in milliseconds
    pub elapsed_ms: u64,
    /// Last status reported by the body
    pub status: Option<String>,
    /// How the operation ended
    pub outcome: OperationOutcome,
}

/// Registry of running and recently finished build operations
#[derive(Debug)]
pub struct OperationTracker {
    running: DashMap<OperationId, RunningOperation>,
    recent: Mutex<VecDeque<OperationRecord>>,
    capacity: usize,
    completed: AtomicU64,
    failed: AtomicU64,
}

impl OperationTracker {
    /// Create a tracker keeping at most `capacity` finished operations
    ///
    /// The history grows on demand up to `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            running: DashMap::new(),
            recent: Mutex::new(VecDeque::new()),
            capacity,
            completed: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    /// Create a tracker from configuration
    pub fn from_config(config: &OperationsConfig) -> Self {
        Self::new(config.history_capacity)
    }

    /// Record that an operation started
    pub fn started(&self, id: OperationId, descriptor: &BuildOperationDescriptor) {
        self.running.insert(
            id,
            RunningOperation {
                id,
                display_name: descriptor.display_name.clone(),
                progress_display_name: descriptor.progress_display_name.clone(),
                started_at: Utc::now(),
            },
        );
    }

    /// Record that an operation finished
    ///
    /// Unknown identifiers are ignored.
    pub fn finished(
        &self,
        id: OperationId,
        elapsed_ms: u64,
        status: Option<String>,
        outcome: OperationOutcome,
    ) {
        let Some((_, running)) = self.running.remove(&id) else {
            return;
        };

        self.completed.fetch_add(1, Ordering::Relaxed);
        if outcome != OperationOutcome::Succeeded {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }

        if self.capacity == 0 {
            return;
        }
        let mut recent = self.recent.lock();
        if recent.len() == self.capacity {
            recent.pop_front();
        }
        recent.push_back(OperationRecord {
            id,
            display_name: running.display_name,
            started_at: running.started_at,
            elapsed_ms,
            status,
            outcome,
        });
    }

    /// Operations currently running, ordered by identifier
    pub fn running(&self) -> Vec<RunningOperation> {
        let mut running: Vec<RunningOperation> =
            self.running.iter().map(|entry| entry.value().clone()).collect();
        running.sort_by_key(|operation| operation.id);
        running
    }

    /// Recently finished operations, oldest first
    pub fn recent(&self) -> Vec<OperationRecord> {
        self.recent.lock().iter().cloned().collect()
    }

    /// Number of operations that finished, whatever the outcome
    pub fn completed_count(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    /// Number of operations that failed or were abandoned
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }
}
