//! Operations configuration types

use crate::constants::OPERATIONS_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};

/// Build operation tracking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationsConfig {
    /// Record running and finished operations in addition to emitting spans
    pub tracking_enabled: bool,

    /// Maximum number of finished operations kept in memory
    pub history_capacity: usize,
}

/// Returns default operations configuration with:
/// - Tracking enabled
/// - History capacity from infrastructure constants
impl Default for OperationsConfig {
    fn default() -> Self {
        Self {
            tracking_enabled: true,
            history_capacity: OPERATIONS_HISTORY_CAPACITY,
        }
    }
}
