//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `tmr_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tmr.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tmr";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TMR";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_NESTING_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "TMR_LOG";

/// Default log file name stem
pub const DEFAULT_LOG_FILE_STEM: &str = "tmr";

// ============================================================================
// OPERATIONS CONSTANTS
// ============================================================================

/// Number of finished build operations kept for inspection
pub const OPERATIONS_HISTORY_CAPACITY: usize = 256;

/// Upper bound accepted for the operations history capacity
pub const MAX_OPERATIONS_HISTORY_CAPACITY: usize = 65_536;
