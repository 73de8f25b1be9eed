//! Domain layer constants
//!
//! Contains constants that are part of the domain contract shared by
//! builders, registries and callers. Infrastructure-specific constants
//! remain in `tmr_infrastructure::constants`.

// ============================================================================
// MODEL NAME CONSTANTS
// ============================================================================

/// Reserved model name meaning "no model".
///
/// Every root registry resolves it to the built-in void builder, which
/// produces an empty model. Builders must not claim this name.
pub const VOID_MODEL_NAME: &str = "void";

// ============================================================================
// PROJECT CONSTANTS
// ============================================================================

/// Separator between segments of a project path
pub const PROJECT_PATH_SEPARATOR: char = ':';

// ============================================================================
// BUILD OPERATION CONSTANTS
// ============================================================================

/// Display name prefix of a simple model build operation
pub const BUILD_MODEL_DISPLAY_PREFIX: &str = "Build model";

/// Progress display name prefix of a simple model build operation
pub const BUILD_MODEL_PROGRESS_PREFIX: &str = "Building model";

/// Display name prefix of a parameterized model build operation
pub const BUILD_PARAMETERIZED_MODEL_DISPLAY_PREFIX: &str = "Build parameterized model";

/// Progress display name prefix of a parameterized model build operation
pub const BUILD_PARAMETERIZED_MODEL_PROGRESS_PREFIX: &str = "Building parameterized model";
