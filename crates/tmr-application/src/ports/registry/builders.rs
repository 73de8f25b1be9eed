//! Model Builder Discovery
//!
//! Auto-registration system for model builders using linkme distributed slices.
//! Builders declare themselves via `#[linkme::distributed_slice]` and are
//! registered by whichever registry calls `register_discovered`.

use std::sync::Arc;

use tmr_domain::ports::ModelBuilder;

/// Registry entry for model builders
///
/// Each builder declared at compile time registers itself with this entry
/// using `#[linkme::distributed_slice(MODEL_BUILDERS)]`. The factory is
/// invoked once per registry that picks the entry up.
pub struct ModelBuilderEntry {
    /// Unique builder name (e.g., "idea", "eclipse")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the builder instance
    pub factory: fn() -> Arc<dyn ModelBuilder>,
}

// Auto-collection via linkme distributed slices - builders submit entries at compile time
#[linkme::distributed_slice]
pub static MODEL_BUILDERS: [ModelBuilderEntry] = [..];

/// List all declared model builders
///
/// Returns a list of (name, description) tuples for every entry in
/// [`MODEL_BUILDERS`]. Useful for diagnostics.
pub fn list_model_builders() -> Vec<(&'static str, &'static str)> {
    MODEL_BUILDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
