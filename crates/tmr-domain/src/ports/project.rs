//! Project Port

/// A project a tooling model is built for
///
/// Opaque to the registry except for its display name, which only feeds
/// operation descriptions.
pub trait Project: Send + Sync {
    /// Human-readable name, e.g. `root project 'shop'`
    fn display_name(&self) -> String;
}
