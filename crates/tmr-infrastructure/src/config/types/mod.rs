//! Configuration types module

pub mod app;
pub mod logging;
pub mod operations;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use operations::OperationsConfig;
