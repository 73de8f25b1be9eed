//! Infrastructure utilities
//!
//! Reusable helpers for timing.

mod timing;

pub use timing::TimedOperation;
