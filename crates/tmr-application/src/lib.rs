//! Application Layer - Tooling Model Registry
//!
//! This crate holds the builder registry: the component that picks exactly
//! one model builder for a requested model name and hands it back wrapped so
//! that every build runs as a traced build operation.
//!
//! ## Architecture
//!
//! ```text
//! caller ──get_builder("x")──▶ child registry ──(no local match)──▶ root registry
//!                                   │                                   │
//!                          exactly one match                   exactly one match
//!                                   ▼                                   ▼
//!                      BuildOperationWrappingBuilder ──build_all──▶ BuildOperationExecutor
//!                                                                       │
//!                                                                       ▼
//!                                                               delegate.build_all
//! ```
//!
//! ## Modules
//!
//! - `ports::registry` - registry contract and compile-time builder discovery
//! - `registry` - default registry, operation-wrapping builders, void builder
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `tmr-domain`: for builder, project and executor ports
//! - `tracing` and `linkme` for logging and builder discovery

pub mod ports;
pub mod registry;

pub use ports::*;
pub use registry::*;
