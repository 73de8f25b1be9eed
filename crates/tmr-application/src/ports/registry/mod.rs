//! Model Builder Registry Ports
//!
//! Defines the registry contract used by build setup code and tooling
//! callers, plus the auto-registration infrastructure for builders. Builders
//! can be declared at compile time with the `linkme` crate and picked up by
//! a registry during setup.
//!
//! ## Registration Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Builder Registration Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Crate defines:   #[linkme::distributed_slice(MODEL_BUILDERS)]│
//! │                      static ENTRY: ModelBuilderEntry = ...      │
//! │                              ↓                                  │
//! │  2. Setup calls:     registry.register_discovered()             │
//! │                              ↓                                  │
//! │  3. Caller asks:     registry.get_builder("idea")               │
//! │                              ↓                                  │
//! │  4. Wrapped builder: builder.build_all("idea", &project)        │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use tmr_application::ports::registry::{ModelBuilderEntry, MODEL_BUILDERS};
//!
//! #[linkme::distributed_slice(MODEL_BUILDERS)]
//! static IDEA_MODEL: ModelBuilderEntry = ModelBuilderEntry {
//!     name: "idea",
//!     description: "IDE project model",
//!     factory: idea_model_builder,
//! };
//!
//! fn idea_model_builder() -> Arc<dyn ModelBuilder> {
//!     Arc::new(IdeaModelBuilder)
//! }
//! ```

pub mod builders;
pub mod tooling;

pub use builders::{MODEL_BUILDERS, ModelBuilderEntry, list_model_builders};
pub use tooling::ToolingModelBuilderRegistry;
