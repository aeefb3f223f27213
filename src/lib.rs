//! # Timegrain
//!
//! Engine dialect adapters for time-grain SQL rendering.
//!
//! A host SQL-abstraction framework that aggregates timestamps ("group this
//! by 5-minute bucket") needs engine-specific SQL for the truncation. This
//! crate supplies that translation layer:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │   host framework (query builder, connections, UI)    │
//! └─────────────────────────────────────────────────────┘
//!                          │ engine key + duration code + column expr
//!                          ▼
//! ┌─────────────────────────────────────────────────────┐
//! │   EngineRegistry ── name → EngineDialect             │
//! └─────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────┐
//! │   GrainTable ── duration code → SqlTemplate          │
//! │   (per engine, immutable, built once)                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is stateless and read-only after initialization, so the whole
//! crate is safe for unlimited concurrent use without synchronization.
//!
//! The shipped dialect is Kinetica ([`dialect::Kinetica`]).

pub mod dialect;
pub mod error;
pub mod grain;
pub mod registry;
pub mod template;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::dialect::{EngineDialect, EngineInfo, Kinetica, LimitMethod};
    pub use crate::error::{DialectError, DialectResult};
    pub use crate::grain::{codes, GrainTable};
    pub use crate::registry::EngineRegistry;
    pub use crate::template::{SqlTemplate, TemplateError};
}
