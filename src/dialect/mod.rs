//! Engine dialect definitions.
//!
//! Each analytical engine implements `EngineDialect` to describe how the
//! host framework should render time-bucketed `GROUP BY`/`SELECT`
//! expressions and convert epoch-integer columns for that engine, plus the
//! identification constants the framework's connection and query-building
//! logic consumes (engine key, display name, URI placeholder, row-limiting
//! strategy, column-name length cap).
//!
//! Dialects are plain unit structs reached through
//! [`crate::registry::EngineRegistry`]; the trait carries ANSI-ish defaults
//! so an engine only overrides what differs.
//!
//! # Usage
//!
//! ```ignore
//! use timegrain::dialect::{EngineDialect, Kinetica};
//!
//! let expr = Kinetica.time_grain_expr(Some("P1D"), "ts");
//! ```

mod kinetica;

pub use kinetica::Kinetica;

use serde::Serialize;

use crate::grain::GrainTable;
use crate::template::SqlTemplate;

/// Row-limiting strategy the framework must use for an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitMethod {
    /// Engine accepts a native `LIMIT` clause.
    #[default]
    Native,
    /// Wrap the generated statement in an outer `SELECT ... LIMIT n`.
    WrapSql,
    /// Rewrite the statement to force a limit into it.
    ForceLimit,
}

/// Serializable snapshot of an engine's identification constants.
///
/// Consumed by the framework's catalog and connection-form plumbing, not by
/// expression rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineInfo {
    pub engine: &'static str,
    pub engine_name: &'static str,
    pub uri_placeholder: &'static str,
    pub limit_method: LimitMethod,
    pub max_column_name_length: Option<usize>,
}

/// Engine dialect trait - a time-grain provider plus identification
/// constants.
///
/// Implementations are stateless and side-effect-free; every method is a
/// pure function of its inputs and the engine's static tables, so a dialect
/// may be shared freely across threads.
pub trait EngineDialect: std::fmt::Debug + Send + Sync {
    /// Short engine key, used for registry lookup.
    fn engine(&self) -> &'static str;

    /// Human-readable engine name.
    fn engine_name(&self) -> &'static str;

    /// Connection-string template shown when configuring the engine.
    fn uri_placeholder(&self) -> &'static str;

    /// How the framework must apply row limits for this engine.
    fn limit_method(&self) -> LimitMethod {
        LimitMethod::Native
    }

    /// Maximum column-name length the engine accepts, if bounded.
    fn max_column_name_length(&self) -> Option<usize> {
        None
    }

    /// The engine's duration-code to SQL template table.
    fn time_grains(&self) -> &GrainTable;

    /// Render a time-bucket expression for `col` at the requested grain.
    ///
    /// `col` must already be a dialect-safe identifier or expression; it is
    /// substituted verbatim. `None` (or an empty code) passes the column
    /// through unchanged. An unsupported code returns `None`; whether that
    /// becomes a fallback or an error is the caller's decision.
    fn time_grain_expr(&self, code: Option<&str>, col: &str) -> Option<String> {
        self.time_grains().resolve(code, col)
    }

    /// Template converting a seconds-since-epoch integer column to the
    /// engine's native timestamp type, if the engine has one.
    fn epoch_to_timestamp(&self) -> Option<&SqlTemplate> {
        None
    }

    /// Template converting a milliseconds-since-epoch integer column.
    fn epoch_ms_to_timestamp(&self) -> Option<&SqlTemplate> {
        None
    }

    /// Identification constants as one serializable value.
    fn info(&self) -> EngineInfo {
        EngineInfo {
            engine: self.engine(),
            engine_name: self.engine_name(),
            uri_placeholder: self.uri_placeholder(),
            limit_method: self.limit_method(),
            max_column_name_length: self.max_column_name_length(),
        }
    }
}
