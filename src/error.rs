//! Error types surfaced at the framework seam.

use thiserror::Error;

/// Result type for registry-level dialect resolution.
pub type DialectResult<T> = Result<T, DialectError>;

/// Errors produced when the host framework resolves an engine or grain.
///
/// Grain tables themselves never error; a table miss only becomes one of
/// these once the framework asks the registry for a rendered expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialectError {
    /// No dialect registered under the requested engine key.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// The engine has no template for the requested duration code.
    #[error("engine {engine} does not support time grain {code:?}")]
    UnsupportedTimeGrain {
        /// Engine key the lookup ran against.
        engine: &'static str,
        /// The duration code that missed the grain table.
        code: String,
    },
}
