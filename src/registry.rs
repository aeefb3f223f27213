//! Engine dialect registry.
//!
//! The host framework resolves dialects by their short engine key at query
//! time. The registry is the seam where the adapter layer's decision-free
//! lookup misses become typed errors: a grain table answers `None`, the
//! registry turns that into [`DialectError::UnsupportedTimeGrain`].

use std::collections::HashMap;

use crate::dialect::{EngineDialect, Kinetica};
use crate::error::{DialectError, DialectResult};

/// Name to dialect map consulted when rendering queries.
#[derive(Debug, Default)]
pub struct EngineRegistry {
    engines: HashMap<&'static str, &'static dyn EngineDialect>,
}

impl EngineRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with every dialect this crate ships.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(&Kinetica);
        registry
    }

    /// Register a dialect under its engine key.
    ///
    /// A later registration for the same key replaces the earlier one, so a
    /// host can shadow a shipped dialect with its own.
    pub fn register(&mut self, dialect: &'static dyn EngineDialect) {
        self.engines.insert(dialect.engine(), dialect);
    }

    /// Look up a dialect by engine key.
    pub fn get(&self, engine: &str) -> Option<&'static dyn EngineDialect> {
        self.engines.get(engine).copied()
    }

    /// Registered engine keys, sorted for stable listings.
    pub fn engines(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.engines.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Render a time-bucket expression for `col` on `engine` at the
    /// requested grain, surfacing misses as typed errors.
    pub fn time_bucket_expr(
        &self,
        engine: &str,
        code: Option<&str>,
        col: &str,
    ) -> DialectResult<String> {
        let dialect = self
            .get(engine)
            .ok_or_else(|| DialectError::UnknownEngine(engine.to_string()))?;
        dialect
            .time_grain_expr(code, col)
            .ok_or_else(|| DialectError::UnsupportedTimeGrain {
                engine: dialect.engine(),
                code: code.unwrap_or_default().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grain::codes;

    #[test]
    fn test_builtin_registry_lists_kinetica() {
        let registry = EngineRegistry::builtin();
        assert_eq!(registry.engines(), vec!["kinetica"]);
        assert!(registry.get("kinetica").is_some());
    }

    #[test]
    fn test_unknown_engine_errors() {
        let registry = EngineRegistry::builtin();
        assert_eq!(
            registry.time_bucket_expr("druid", Some(codes::DAY), "ts"),
            Err(DialectError::UnknownEngine("druid".into()))
        );
    }

    #[test]
    fn test_unsupported_grain_errors() {
        let registry = EngineRegistry::builtin();
        assert_eq!(
            registry.time_bucket_expr("kinetica", Some("PT2M"), "ts"),
            Err(DialectError::UnsupportedTimeGrain {
                engine: "kinetica",
                code: "PT2M".into(),
            })
        );
    }

    #[test]
    fn test_time_bucket_expr_renders() {
        let registry = EngineRegistry::builtin();
        let expr = registry
            .time_bucket_expr("kinetica", Some(codes::YEAR), "ts")
            .unwrap();
        assert_eq!(expr, "DATETIME(DATE_TO_EPOCH_MSECS(YEAR(ts), 1, 1, 0, 0, 0, 0))");
    }

    #[test]
    fn test_no_grain_passes_through() {
        let registry = EngineRegistry::builtin();
        assert_eq!(
            registry.time_bucket_expr("kinetica", None, "ts").unwrap(),
            "ts"
        );
    }
}
