//! Duration codes and per-engine grain tables.
//!
//! A grain table maps standardized ISO-8601-style duration codes (`PT5M`,
//! `P1D`, ...) to the SQL templates that floor a timestamp column to that
//! granularity in one engine's dialect. Tables are built once at process
//! start and read-only thereafter, so resolution is a pure function of the
//! requested code and column expression.

use std::collections::HashMap;

use crate::template::SqlTemplate;

/// Standard duration codes the host framework requests.
pub mod codes {
    pub const SECOND: &str = "PT1S";
    pub const MINUTE: &str = "PT1M";
    pub const FIVE_MINUTES: &str = "PT5M";
    pub const TEN_MINUTES: &str = "PT10M";
    pub const FIFTEEN_MINUTES: &str = "PT15M";
    pub const THIRTY_MINUTES: &str = "PT30M";
    pub const HALF_HOUR: &str = "PT0.5H";
    pub const HOUR: &str = "PT1H";
    pub const DAY: &str = "P1D";
    pub const WEEK: &str = "P1W";
    pub const MONTH: &str = "P1M";
    pub const QUARTER: &str = "P3M";
    pub const QUARTER_YEAR: &str = "P0.25Y";
    pub const YEAR: &str = "P1Y";

    /// Every standard code, narrowest grain first.
    pub const STANDARD: &[&str] = &[
        SECOND,
        MINUTE,
        FIVE_MINUTES,
        TEN_MINUTES,
        FIFTEEN_MINUTES,
        THIRTY_MINUTES,
        HALF_HOUR,
        HOUR,
        DAY,
        WEEK,
        MONTH,
        QUARTER,
        QUARTER_YEAR,
        YEAR,
    ];
}

/// Immutable duration-code to template map for one engine.
///
/// The identity entry is the no-grain case: the column expression passes
/// through unchanged. Codes absent from the table are not supported by the
/// engine; [`GrainTable::resolve`] signals that with `None` and leaves the
/// fallback-or-error decision to the caller.
#[derive(Debug, Clone, Default)]
pub struct GrainTable {
    identity: Option<SqlTemplate>,
    entries: HashMap<&'static str, SqlTemplate>,
}

impl GrainTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a grain entry.
    ///
    /// # Panics
    ///
    /// Panics if `template` carries a placeholder other than `{col}`; see
    /// [`SqlTemplate::of`].
    pub fn with(mut self, code: &'static str, template: &'static str) -> Self {
        self.entries.insert(code, SqlTemplate::of(template));
        self
    }

    /// Add the identity (no-grain) entry.
    pub fn with_identity(mut self) -> Self {
        self.identity = Some(SqlTemplate::of("{col}"));
        self
    }

    /// Look up `code` and substitute `col` into its template.
    ///
    /// `None` or an empty code selects the identity entry. An unknown code
    /// returns `None` rather than guessing at an expression.
    pub fn resolve(&self, code: Option<&str>, col: &str) -> Option<String> {
        match code {
            None | Some("") => self.identity.as_ref().map(|t| t.render(col)),
            Some(code) => self.entries.get(code).map(|t| t.render(col)),
        }
    }

    /// Whether the table has an entry for `code`.
    pub fn supports(&self, code: Option<&str>) -> bool {
        match code {
            None | Some("") => self.identity.is_some(),
            Some(code) => self.entries.contains_key(code),
        }
    }

    /// The duration codes this table supports, excluding the identity entry.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> GrainTable {
        GrainTable::new()
            .with_identity()
            .with(codes::HOUR, "FLOOR_HOUR({col})")
            .with(codes::DAY, "FLOOR_DAY({col})")
    }

    #[test]
    fn test_resolve_substitutes_column() {
        assert_eq!(
            table().resolve(Some(codes::HOUR), "ts"),
            Some("FLOOR_HOUR(ts)".into())
        );
    }

    #[test]
    fn test_resolve_identity_passes_column_through() {
        let t = table();
        assert_eq!(t.resolve(None, "c"), Some("c".into()));
        assert_eq!(t.resolve(Some(""), "c"), Some("c".into()));
    }

    #[test]
    fn test_resolve_unknown_code_misses() {
        assert_eq!(table().resolve(Some("PT2M"), "ts"), None);
    }

    #[test]
    fn test_resolve_identity_misses_without_entry() {
        let t = GrainTable::new().with(codes::DAY, "FLOOR_DAY({col})");
        assert_eq!(t.resolve(None, "ts"), None);
    }

    #[test]
    fn test_supports() {
        let t = table();
        assert!(t.supports(None));
        assert!(t.supports(Some(codes::DAY)));
        assert!(!t.supports(Some(codes::WEEK)));
    }

    #[test]
    fn test_codes_excludes_identity() {
        let mut keys: Vec<_> = table().codes().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![codes::DAY, codes::HOUR]);
    }
}
