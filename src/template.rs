//! SQL expression templates with a single validated placeholder.
//!
//! Engine dialects describe their time-bucket and epoch-conversion
//! expressions as literal SQL carrying a `{col}` placeholder for the column
//! expression the framework supplies at render time. Validation happens at
//! construction: a template may use `{col}` any number of times but no other
//! placeholder, so a table entry can never smuggle in a second substitution
//! parameter.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// The only placeholder a template may carry.
pub const COLUMN_PLACEHOLDER: &str = "{col}";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid"));

/// Errors raised while validating a template string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder other than `{col}` appeared in the template.
    #[error("unexpected placeholder {{{0}}}: templates take only {{col}}")]
    UnexpectedPlaceholder(String),
}

/// A SQL fragment template over one column expression.
///
/// Immutable once constructed. Rendering substitutes the caller's column
/// expression for every `{col}` occurrence verbatim; the surrounding text is
/// never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlTemplate {
    raw: &'static str,
}

impl SqlTemplate {
    /// Validate and wrap a template string.
    pub fn parse(raw: &'static str) -> Result<Self, TemplateError> {
        for caps in PLACEHOLDER.captures_iter(raw) {
            let name = &caps[1];
            if name != "col" {
                return Err(TemplateError::UnexpectedPlaceholder(name.to_string()));
            }
        }
        Ok(SqlTemplate { raw })
    }

    /// Wrap a template known at compile time.
    ///
    /// # Panics
    ///
    /// Panics if the template carries a placeholder other than `{col}`.
    /// Grain tables are process-start constants, so an invalid entry is a
    /// programming error surfaced at first use of the table.
    pub fn of(raw: &'static str) -> Self {
        match Self::parse(raw) {
            Ok(template) => template,
            Err(err) => panic!("invalid SQL template {raw:?}: {err}"),
        }
    }

    /// Substitute `col` for every `{col}` occurrence.
    pub fn render(&self, col: &str) -> String {
        self.raw.replace(COLUMN_PLACEHOLDER, col)
    }

    /// The raw template text.
    pub fn as_str(&self) -> &'static str {
        self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_every_occurrence() {
        let t = SqlTemplate::of("DATETIME(YEAR({col}), MONTH({col}))");
        assert_eq!(t.render("ts"), "DATETIME(YEAR(ts), MONTH(ts))");
    }

    #[test]
    fn test_render_identity() {
        let t = SqlTemplate::of("{col}");
        assert_eq!(t.render("tbl.event_time"), "tbl.event_time");
    }

    #[test]
    fn test_render_without_placeholder_returns_template_verbatim() {
        let t = SqlTemplate::of("CURRENT_TIMESTAMP");
        assert_eq!(t.render("ignored"), "CURRENT_TIMESTAMP");
    }

    #[test]
    fn test_parse_rejects_foreign_placeholder() {
        let err = SqlTemplate::parse("DATETIME({col} + {offset})").unwrap_err();
        assert_eq!(err, TemplateError::UnexpectedPlaceholder("offset".into()));
    }

    #[test]
    fn test_parse_ignores_non_placeholder_braces() {
        // Braces that don't form an identifier placeholder are plain text.
        assert!(SqlTemplate::parse("JSON_EXTRACT({col}, '{}')").is_ok());
    }

    #[test]
    #[should_panic(expected = "invalid SQL template")]
    fn test_of_panics_on_foreign_placeholder() {
        SqlTemplate::of("{column}");
    }
}
