//! Kinetica engine dialect.
//!
//! Kinetica has no `DATE_TRUNC`; grains are built from its epoch-math
//! functions instead. Sub-hour and coarser uniform grains floor
//! `MSECS_SINCE_EPOCH` with integer division, while calendar-shaped grains
//! (5/10/15/30 minutes, month, quarter, year) decompose the timestamp into
//! fields and rebuild it through `DATE_TO_EPOCH_MSECS`. Everything is
//! wrapped back into a timestamp with `DATETIME`, whose constructor takes
//! milliseconds.
//!
//! Row limiting must wrap the outer SQL (`LimitMethod::WrapSql`) and column
//! names are capped at 200 characters.

use once_cell::sync::Lazy;

use super::{EngineDialect, LimitMethod};
use crate::grain::{codes, GrainTable};
use crate::template::SqlTemplate;

static TIME_GRAINS: Lazy<GrainTable> = Lazy::new(|| {
    GrainTable::new()
        .with_identity()
        .with(
            codes::SECOND,
            "DATETIME(MSECS_SINCE_EPOCH({col}) / 1000 * 1000)",
        )
        .with(
            codes::MINUTE,
            "DATETIME((MSECS_SINCE_EPOCH({col}) / (1000 * 60)) * (1000 * 60))",
        )
        .with(
            codes::FIVE_MINUTES,
            "DATETIME(DATE_TO_EPOCH_MSECS(YEAR({col}), MONTH({col}), DAY({col}), \
             HOUR({col}), ((MINUTE({col}) / 5) * 5), 0, 0))",
        )
        .with(
            codes::TEN_MINUTES,
            "DATETIME(DATE_TO_EPOCH_MSECS(YEAR({col}), MONTH({col}), DAY({col}), \
             HOUR({col}), ((MINUTE({col}) / 10) * 10), 0, 0))",
        )
        .with(
            codes::FIFTEEN_MINUTES,
            "DATETIME(DATE_TO_EPOCH_MSECS(YEAR({col}), MONTH({col}), DAY({col}), \
             HOUR({col}), ((MINUTE({col}) / 15) * 15), 0, 0))",
        )
        .with(
            codes::THIRTY_MINUTES,
            "DATETIME(DATE_TO_EPOCH_MSECS(YEAR({col}), MONTH({col}), DAY({col}), \
             HOUR({col}), ((MINUTE({col}) / 30) * 30), 0, 0))",
        )
        .with(
            codes::HALF_HOUR,
            "DATETIME(DATE_TO_EPOCH_MSECS(YEAR({col}), MONTH({col}), DAY({col}), \
             HOUR({col}), ((MINUTE({col}) / 30) * 30), 0, 0))",
        )
        .with(
            codes::HOUR,
            "DATETIME((MSECS_SINCE_EPOCH({col}) / (1000 * 60 * 60)) * (1000 * 60 * 60))",
        )
        .with(
            codes::DAY,
            "DATETIME((MSECS_SINCE_EPOCH({col}) / (1000 * 60 * 60 * 24)) * (1000 * 60 * 60 * 24))",
        )
        // This assumes start of week is Sunday
        .with(
            codes::WEEK,
            "DATETIME(WEEK_TO_EPOCH_MSECS(YEAR({col}),WEEK({col})))",
        )
        .with(
            codes::MONTH,
            "DATETIME(DATE_TO_EPOCH_MSECS(YEAR({col}), MONTH({col}), 1, 0, 0, 0, 0))",
        )
        .with(
            codes::QUARTER,
            "DATETIME(DATE_TO_EPOCH_MSECS(YEAR({col}), CASE QUARTER({col}) \
             WHEN 1 THEN 1 WHEN 2 THEN 4 WHEN 3 THEN 7 ELSE 10 END, 1, 0, 0, 0, 0))",
        )
        .with(
            codes::QUARTER_YEAR,
            "DATETIME(DATE_TO_EPOCH_MSECS(YEAR({col}), CASE QUARTER({col}) \
             WHEN 1 THEN 1 WHEN 2 THEN 4 WHEN 3 THEN 7 ELSE 10 END, 1, 0, 0, 0, 0))",
        )
        .with(
            codes::YEAR,
            "DATETIME(DATE_TO_EPOCH_MSECS(YEAR({col}), 1, 1, 0, 0, 0, 0))",
        )
});

// DATETIME takes milliseconds, so epoch seconds are scaled up front.
static EPOCH_SECONDS: Lazy<SqlTemplate> = Lazy::new(|| SqlTemplate::of("DATETIME({col} * 1000)"));
static EPOCH_MILLIS: Lazy<SqlTemplate> = Lazy::new(|| SqlTemplate::of("DATETIME({col})"));

/// Kinetica engine dialect.
#[derive(Debug, Clone, Copy)]
pub struct Kinetica;

impl EngineDialect for Kinetica {
    fn engine(&self) -> &'static str {
        "kinetica"
    }

    fn engine_name(&self) -> &'static str {
        "Kinetica Database"
    }

    fn uri_placeholder(&self) -> &'static str {
        "sa_gpudb://{username}:{password}@{kineticahost}:{port} "
    }

    fn limit_method(&self) -> LimitMethod {
        LimitMethod::WrapSql
    }

    fn max_column_name_length(&self) -> Option<usize> {
        Some(200)
    }

    fn time_grains(&self) -> &GrainTable {
        &TIME_GRAINS
    }

    fn epoch_to_timestamp(&self) -> Option<&SqlTemplate> {
        Some(&EPOCH_SECONDS)
    }

    fn epoch_ms_to_timestamp(&self) -> Option<&SqlTemplate> {
        Some(&EPOCH_MILLIS)
    }
}
