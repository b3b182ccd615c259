//! Date and time rendering
//!
//! All date-family output is rendered in UTC, whatever the host time zone.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tabula_core::CellValue;

/// Output for values that cannot be read as a date
pub const INVALID_DATE: &str = "Invalid Date";

/// Zone name appended to time-of-day output
const ZONE_SUFFIX: &str = " UTC";

/// Naive layouts accepted for date-time strings, read as UTC
const NAIVE_DATETIME_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A date/time formatter with its pattern parsed once
#[derive(Debug, Clone)]
pub struct DateTimeFormatter {
    items: Vec<Item<'static>>,
    with_zone: bool,
}

impl DateTimeFormatter {
    /// Build a formatter from strftime pattern pieces, rendered back to back.
    ///
    /// `with_zone` appends the zone name (`UTC`) to the output.
    pub fn new(patterns: &[&'static str], with_zone: bool) -> Self {
        let items = patterns
            .iter()
            .copied()
            .flat_map(StrftimeItems::new)
            .collect();
        Self { items, with_zone }
    }

    pub fn format(&self, dt: &DateTime<Utc>) -> String {
        let mut out = dt.format_with_items(self.items.iter()).to_string();
        if self.with_zone {
            out.push_str(ZONE_SUFFIX);
        }
        out
    }
}

/// Read a cell value as an instant.
///
/// Numbers are epoch milliseconds. Strings may be RFC 3339, a naive
/// `YYYY-MM-DD HH:MM[:SS[.fff]]` (with `T` or a space) or a bare
/// `YYYY-MM-DD`; naive values are taken as UTC.
pub fn to_datetime(value: &CellValue) -> Option<DateTime<Utc>> {
    match value {
        CellValue::DateTime(dt) => Some(*dt),
        CellValue::Number(n) if n.is_finite() => DateTime::from_timestamp_millis(n.trunc() as i64),
        CellValue::String(s) => parse_datetime(s.trim()),
        _ => None,
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for layout in NAIVE_DATETIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
