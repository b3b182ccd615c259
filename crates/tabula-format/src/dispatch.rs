//! Format dispatch
//!
//! Maps `(value, format option, data type)` to a display value. Every path
//! returns a value: blank input becomes an empty string, and any option that
//! does not belong to the column's data type leaves the value unchanged.

use tabula_core::{CellValue, DataType, FormatOption};

use crate::date::{self, INVALID_DATE};
use crate::formatters::Formatters;
use crate::text;

/// The format option and data type a value is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatSpec {
    /// Selected format (None = no explicit selection)
    pub format: Option<FormatOption>,
    /// Column data type (None = not inferred)
    pub data_type: Option<DataType>,
}

impl FormatSpec {
    pub fn new(format: FormatOption, data_type: DataType) -> Self {
        Self {
            format: Some(format),
            data_type: Some(data_type),
        }
    }
}

impl Formatters {
    /// Render `value` according to `spec`
    pub fn apply(&self, value: &CellValue, spec: FormatSpec) -> CellValue {
        if value.is_blank() {
            return CellValue::String(String::new());
        }

        let Some(data_type) = spec.data_type else {
            return value.clone();
        };

        match data_type {
            // Time-only values are shown verbatim
            DataType::Time => value.clone(),
            DataType::Date | DataType::Datetime => self.apply_date(value, spec.format),
            DataType::Integer | DataType::Number => self.apply_number(value, spec.format),
            DataType::String => apply_string(value, spec.format),
            DataType::Boolean => apply_boolean(value, spec.format),
            DataType::Unknown => value.clone(),
        }
    }

    /// Render `value` from raw string tags, as carried by untyped schemas.
    ///
    /// An unrecognized format tag leaves the value unchanged. An
    /// unrecognized data type tag means a schema producer emitted a type this
    /// crate does not know about: that panics in debug builds and passes the
    /// value through in release builds.
    pub fn apply_tagged(
        &self,
        value: &CellValue,
        format: Option<&str>,
        data_type: Option<&str>,
    ) -> CellValue {
        if value.is_blank() {
            return CellValue::String(String::new());
        }

        let data_type = match data_type.map(str::parse::<DataType>).transpose() {
            Ok(data_type) => data_type,
            Err(err) => {
                log::error!("{err}; value passed through unformatted");
                if cfg!(debug_assertions) {
                    panic!("unhandled data type reached the formatter: {err}");
                }
                return value.clone();
            }
        };

        let format = format.and_then(|tag| match tag.parse::<FormatOption>() {
            Ok(format) => Some(format),
            Err(err) => {
                log::warn!("{err}; value left unchanged");
                None
            }
        });

        self.apply(value, FormatSpec { format, data_type })
    }

    fn apply_date(&self, value: &CellValue, format: Option<FormatOption>) -> CellValue {
        let formatter = match format {
            Some(FormatOption::Date) => &self.date,
            Some(FormatOption::Datetime) => &self.datetime,
            Some(FormatOption::Time) => &self.time,
            _ => return value.clone(),
        };

        let rendered = match date::to_datetime(value) {
            Some(dt) => formatter.format(&dt),
            None => INVALID_DATE.to_string(),
        };
        CellValue::String(rendered)
    }

    fn apply_number(&self, value: &CellValue, format: Option<FormatOption>) -> CellValue {
        let formatter = match format {
            Some(FormatOption::Auto) => &self.auto,
            Some(FormatOption::Percent) => &self.percent,
            Some(FormatOption::Scientific) => &self.scientific,
            Some(FormatOption::Engineering) => &self.engineering,
            Some(FormatOption::Integer) => &self.integer,
            _ => return value.clone(),
        };

        CellValue::String(formatter.format(to_number(value)))
    }
}

fn apply_string(value: &CellValue, format: Option<FormatOption>) -> CellValue {
    let transform: fn(&str) -> String = match format {
        Some(FormatOption::Uppercase) => str::to_uppercase,
        Some(FormatOption::Lowercase) => str::to_lowercase,
        Some(FormatOption::Capitalize) => text::capitalize,
        Some(FormatOption::Title) => text::title,
        _ => return value.clone(),
    };

    let rendered = match value {
        CellValue::String(s) => transform(s),
        other => transform(&other.to_string()),
    };
    CellValue::String(rendered)
}

fn apply_boolean(value: &CellValue, format: Option<FormatOption>) -> CellValue {
    let (yes, no) = match format {
        Some(FormatOption::YesNo) => ("Yes", "No"),
        Some(FormatOption::OnOff) => ("On", "Off"),
        _ => return value.clone(),
    };
    CellValue::string(if value.is_truthy() { yes } else { no })
}

/// Read a value as a number; anything non-numeric becomes NaN
fn to_number(value: &CellValue) -> f64 {
    match value {
        CellValue::Number(n) => *n,
        CellValue::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EN_US;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn en_us() -> Formatters {
        Formatters::new(&EN_US)
    }

    fn apply(value: impl Into<CellValue>, format: FormatOption, data_type: DataType) -> CellValue {
        en_us().apply(&value.into(), FormatSpec::new(format, data_type))
    }

    fn s(text: &str) -> CellValue {
        CellValue::string(text)
    }

    #[test]
    fn test_numbers() {
        assert_eq!(apply(0.1234, FormatOption::Percent, DataType::Number), s("12.34%"));
        assert_eq!(apply(1234.567, FormatOption::Integer, DataType::Number), s("1,235"));
        assert_eq!(apply(1234.567, FormatOption::Auto, DataType::Integer), s("1,234.57"));
        assert_eq!(
            apply(12345678910.0, FormatOption::Scientific, DataType::Number),
            s("1.23E10")
        );
        assert_eq!(
            apply(12345678910.0, FormatOption::Engineering, DataType::Integer),
            s("12.35E9")
        );
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        assert_eq!(apply(" 0.5 ", FormatOption::Percent, DataType::Number), s("50%"));
        assert_eq!(apply("abc", FormatOption::Integer, DataType::Number), s("NaN"));
        assert_eq!(apply(true, FormatOption::Auto, DataType::Number), s("NaN"));
    }

    #[test]
    fn test_dates() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(apply(dt, FormatOption::Date, DataType::Date), s("1/2/24"));
        assert_eq!(
            apply(dt, FormatOption::Datetime, DataType::Datetime),
            s("1/2/24, 3:04:05 PM UTC")
        );
        assert_eq!(
            apply("2024-01-02T15:04:05Z", FormatOption::Time, DataType::Datetime),
            s("3:04:05 PM UTC")
        );
        assert_eq!(
            apply("not a date", FormatOption::Date, DataType::Date),
            s(INVALID_DATE)
        );
        // Non date-family options leave the value alone
        assert_eq!(
            apply("2024-01-02", FormatOption::Percent, DataType::Date),
            s("2024-01-02")
        );
    }

    #[test]
    fn test_time_passthrough() {
        assert_eq!(apply("15:04:05", FormatOption::Time, DataType::Time), s("15:04:05"));
        assert_eq!(
            apply(54245.0, FormatOption::Datetime, DataType::Time),
            CellValue::Number(54245.0)
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(apply("hello world", FormatOption::Title, DataType::String), s("Hello World"));
        assert_eq!(apply("hello world", FormatOption::Uppercase, DataType::String), s("HELLO WORLD"));
        assert_eq!(apply("Hello World", FormatOption::Lowercase, DataType::String), s("hello world"));
        assert_eq!(apply("hELLO", FormatOption::Capitalize, DataType::String), s("HELLO"));
        // Non-string values go through their display text
        assert_eq!(apply(true, FormatOption::Uppercase, DataType::String), s("TRUE"));
    }

    #[test]
    fn test_booleans() {
        assert_eq!(apply(true, FormatOption::YesNo, DataType::Boolean), s("Yes"));
        assert_eq!(apply(false, FormatOption::YesNo, DataType::Boolean), s("No"));
        assert_eq!(apply(true, FormatOption::OnOff, DataType::Boolean), s("On"));
        assert_eq!(apply(0.0, FormatOption::OnOff, DataType::Boolean), s("Off"));
    }

    #[test]
    fn test_mismatched_pairs_pass_through() {
        assert_eq!(
            apply("hello", FormatOption::Percent, DataType::String),
            s("hello")
        );
        assert_eq!(
            apply(0.5, FormatOption::Uppercase, DataType::Number),
            CellValue::Number(0.5)
        );
        assert_eq!(
            apply(true, FormatOption::Date, DataType::Boolean),
            CellValue::Boolean(true)
        );
        assert_eq!(
            apply(0.5, FormatOption::Percent, DataType::Unknown),
            CellValue::Number(0.5)
        );
    }

    #[test]
    fn test_missing_format_or_type() {
        let f = en_us();
        let value = CellValue::Number(0.5);
        let no_format = FormatSpec {
            format: None,
            data_type: Some(DataType::Number),
        };
        let no_type = FormatSpec {
            format: Some(FormatOption::Percent),
            data_type: None,
        };
        assert_eq!(f.apply(&value, no_format), value);
        assert_eq!(f.apply(&value, no_type), value);
    }

    #[test]
    fn test_tagged() {
        let f = en_us();
        assert_eq!(
            f.apply_tagged(&CellValue::Boolean(true), Some("Yes/No"), Some("boolean")),
            s("Yes")
        );
        assert_eq!(
            f.apply_tagged(&CellValue::Number(0.5), Some("Bogus"), Some("number")),
            CellValue::Number(0.5)
        );
        assert_eq!(
            f.apply_tagged(&CellValue::Number(0.5), Some("Percent"), None),
            CellValue::Number(0.5)
        );
        // Blank values win over an unknown data type tag
        assert_eq!(f.apply_tagged(&CellValue::Empty, None, Some("decimal")), s(""));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "unhandled data type")]
    fn test_tagged_unknown_data_type_panics_in_debug() {
        en_us().apply_tagged(&CellValue::Number(1.0), Some("Percent"), Some("decimal"));
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_tagged_unknown_data_type_passes_through() {
        let value = CellValue::Number(1.0);
        assert_eq!(
            en_us().apply_tagged(&value, Some("Percent"), Some("decimal")),
            value
        );
    }

    fn any_format() -> impl Strategy<Value = Option<FormatOption>> {
        proptest::option::of(proptest::sample::select(FormatOption::ALL.to_vec()))
    }

    fn any_data_type() -> impl Strategy<Value = Option<DataType>> {
        proptest::option::of(proptest::sample::select(DataType::ALL.to_vec()))
    }

    fn any_value() -> impl Strategy<Value = CellValue> {
        prop_oneof![
            any::<bool>().prop_map(CellValue::Boolean),
            (-1e12f64..1e12f64).prop_map(CellValue::Number),
            "[ a-zA-Z0-9:-]{0,16}".prop_map(CellValue::String),
            (0i64..4_102_444_800_000).prop_map(|ms| {
                CellValue::DateTime(Utc.timestamp_millis_opt(ms).unwrap())
            }),
        ]
    }

    proptest! {
        #[test]
        fn prop_blank_is_empty_string(format in any_format(), data_type in any_data_type()) {
            let f = en_us();
            let spec = FormatSpec { format, data_type };
            prop_assert_eq!(f.apply(&CellValue::Empty, spec), s(""));
            prop_assert_eq!(f.apply(&s(""), spec), s(""));
        }

        #[test]
        fn prop_time_passthrough(value in any_value(), format in any_format()) {
            prop_assume!(!value.is_blank());
            let spec = FormatSpec { format, data_type: Some(DataType::Time) };
            prop_assert_eq!(en_us().apply(&value, spec), value);
        }

        #[test]
        fn prop_unknown_type_passthrough(value in any_value(), format in any_format()) {
            prop_assume!(!value.is_blank());
            let f = en_us();
            prop_assert_eq!(
                f.apply(&value, FormatSpec { format, data_type: Some(DataType::Unknown) }),
                value.clone()
            );
            prop_assert_eq!(f.apply(&value, FormatSpec { format, data_type: None }), value);
        }

        #[test]
        fn prop_incompatible_format_passthrough(
            value in any_value(),
            format in proptest::sample::select(FormatOption::ALL.to_vec()),
            data_type in proptest::sample::select(DataType::ALL.to_vec())
        ) {
            prop_assume!(!value.is_blank() && !format.applies_to(data_type));
            let spec = FormatSpec::new(format, data_type);
            prop_assert_eq!(en_us().apply(&value, spec), value);
        }

        #[test]
        fn prop_deterministic(value in any_value(), format in any_format(), data_type in any_data_type()) {
            let f = en_us();
            let spec = FormatSpec { format, data_type };
            let first = f.apply(&value, spec);
            let second = f.apply(&value, spec);
            // NaN != NaN, so compare rendered text
            prop_assert_eq!(first.to_string(), second.to_string());
        }
    }
}
