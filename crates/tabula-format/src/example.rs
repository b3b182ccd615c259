//! Preview values for format pickers

use tabula_core::{CellValue, DataType, FormatOption};

use crate::dispatch::FormatSpec;
use crate::formatters::Formatters;

/// Sample instant shown for date-family options
pub const SAMPLE_INSTANT: &str = "2024-01-02T15:04:05Z";
/// Sample input for `Percent`
pub const SAMPLE_PERCENT: f64 = 0.1234;
/// Sample input for `Scientific` and `Engineering`
pub const SAMPLE_LARGE: f64 = 12_345_678_910.0;
/// Sample input for `Integer` and `Auto`
pub const SAMPLE_DECIMAL: f64 = 1234.567;
/// Sample input for string options
pub const SAMPLE_TEXT: &str = "hello world";

impl Formatters {
    /// What `format` renders for a fixed sample input
    pub fn example(&self, format: FormatOption) -> CellValue {
        let (value, data_type) = match format {
            FormatOption::Date | FormatOption::Datetime | FormatOption::Time => {
                (CellValue::string(SAMPLE_INSTANT), DataType::Datetime)
            }
            FormatOption::Percent => (CellValue::Number(SAMPLE_PERCENT), DataType::Number),
            FormatOption::Scientific | FormatOption::Engineering => {
                (CellValue::Number(SAMPLE_LARGE), DataType::Number)
            }
            FormatOption::Integer | FormatOption::Auto => {
                (CellValue::Number(SAMPLE_DECIMAL), DataType::Number)
            }
            FormatOption::Uppercase
            | FormatOption::Lowercase
            | FormatOption::Capitalize
            | FormatOption::Title => (CellValue::string(SAMPLE_TEXT), DataType::String),
            FormatOption::YesNo | FormatOption::OnOff => {
                (CellValue::Boolean(true), DataType::Boolean)
            }
        };
        self.apply(&value, FormatSpec::new(format, data_type))
    }

    /// Like [`Formatters::example`], from a tag; `None` for unknown tags
    pub fn example_tag(&self, tag: &str) -> Option<CellValue> {
        tag.parse::<FormatOption>()
            .ok()
            .map(|format| self.example(format))
    }
}
