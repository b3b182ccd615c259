//! Semantic data types

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::format_option::FormatOption;

/// Logical kind of a column's values, independent of how they are stored.
///
/// Assigned by schema inference outside this crate; formatting code only
/// reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataType {
    String,
    Boolean,
    Integer,
    Number,
    Date,
    Datetime,
    Time,
    Unknown,
}

impl DataType {
    /// Every data type, in declaration order
    pub const ALL: [DataType; 8] = [
        DataType::String,
        DataType::Boolean,
        DataType::Integer,
        DataType::Number,
        DataType::Date,
        DataType::Datetime,
        DataType::Time,
        DataType::Unknown,
    ];

    /// The tag used for this type in schemas (`"datetime"`, `"integer"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Boolean => "boolean",
            DataType::Integer => "integer",
            DataType::Number => "number",
            DataType::Date => "date",
            DataType::Datetime => "datetime",
            DataType::Time => "time",
            DataType::Unknown => "unknown",
        }
    }

    /// Format options a picker should offer for this type.
    ///
    /// `time` values are never reformatted, so they get no options.
    pub fn format_options(&self) -> &'static [FormatOption] {
        match self {
            DataType::Date | DataType::Datetime => FormatOption::DATE_FAMILY,
            DataType::Integer | DataType::Number => FormatOption::NUMERIC_FAMILY,
            DataType::String => FormatOption::STRING_FAMILY,
            DataType::Boolean => FormatOption::BOOLEAN_FAMILY,
            DataType::Time | DataType::Unknown => &[],
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .iter()
            .copied()
            .find(|dt| dt.as_str() == s)
            .ok_or_else(|| Error::UnknownDataType(s.to_string()))
    }
}
