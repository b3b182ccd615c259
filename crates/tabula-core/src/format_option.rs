//! Format options

use std::fmt;
use std::str::FromStr;

use crate::data_type::DataType;
use crate::error::Error;

/// A named display format chosen per column
///
/// An option only has an effect when combined with a data type of its
/// family; any other pairing leaves the value unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatOption {
    // Date family
    Date,
    Datetime,
    Time,

    // Numeric family
    Auto,
    Percent,
    Scientific,
    Engineering,
    Integer,

    // String family
    Uppercase,
    Lowercase,
    Capitalize,
    Title,

    // Boolean family
    #[cfg_attr(feature = "serde", serde(rename = "Yes/No"))]
    YesNo,
    #[cfg_attr(feature = "serde", serde(rename = "On/Off"))]
    OnOff,
}

impl FormatOption {
    pub const DATE_FAMILY: &'static [FormatOption] = &[
        FormatOption::Date,
        FormatOption::Datetime,
        FormatOption::Time,
    ];

    pub const NUMERIC_FAMILY: &'static [FormatOption] = &[
        FormatOption::Auto,
        FormatOption::Percent,
        FormatOption::Scientific,
        FormatOption::Engineering,
        FormatOption::Integer,
    ];

    pub const STRING_FAMILY: &'static [FormatOption] = &[
        FormatOption::Uppercase,
        FormatOption::Lowercase,
        FormatOption::Capitalize,
        FormatOption::Title,
    ];

    pub const BOOLEAN_FAMILY: &'static [FormatOption] = &[FormatOption::YesNo, FormatOption::OnOff];

    /// The full vocabulary, in declaration order
    pub const ALL: [FormatOption; 14] = [
        FormatOption::Date,
        FormatOption::Datetime,
        FormatOption::Time,
        FormatOption::Auto,
        FormatOption::Percent,
        FormatOption::Scientific,
        FormatOption::Engineering,
        FormatOption::Integer,
        FormatOption::Uppercase,
        FormatOption::Lowercase,
        FormatOption::Capitalize,
        FormatOption::Title,
        FormatOption::YesNo,
        FormatOption::OnOff,
    ];

    /// The display tag for this option (`"Yes/No"`, `"Percent"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatOption::Date => "Date",
            FormatOption::Datetime => "Datetime",
            FormatOption::Time => "Time",
            FormatOption::Auto => "Auto",
            FormatOption::Percent => "Percent",
            FormatOption::Scientific => "Scientific",
            FormatOption::Engineering => "Engineering",
            FormatOption::Integer => "Integer",
            FormatOption::Uppercase => "Uppercase",
            FormatOption::Lowercase => "Lowercase",
            FormatOption::Capitalize => "Capitalize",
            FormatOption::Title => "Title",
            FormatOption::YesNo => "Yes/No",
            FormatOption::OnOff => "On/Off",
        }
    }

    /// Check if this option has an effect on values of `data_type`
    pub fn applies_to(&self, data_type: DataType) -> bool {
        data_type.format_options().contains(self)
    }
}

impl fmt::Display for FormatOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatOption::ALL
            .iter()
            .copied()
            .find(|opt| opt.as_str() == s)
            .ok_or_else(|| Error::UnknownFormatOption(s.to_string()))
    }
}
