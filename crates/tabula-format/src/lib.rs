//! # tabula-format
//!
//! Turns a raw cell value into a display value, given the column's
//! [`DataType`] and the [`FormatOption`] chosen for it.
//!
//! Formatting is a pure function of its inputs. Number and date formatters
//! are built once per locale ([`Formatters`]); the free functions in this
//! crate use a process-wide set built from the host locale.
//!
//! ## Example
//!
//! ```rust
//! use tabula_format::{Formatters, FormatSpec, EN_US};
//! use tabula_core::{CellValue, DataType, FormatOption};
//!
//! let formatters = Formatters::new(&EN_US);
//! let shown = formatters.apply(
//!     &CellValue::Number(0.1234),
//!     FormatSpec::new(FormatOption::Percent, DataType::Number),
//! );
//! assert_eq!(shown, CellValue::string("12.34%"));
//! ```

pub mod date;
pub mod dispatch;
pub mod example;
pub mod formatters;
pub mod locale;
pub mod number;
pub mod text;

pub use date::{DateTimeFormatter, INVALID_DATE};
pub use dispatch::FormatSpec;
pub use formatters::{default_formatters, Formatters};
pub use locale::{Locale, DE_DE, EN_GB, EN_US, FR_FR};
pub use number::{NumberFormatter, NumberStyle};

use tabula_core::{CellValue, DataType, FormatOption};

/// Render `value` with the default formatters.
///
/// See [`Formatters::apply`].
pub fn apply_format(value: &CellValue, spec: FormatSpec) -> CellValue {
    default_formatters().apply(value, spec)
}

/// Render `value` from raw format and data type tags with the default
/// formatters.
///
/// See [`Formatters::apply_tagged`].
pub fn apply_format_tagged(
    value: &CellValue,
    format: Option<&str>,
    data_type: Option<&str>,
) -> CellValue {
    default_formatters().apply_tagged(value, format, data_type)
}

/// Preview of `format` on a fixed sample input, with the default formatters
pub fn formatting_example(format: FormatOption) -> CellValue {
    default_formatters().example(format)
}

/// Preview of a format option given by tag; `None` for unknown tags
pub fn formatting_example_tag(tag: &str) -> Option<CellValue> {
    default_formatters().example_tag(tag)
}

/// Format options a picker should offer for `data_type`
pub fn format_options(data_type: DataType) -> &'static [FormatOption] {
    data_type.format_options()
}
