//! # tabula
//!
//! Per-column display formatting for interactive data tables.
//!
//! Tabula renders raw cell values as display strings based on each column's
//! semantic [`DataType`] and the [`FormatOption`] a user picked for it, and
//! keeps those picks in the table's state.
//!
//! ## Features
//!
//! - Date, datetime and time rendering (always in UTC)
//! - Number rendering: auto, percent, scientific, engineering, integer
//! - String case transforms and boolean labels
//! - Locale-aware separators and date patterns
//! - A host [`Table`] with a per-column formatting feature, change handlers
//!   and state subscriptions
//!
//! ## Example
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! let mut table = Table::with_options(
//!     vec![
//!         Column::new("share").with_data_type(DataType::Number),
//!         Column::new("city").with_data_type(DataType::String),
//!     ],
//!     TableOptions { locale: Some(&EN_US), ..Default::default() },
//! ).unwrap();
//!
//! table.set_column_formatting("share", Some(FormatOption::Percent)).unwrap();
//!
//! let share = table.column_formatting("share").unwrap();
//! assert_eq!(share.apply_formatting(&CellValue::Number(0.1234)), CellValue::string("12.34%"));
//!
//! let city = table.column_formatting("city").unwrap();
//! assert!(city.can_format());
//! assert_eq!(city.get_formatting(), None);
//! ```

pub mod prelude;

// Re-export core types
pub use tabula_core::{CellValue, Column, DataType, Error, FormatOption, Result};

// Re-export formatting
pub use tabula_format::{
    apply_format, apply_format_tagged, default_formatters, format_options, formatting_example,
    formatting_example_tag, DateTimeFormatter, FormatSpec, Formatters, Locale, NumberFormatter,
    NumberStyle, DE_DE, EN_GB, EN_US, FR_FR, INVALID_DATE,
};

// Re-export the host table
pub use tabula_table::{
    ColumnFormatting, ColumnFormattingChangeFn, ColumnFormattingFeature, ColumnFormattingState,
    StateListener, Table, TableFeature, TableOptions, TableState, Updater,
};
