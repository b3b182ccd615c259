//! # tabula-table
//!
//! A host table and the column formatting feature plugged into it.
//!
//! The table owns its columns and a [`TableState`]; the formatting feature
//! keeps a column id -> [`FormatOption`](tabula_core::FormatOption) mapping
//! in that state and exposes four operations per column through
//! [`ColumnFormatting`] and [`Table::set_column_formatting`].
//!
//! ## Example
//!
//! ```rust
//! use tabula_core::{CellValue, Column, DataType, FormatOption};
//! use tabula_format::EN_US;
//! use tabula_table::{Table, TableOptions};
//!
//! let options = TableOptions { locale: Some(&EN_US), ..Default::default() };
//! let mut table = Table::with_options(
//!     vec![Column::new("active").with_data_type(DataType::Boolean)],
//!     options,
//! ).unwrap();
//!
//! table.set_column_formatting("active", Some(FormatOption::OnOff)).unwrap();
//! let active = table.column_formatting("active").unwrap();
//! assert_eq!(active.apply_formatting(&CellValue::Boolean(false)), CellValue::string("Off"));
//! ```

pub mod feature;
pub mod state;
pub mod table;

pub use feature::{ColumnFormattingFeature, TableFeature};
pub use state::{ColumnFormattingState, TableState, Updater};
pub use table::{ColumnFormatting, ColumnFormattingChangeFn, StateListener, Table, TableOptions};
