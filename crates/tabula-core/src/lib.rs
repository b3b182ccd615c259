//! # tabula-core
//!
//! Core value types shared by the tabula crates:
//! - [`CellValue`] - A raw cell value, and the display value produced from it
//! - [`DataType`] - The semantic data type of a column
//! - [`FormatOption`] - A named display format a user can pick for a column
//! - [`Column`] - Column metadata owned by the host table
//!
//! ## Example
//!
//! ```rust
//! use tabula_core::{Column, DataType, FormatOption};
//!
//! let column = Column::new("price").with_data_type(DataType::Number);
//! assert_eq!(column.data_type(), Some(DataType::Number));
//! assert!(FormatOption::Percent.applies_to(DataType::Number));
//! ```

pub mod column;
pub mod data_type;
pub mod error;
pub mod format_option;
pub mod value;

pub use column::Column;
pub use data_type::DataType;
pub use error::{Error, Result};
pub use format_option::FormatOption;
pub use value::CellValue;
