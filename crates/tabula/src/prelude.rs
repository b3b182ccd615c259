//! Prelude module - common imports for tabula users
//!
//! ```rust
//! use tabula::prelude::*;
//! ```

pub use crate::{
    // Formatting
    apply_format,
    formatting_example,
    // Core types
    CellValue,
    Column,
    // Table types
    ColumnFormatting,
    ColumnFormattingState,
    DataType,
    Error,
    FormatOption,
    FormatSpec,
    Formatters,
    Locale,
    Result,
    Table,
    TableOptions,
    TableState,
    EN_US,
};
