//! Table features
//!
//! A feature contributes a slice of table state, reacts to columns being
//! registered, and exposes per-column operations through the table. The
//! table owns the state; features only read it or hand the table an
//! [`Updater`] describing the change they want.

use tabula_core::{CellValue, Column, FormatOption};
use tabula_format::{FormatSpec, Formatters};

use crate::state::{ColumnFormattingState, TableState, Updater};
use crate::table::TableOptions;

/// A capability plugged into a [`crate::Table`]
pub trait TableFeature {
    /// Name of the feature, for logs
    fn name(&self) -> &'static str;

    /// Initialize this feature's slice of a fresh table state
    fn initial_state(&self, _state: &mut TableState) {}

    /// Called once for each column when the table is built
    fn column_created(&self, _column: &Column, _options: &TableOptions) {}
}

/// Per-column display formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnFormattingFeature;

impl TableFeature for ColumnFormattingFeature {
    fn name(&self) -> &'static str {
        "column_formatting"
    }

    fn initial_state(&self, state: &mut TableState) {
        state.column_formatting = ColumnFormattingState::new();
    }

    fn column_created(&self, column: &Column, options: &TableOptions) {
        log::trace!(
            "Column {} registered (data type: {:?}, formattable: {})",
            column.id(),
            column.data_type(),
            Self::can_format(options, column)
        );
    }
}

impl ColumnFormattingFeature {
    /// The column's selected format option
    pub fn get_formatting(state: &TableState, column: &Column) -> Option<FormatOption> {
        state.column_formatting.get(column.id())
    }

    /// Whether a format picker should be offered for the column
    pub fn can_format(options: &TableOptions, column: &Column) -> bool {
        options.enable_column_formatting && column.has_known_data_type()
    }

    /// Updater replacing one column's entry and keeping all others
    pub fn formatting_updater(
        column_id: &str,
        format: Option<FormatOption>,
    ) -> Updater<ColumnFormattingState> {
        let column_id = column_id.to_string();
        Updater::update(move |current: &ColumnFormattingState| {
            current.with_entry(&column_id, format)
        })
    }

    /// Render a cell of the column with its selected option.
    ///
    /// Without a selection the value is returned as-is.
    pub fn apply_formatting(
        formatters: &Formatters,
        state: &TableState,
        column: &Column,
        value: &CellValue,
    ) -> CellValue {
        match Self::get_formatting(state, column) {
            Some(format) => formatters.apply(
                value,
                FormatSpec {
                    format: Some(format),
                    data_type: column.data_type(),
                },
            ),
            None => value.clone(),
        }
    }
}
