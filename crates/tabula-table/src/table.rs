//! The host table
//!
//! A [`Table`] owns its columns and state. Features plug into it through
//! [`TableFeature`]; every state change goes through one update channel,
//! which callers can intercept with a change handler to add history or
//! validation, and ends with a notification to subscribers.

use std::fmt;

use ahash::AHashSet;
use tabula_core::{CellValue, Column, Error, FormatOption, Result};
use tabula_format::{default_formatters, Formatters, Locale};

use crate::feature::{ColumnFormattingFeature, TableFeature};
use crate::state::{ColumnFormattingState, TableState, Updater};

/// Handler receiving every column formatting change.
///
/// It decides how the update lands in the state; a handler that wants the
/// default behaviour calls [`TableState::update_column_formatting`].
pub type ColumnFormattingChangeFn = Box<dyn FnMut(&mut TableState, Updater<ColumnFormattingState>)>;

/// Callback run after every state change
pub type StateListener = Box<dyn FnMut(&TableState)>;

/// Options for building a [`Table`]
pub struct TableOptions {
    /// Offer per-column formatting (default: true)
    pub enable_column_formatting: bool,
    /// Intercepts formatting changes (default: apply directly)
    pub on_column_formatting_change: Option<ColumnFormattingChangeFn>,
    /// Locale for this table's formatters (default: host locale)
    pub locale: Option<&'static Locale>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            enable_column_formatting: true,
            on_column_formatting_change: None,
            locale: None,
        }
    }
}

impl fmt::Debug for TableOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOptions")
            .field("enable_column_formatting", &self.enable_column_formatting)
            .field(
                "on_column_formatting_change",
                &self.on_column_formatting_change.as_ref().map(|_| ".."),
            )
            .field("locale", &self.locale.map(|l| l.id))
            .finish()
    }
}

/// A table: columns, shared state and the features operating on them
pub struct Table {
    columns: Vec<Column>,
    state: TableState,
    options: TableOptions,
    /// Built once when the options name a locale
    formatters: Option<Formatters>,
    features: Vec<Box<dyn TableFeature>>,
    listeners: Vec<StateListener>,
}

impl Table {
    /// Create a table with default options
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        Self::with_options(columns, TableOptions::default())
    }

    /// Create a table with the given options.
    ///
    /// Fails if two columns share an id.
    pub fn with_options(columns: Vec<Column>, options: TableOptions) -> Result<Self> {
        let mut seen = AHashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.id()) {
                return Err(Error::DuplicateColumn(column.id().to_string()));
            }
        }

        let features: Vec<Box<dyn TableFeature>> = vec![Box::new(ColumnFormattingFeature)];

        let mut state = TableState::default();
        for feature in &features {
            feature.initial_state(&mut state);
        }
        for column in &columns {
            for feature in &features {
                feature.column_created(column, &options);
            }
        }

        let formatters = options.locale.map(Formatters::new);

        log::debug!(
            "Created table with {} columns (features: {})",
            columns.len(),
            features
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self {
            columns,
            state,
            options,
            formatters,
            features,
            listeners: Vec::new(),
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by id
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id() == id)
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Names of the features plugged into this table
    pub fn feature_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.features.iter().map(|f| f.name())
    }

    /// Formatters used to render this table's cells
    pub fn formatters(&self) -> &Formatters {
        self.formatters.as_ref().unwrap_or_else(|| default_formatters())
    }

    /// Formatting operations for one column
    pub fn column_formatting(&self, id: &str) -> Option<ColumnFormatting<'_>> {
        self.column(id).map(|column| ColumnFormatting {
            table: self,
            column,
        })
    }

    /// Select a format option for a column (`None` clears the selection).
    ///
    /// Other columns' selections are left as they are.
    pub fn set_column_formatting(
        &mut self,
        column_id: &str,
        format: Option<FormatOption>,
    ) -> Result<()> {
        if self.column(column_id).is_none() {
            return Err(Error::ColumnNotFound(column_id.to_string()));
        }

        log::debug!("Setting formatting of column {column_id} to {format:?}");
        self.update_column_formatting(ColumnFormattingFeature::formatting_updater(
            column_id, format,
        ));
        Ok(())
    }

    /// Clear every column's selection
    pub fn reset_column_formatting(&mut self) {
        log::debug!("Resetting column formatting");
        self.update_column_formatting(Updater::Replace(ColumnFormattingState::new()));
    }

    /// Render a cell of the given column with its current selection
    pub fn render_cell(&self, column_id: &str, value: &CellValue) -> Result<CellValue> {
        self.column_formatting(column_id)
            .map(|column| column.apply_formatting(value))
            .ok_or_else(|| Error::ColumnNotFound(column_id.to_string()))
    }

    /// Register a callback run after every state change
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&TableState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn update_column_formatting(&mut self, updater: Updater<ColumnFormattingState>) {
        match self.options.on_column_formatting_change.as_mut() {
            Some(on_change) => on_change(&mut self.state, updater),
            None => self.state.update_column_formatting(updater),
        }
        self.notify();
    }

    fn notify(&mut self) {
        let state = &self.state;
        for listener in self.listeners.iter_mut() {
            listener(state);
        }
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("state", &self.state)
            .field("options", &self.options)
            .field("features", &self.feature_names().collect::<Vec<_>>())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Formatting operations bound to one column of a table
#[derive(Clone, Copy)]
pub struct ColumnFormatting<'t> {
    table: &'t Table,
    column: &'t Column,
}

impl<'t> ColumnFormatting<'t> {
    pub fn column(&self) -> &'t Column {
        self.column
    }

    /// The selected format option, if any
    pub fn get_formatting(&self) -> Option<FormatOption> {
        ColumnFormattingFeature::get_formatting(&self.table.state, self.column)
    }

    /// Whether a format picker should be offered
    pub fn can_format(&self) -> bool {
        ColumnFormattingFeature::can_format(&self.table.options, self.column)
    }

    /// Options a picker should list; empty when the column can't be formatted
    pub fn format_options(&self) -> &'static [FormatOption] {
        match self.column.data_type() {
            Some(data_type) if self.can_format() => data_type.format_options(),
            _ => &[],
        }
    }

    /// Render a value of this column with the selected option
    pub fn apply_formatting(&self, value: &CellValue) -> CellValue {
        ColumnFormattingFeature::apply_formatting(
            self.table.formatters(),
            &self.table.state,
            self.column,
            value,
        )
    }
}

impl fmt::Debug for ColumnFormatting<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnFormatting")
            .field("column", &self.column.id())
            .field("format", &self.get_formatting())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tabula_core::DataType;
    use tabula_format::EN_US;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("created").with_data_type(DataType::Date),
            Column::new("updated").with_data_type(DataType::Datetime),
            Column::new("ratio").with_data_type(DataType::Number),
            Column::new("name").with_data_type(DataType::String),
            Column::new("notes"),
        ]
    }

    fn en_us_options() -> TableOptions {
        TableOptions {
            locale: Some(&EN_US),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let table = Table::new(columns()).unwrap();
        assert!(table.state().column_formatting.is_empty());
        assert_eq!(table.feature_names().collect::<Vec<_>>(), vec!["column_formatting"]);
        for column in table.columns() {
            let fmt = table.column_formatting(column.id()).unwrap();
            assert_eq!(fmt.get_formatting(), None);
        }
    }

    #[test]
    fn test_formatters_source() {
        let shared = Table::new(columns()).unwrap();
        assert!(std::ptr::eq(shared.formatters(), default_formatters()));

        let own = Table::with_options(columns(), en_us_options()).unwrap();
        assert!(!std::ptr::eq(own.formatters(), default_formatters()));
    }

    #[test]
    fn test_set_then_get() {
        let mut table = Table::new(columns()).unwrap();
        table
            .set_column_formatting("created", Some(FormatOption::Date))
            .unwrap();

        let created = table.column_formatting("created").unwrap();
        assert_eq!(created.get_formatting(), Some(FormatOption::Date));
        let updated = table.column_formatting("updated").unwrap();
        assert_eq!(updated.get_formatting(), None);
    }

    #[test]
    fn test_set_leaves_siblings() {
        let mut table = Table::new(columns()).unwrap();
        table
            .set_column_formatting("ratio", Some(FormatOption::Percent))
            .unwrap();
        table
            .set_column_formatting("name", Some(FormatOption::Title))
            .unwrap();
        table
            .set_column_formatting("ratio", Some(FormatOption::Integer))
            .unwrap();

        let state = &table.state().column_formatting;
        assert_eq!(state.get("ratio"), Some(FormatOption::Integer));
        assert_eq!(state.get("name"), Some(FormatOption::Title));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_clear_selection() {
        let mut table = Table::new(columns()).unwrap();
        table
            .set_column_formatting("ratio", Some(FormatOption::Percent))
            .unwrap();
        table.set_column_formatting("ratio", None).unwrap();
        assert!(table.state().column_formatting.is_empty());
    }

    #[test]
    fn test_reset() {
        let mut table = Table::new(columns()).unwrap();
        table
            .set_column_formatting("ratio", Some(FormatOption::Percent))
            .unwrap();
        table
            .set_column_formatting("name", Some(FormatOption::Uppercase))
            .unwrap();
        table.reset_column_formatting();
        assert!(table.state().column_formatting.is_empty());
    }

    #[test]
    fn test_unknown_column() {
        let mut table = Table::new(columns()).unwrap();
        assert_eq!(
            table.set_column_formatting("missing", Some(FormatOption::Date)),
            Err(Error::ColumnNotFound("missing".into()))
        );
        assert!(table.column_formatting("missing").is_none());
        assert_eq!(
            table.render_cell("missing", &CellValue::Number(1.0)),
            Err(Error::ColumnNotFound("missing".into()))
        );
    }

    #[test]
    fn test_duplicate_column() {
        let result = Table::new(vec![Column::new("a"), Column::new("a")]);
        assert_eq!(result.err(), Some(Error::DuplicateColumn("a".into())));
    }

    #[test]
    fn test_can_format() {
        let table = Table::new(columns()).unwrap();
        assert!(table.column_formatting("created").unwrap().can_format());
        assert!(!table.column_formatting("notes").unwrap().can_format());

        let disabled = Table::with_options(
            columns(),
            TableOptions {
                enable_column_formatting: false,
                ..Default::default()
            },
        )
        .unwrap();
        let ratio = disabled.column_formatting("ratio").unwrap();
        assert!(!ratio.can_format());
        assert!(ratio.format_options().is_empty());
    }

    #[test]
    fn test_format_options() {
        let table = Table::new(columns()).unwrap();
        assert_eq!(
            table.column_formatting("name").unwrap().format_options(),
            FormatOption::STRING_FAMILY
        );
        assert!(table
            .column_formatting("notes")
            .unwrap()
            .format_options()
            .is_empty());
    }

    #[test]
    fn test_render_cell() {
        let mut table = Table::with_options(columns(), en_us_options()).unwrap();
        let value = CellValue::Number(0.1234);
        assert_eq!(table.render_cell("ratio", &value).unwrap(), value);

        table
            .set_column_formatting("ratio", Some(FormatOption::Percent))
            .unwrap();
        assert_eq!(
            table.render_cell("ratio", &value).unwrap(),
            CellValue::string("12.34%")
        );
        assert_eq!(
            table.render_cell("ratio", &CellValue::Empty).unwrap(),
            CellValue::string("")
        );
    }

    #[test]
    fn test_selection_on_untyped_column_is_inert() {
        let mut table = Table::with_options(columns(), en_us_options()).unwrap();
        table
            .set_column_formatting("notes", Some(FormatOption::Uppercase))
            .unwrap();
        let value = CellValue::string("keep me");
        assert_eq!(table.render_cell("notes", &value).unwrap(), value);
    }

    #[test]
    fn test_listeners_notified() {
        let mut table = Table::new(columns()).unwrap();
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = Rc::clone(&seen);
        table.subscribe(move |state| sink.borrow_mut().push(state.column_formatting.len()));

        table
            .set_column_formatting("ratio", Some(FormatOption::Auto))
            .unwrap();
        table
            .set_column_formatting("name", Some(FormatOption::Title))
            .unwrap();
        table.reset_column_formatting();

        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn test_change_handler_records_history() {
        let history: Rc<RefCell<Vec<ColumnFormattingState>>> = Rc::default();
        let recorder = Rc::clone(&history);
        let options = TableOptions {
            on_column_formatting_change: Some(Box::new(
                move |state: &mut TableState, updater: Updater<ColumnFormattingState>| {
                    recorder.borrow_mut().push(state.column_formatting.clone());
                    state.update_column_formatting(updater);
                },
            )),
            ..Default::default()
        };
        let mut table = Table::with_options(columns(), options).unwrap();

        table
            .set_column_formatting("ratio", Some(FormatOption::Percent))
            .unwrap();
        table
            .set_column_formatting("ratio", Some(FormatOption::Scientific))
            .unwrap();

        let history = history.borrow();
        assert_eq!(history.len(), 2);
        assert!(history[0].is_empty());
        assert_eq!(history[1].get("ratio"), Some(FormatOption::Percent));
        assert_eq!(
            table.state().column_formatting.get("ratio"),
            Some(FormatOption::Scientific)
        );
    }

    #[test]
    fn test_change_handler_can_veto() {
        let options = TableOptions {
            on_column_formatting_change: Some(Box::new(
                |_: &mut TableState, _: Updater<ColumnFormattingState>| {},
            )),
            ..Default::default()
        };
        let mut table = Table::with_options(columns(), options).unwrap();
        table
            .set_column_formatting("ratio", Some(FormatOption::Percent))
            .unwrap();
        assert_eq!(
            table.column_formatting("ratio").unwrap().get_formatting(),
            None
        );
    }
}
