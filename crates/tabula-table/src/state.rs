//! Table state

use std::fmt;

use ahash::AHashMap;
use tabula_core::FormatOption;

/// Column id -> selected format option.
///
/// A column without an entry has no explicit selection. Entries for ids the
/// table doesn't have are kept but never read.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColumnFormattingState {
    entries: AHashMap<String, FormatOption>,
}

impl ColumnFormattingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected option for a column
    pub fn get(&self, column_id: &str) -> Option<FormatOption> {
        self.entries.get(column_id).copied()
    }

    /// A copy of this state with one column's entry replaced.
    ///
    /// `None` removes the entry. Other columns are untouched.
    pub fn with_entry(&self, column_id: &str, format: Option<FormatOption>) -> Self {
        let mut entries = self.entries.clone();
        match format {
            Some(format) => {
                entries.insert(column_id.to_string(), format);
            }
            None => {
                entries.remove(column_id);
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(column id, option)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, FormatOption)> {
        self.entries.iter().map(|(id, format)| (id.as_str(), *format))
    }
}

impl<S: Into<String>> FromIterator<(S, FormatOption)> for ColumnFormattingState {
    fn from_iter<I: IntoIterator<Item = (S, FormatOption)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(id, f)| (id.into(), f)).collect(),
        }
    }
}

/// A requested change to a state slice: either a new value, or a function
/// of the current one.
pub enum Updater<T> {
    Replace(T),
    Update(Box<dyn FnOnce(&T) -> T>),
}

impl<T> Updater<T> {
    /// Wrap a function of the current value
    pub fn update<F>(f: F) -> Self
    where
        F: FnOnce(&T) -> T + 'static,
    {
        Updater::Update(Box::new(f))
    }

    /// Compute the next value from `current`
    pub fn apply(self, current: &T) -> T {
        match self {
            Updater::Replace(next) => next,
            Updater::Update(f) => f(current),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Updater<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Updater::Replace(next) => f.debug_tuple("Replace").field(next).finish(),
            Updater::Update(_) => f.write_str("Update(..)"),
        }
    }
}

/// State shared by everything rendering one table
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableState {
    pub column_formatting: ColumnFormattingState,
}

impl TableState {
    /// The generic slice updater: compute the next mapping and store it in a
    /// single assignment.
    pub fn update_column_formatting(&mut self, updater: Updater<ColumnFormattingState>) {
        let next = updater.apply(&self.column_formatting);
        self.column_formatting = next;
    }
}
