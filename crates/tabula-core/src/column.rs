//! Column types

use crate::data_type::DataType;

/// Column metadata, owned by the host table.
///
/// Formatting never mutates a column; it reads the id and data type and
/// keeps its own state keyed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Stable column identifier
    id: String,
    /// Semantic data type (None = not inferred)
    data_type: Option<DataType>,
}

impl Column {
    /// Create a new column with no data type
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            data_type: None,
        }
    }

    /// Set the data type
    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    /// Column id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Data type, if one was assigned
    pub fn data_type(&self) -> Option<DataType> {
        self.data_type
    }

    /// Check if the data type is known (assigned and not `unknown`)
    pub fn has_known_data_type(&self) -> bool {
        matches!(self.data_type, Some(dt) if dt != DataType::Unknown)
    }
}
