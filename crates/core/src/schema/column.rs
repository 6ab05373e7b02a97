//! Column definition for sqleval tables.

use crate::types::DataType;
use alloc::format;
use alloc::string::String;

/// A column of a table, qualified by the alias of the table that owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// Alias of the owning table.
    table: String,
    /// Bare column name.
    name: String,
    /// Declared data type.
    data_type: DataType,
}

impl Column {
    /// Creates a new column definition.
    pub fn new(table: impl Into<String>, name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
            data_type,
        }
    }

    /// Returns the alias of the owning table.
    #[inline]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the bare column name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared data type.
    #[inline]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the qualified label, `alias.name`.
    pub fn label(&self) -> String {
        format!("{}.{}", self.table, self.name)
    }

    /// Returns whether this column answers to the given reference.
    ///
    /// A qualified reference must match both alias and name; an unqualified
    /// one matches on the bare name alone.
    pub fn matches(&self, table: Option<&str>, name: &str) -> bool {
        self.name == name && table.map_or(true, |t| t == self.table)
    }
}
