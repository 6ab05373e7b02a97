//! Table definition for sqleval.
//!
//! A `Table` is one aliased relation of a query: its qualified columns and its
//! rows. It is built once from loader output, narrowed by the optimizer
//! (column deletion, row filtering) and then read by the evaluator.

use super::column::Column;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::types::DataType;
use crate::value::Value;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Raw table contents as produced by a loader.
#[derive(Clone, Debug, PartialEq)]
pub struct TableData {
    /// Name of the source the data was loaded from.
    source: String,
    /// Ordered `(name, declared type)` header.
    columns: Vec<(String, DataType)>,
    /// Raw rows, aligned with the header.
    rows: Vec<Vec<Value>>,
}

impl TableData {
    /// Creates table data with the given header and no rows.
    pub fn new(source: impl Into<String>, columns: Vec<(String, DataType)>) -> Self {
        Self {
            source: source.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Adds a row, builder style.
    pub fn with_row(mut self, row: Vec<Value>) -> Self {
        self.rows.push(row);
        self
    }

    /// Adds a row.
    pub fn push_row(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }

    /// Returns the source name.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the header.
    #[inline]
    pub fn columns(&self) -> &[(String, DataType)] {
        &self.columns
    }

    /// Returns the raw rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }
}

/// An aliased, in-memory table.
#[derive(Clone, Debug)]
pub struct Table {
    /// Alias bound in the FROM clause.
    alias: String,
    /// Column definitions.
    columns: Vec<Column>,
    /// Row data, every row has `columns.len()` values.
    rows: Vec<Row>,
}

impl Table {
    /// Builds a table from loaded data, binding it to `alias`.
    ///
    /// Fails with `InvalidTable` if the header repeats a column name, a row's
    /// arity differs from the header, or a cell does not hold its column's
    /// declared type. Integer cells in float columns are widened.
    pub fn from_data(alias: impl Into<String>, data: TableData) -> Result<Self> {
        let alias = alias.into();
        let TableData {
            source,
            columns: header,
            rows: raw_rows,
        } = data;

        let mut columns: Vec<Column> = Vec::with_capacity(header.len());
        for (name, data_type) in header {
            if columns.iter().any(|c| c.name() == name) {
                return Err(Error::invalid_table(
                    source,
                    format!("duplicate column \"{}\"", name),
                ));
            }
            columns.push(Column::new(alias.clone(), name, data_type));
        }

        let mut rows = Vec::with_capacity(raw_rows.len());
        for (row_index, raw) in raw_rows.into_iter().enumerate() {
            if raw.len() != columns.len() {
                return Err(Error::invalid_table(
                    source,
                    format!(
                        "row {} has {} values, expected {}",
                        row_index,
                        raw.len(),
                        columns.len()
                    ),
                ));
            }
            let mut values = Vec::with_capacity(raw.len());
            for (value, column) in raw.into_iter().zip(columns.iter()) {
                match value.coerce_to(column.data_type()) {
                    Ok(v) => values.push(v),
                    Err(v) => {
                        return Err(Error::invalid_table(
                            source,
                            format!(
                                "row {} column \"{}\" holds {} value, expected {}",
                                row_index,
                                column.name(),
                                v.data_type(),
                                column.data_type()
                            ),
                        ))
                    }
                }
            }
            rows.push(Row::new(values));
        }

        Ok(Self {
            alias,
            columns,
            rows,
        })
    }

    /// Returns the table alias.
    #[inline]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Returns the columns.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the qualified labels in column order.
    pub fn labels(&self) -> Vec<String> {
        self.columns.iter().map(Column::label).collect()
    }

    /// Gets a column index by bare name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    /// Returns whether this table declares a column with the given bare name.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Returns the declared type of a column.
    pub fn data_type(&self, name: &str) -> Option<DataType> {
        self.column_index(name).map(|i| self.columns[i].data_type())
    }

    /// Deletes a column by bare name, removing its cell from every row.
    ///
    /// Returns false if the table has no such column.
    pub fn delete_column(&mut self, name: &str) -> bool {
        let index = match self.column_index(name) {
            Some(i) => i,
            None => return false,
        };
        self.columns.remove(index);
        for row in &mut self.rows {
            row.remove(index);
        }
        true
    }

    /// Keeps only rows for which `keep` returns true. Returns the number of
    /// rows removed.
    pub fn retain_rows<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&Row) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| keep(row));
        before - self.rows.len()
    }

    /// Consumes the table, returning its columns and rows.
    pub fn into_parts(self) -> (Vec<Column>, Vec<Row>) {
        (self.columns, self.rows)
    }
}

impl core::fmt::Display for Table {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} [{}] ({} rows)", self.alias, self.labels().join(", "), self.rows.len())
    }
}
