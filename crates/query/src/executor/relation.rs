//! Relation type for query execution.

use crate::ast::ColumnRef;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use sqleval_core::schema::{Column, Table};
use sqleval_core::{Error, Result, Row};

/// An intermediate relation: labelled columns plus rows of matching arity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Relation {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Relation {
    /// Creates a relation from columns and rows.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Creates an empty relation with no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a relation from a single table, taking its rows as they are.
    pub fn from_table(table: Table) -> Self {
        let (columns, rows) = table.into_parts();
        Self { columns, rows }
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
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the relation has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
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

    /// Finds the position of a referenced column.
    ///
    /// A qualified reference matches its exact label; an unqualified one
    /// matches the first column with that bare name.
    pub fn column_index(&self, column: &ColumnRef) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.matches(column.table(), &column.name))
    }

    /// Like `column_index`, failing with `ColumnNotFound`.
    pub fn resolve(&self, column: &ColumnRef) -> Result<usize> {
        self.column_index(column)
            .ok_or_else(|| Error::column_not_found(column.to_string()))
    }

    /// Keeps only rows for which `keep` returns true.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Row) -> bool,
    {
        self.rows.retain(keep);
    }

    /// Consumes the relation, returning its columns and rows.
    pub fn into_parts(self) -> (Vec<Column>, Vec<Row>) {
        (self.columns, self.rows)
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}

impl IntoIterator for Relation {
    type Item = Row;
    type IntoIter = alloc::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
