//! Per-query table catalog.
//!
//! The catalog maps each FROM alias to its `Table`, in FROM order. It is built
//! once per query, narrowed in place by the optimizer and consumed by the
//! evaluator.

use crate::ast::{ColumnRef, TableRef};
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use sqleval_core::schema::{Table, TableData};
use sqleval_core::{DataType, Error, Result};

/// Source of raw table data.
///
/// Implementations resolve a FROM entry's `source` name to its contents.
pub trait TableLoader {
    /// Loads the named table. Fails with `UnknownSource` if it does not exist.
    fn load(&self, source: &str) -> Result<TableData>;
}

impl<L: TableLoader + ?Sized> TableLoader for &L {
    fn load(&self, source: &str) -> Result<TableData> {
        (**self).load(source)
    }
}

/// A loader backed by tables held in memory, keyed by source name.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLoader {
    tables: HashMap<String, TableData>,
}

impl InMemoryLoader {
    /// Creates an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers table data under its source name.
    pub fn insert(&mut self, data: TableData) {
        self.tables.insert(data.source().into(), data);
    }

    /// Registers table data, builder style.
    pub fn with_table(mut self, data: TableData) -> Self {
        self.insert(data);
        self
    }
}

impl TableLoader for InMemoryLoader {
    fn load(&self, source: &str) -> Result<TableData> {
        self.tables
            .get(source)
            .cloned()
            .ok_or_else(|| Error::unknown_source(source))
    }
}

/// Ordered mapping from alias to table.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    tables: Vec<Table>,
    positions: HashMap<String, usize>,
}

impl Catalog {
    /// Builds the catalog for a FROM list, loading every source.
    ///
    /// Loader errors are returned unchanged. If an alias repeats, the later
    /// table replaces the earlier one at the earlier position.
    pub fn build<L: TableLoader>(from: &[TableRef], loader: &L) -> Result<Self> {
        let mut catalog = Catalog::default();
        for table_ref in from {
            let data = loader.load(&table_ref.source)?;
            let table = Table::from_data(table_ref.alias.clone(), data)?;
            tracing::debug!(
                alias = %table_ref.alias,
                source = %table_ref.source,
                rows = table.row_count(),
                columns = table.column_count(),
                "loaded table"
            );
            catalog.insert(table);
        }
        Ok(catalog)
    }

    /// Builds a catalog from already constructed tables.
    pub fn from_tables(tables: impl IntoIterator<Item = Table>) -> Self {
        let mut catalog = Catalog::default();
        for table in tables {
            catalog.insert(table);
        }
        catalog
    }

    fn insert(&mut self, table: Table) {
        match self.positions.get(table.alias()) {
            Some(&position) => {
                tracing::warn!(alias = %table.alias(), "duplicate alias replaces earlier table");
                self.tables[position] = table;
            }
            None => {
                self.positions.insert(table.alias().into(), self.tables.len());
                self.tables.push(table);
            }
        }
    }

    /// Gets a table by alias.
    pub fn get(&self, alias: &str) -> Option<&Table> {
        self.positions.get(alias).map(|&i| &self.tables[i])
    }

    /// Gets a mutable table by alias.
    pub fn get_mut(&mut self, alias: &str) -> Option<&mut Table> {
        match self.positions.get(alias) {
            Some(&i) => Some(&mut self.tables[i]),
            None => None,
        }
    }

    /// Returns whether the alias is bound.
    pub fn contains(&self, alias: &str) -> bool {
        self.positions.contains_key(alias)
    }

    /// Iterates over the tables in FROM order.
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    /// Iterates mutably over the tables in FROM order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Table> {
        self.tables.iter_mut()
    }

    /// Returns the number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if the catalog holds no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Returns the aliases in FROM order.
    pub fn aliases(&self) -> Vec<&str> {
        self.tables.iter().map(Table::alias).collect()
    }

    /// Returns the aliases of the tables that declare a column named `name`,
    /// in FROM order.
    pub fn tables_with_column(&self, name: &str) -> Vec<&str> {
        self.tables
            .iter()
            .filter(|t| t.has_column(name))
            .map(Table::alias)
            .collect()
    }

    /// Resolves the declared type of a column reference.
    ///
    /// An unqualified reference takes the type from the first table that
    /// declares the column; ambiguity is not an error here.
    pub fn column_type(&self, column: &ColumnRef) -> Result<DataType> {
        match column.table() {
            Some(alias) => {
                let table = self.get(alias).ok_or_else(|| Error::unknown_table(alias))?;
                table
                    .data_type(&column.name)
                    .ok_or_else(|| Error::unknown_column_in(column.name.as_str(), alias))
            }
            None => self
                .tables
                .iter()
                .find_map(|t| t.data_type(&column.name))
                .ok_or_else(|| Error::unknown_column(column.name.as_str())),
        }
    }

    /// Consumes the catalog, returning the tables in FROM order.
    pub fn into_tables(self) -> Vec<Table> {
        self.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use sqleval_core::Value;

    fn loader() -> InMemoryLoader {
        InMemoryLoader::new()
            .with_table(
                TableData::new(
                    "people",
                    vec![("id".into(), DataType::Int), ("name".into(), DataType::Str)],
                )
                .with_row(vec![Value::Int(1), Value::from("a")]),
            )
            .with_table(TableData::new(
                "pets",
                vec![("id".into(), DataType::Int), ("owner".into(), DataType::Int)],
            ))
    }

    #[test]
    fn test_build_in_from_order() {
        let from = vec![TableRef::new("pets", "x"), TableRef::new("people", "p")];
        let catalog = Catalog::build(&from, &loader()).unwrap();
        assert_eq!(catalog.aliases(), vec!["x", "p"]);
        assert_eq!(catalog.get("p").unwrap().labels(), vec!["p.id", "p.name"]);
        assert!(catalog.contains("x"));
        assert!(!catalog.contains("pets"));
    }

    #[test]
    fn test_build_unknown_source() {
        let from = vec![TableRef::new("people", "p"), TableRef::new("cars", "c")];
        let err = Catalog::build(&from, &loader()).unwrap_err();
        assert_eq!(err, Error::unknown_source("cars"));
    }

    #[test]
    fn test_same_source_twice() {
        let from = vec![TableRef::new("people", "a"), TableRef::new("people", "b")];
        let catalog = Catalog::build(&from, &loader()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tables_with_column("name"), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_alias_replaces_in_place() {
        let from = vec![
            TableRef::new("people", "t"),
            TableRef::new("pets", "u"),
            TableRef::new("pets", "t"),
        ];
        let catalog = Catalog::build(&from, &loader()).unwrap();
        assert_eq!(catalog.aliases(), vec!["t", "u"]);
        assert!(catalog.get("t").unwrap().has_column("owner"));
    }

    #[test]
    fn test_column_type() {
        let from = vec![TableRef::new("people", "p"), TableRef::new("pets", "x")];
        let catalog = Catalog::build(&from, &loader()).unwrap();
        assert_eq!(
            catalog.column_type(&ColumnRef::qualified("p", "name")),
            Ok(DataType::Str)
        );
        assert_eq!(catalog.column_type(&ColumnRef::bare("owner")), Ok(DataType::Int));
        // ambiguous, first declaring table wins
        assert_eq!(catalog.column_type(&ColumnRef::bare("id")), Ok(DataType::Int));
        assert_eq!(
            catalog.column_type(&ColumnRef::qualified("q", "id")),
            Err(Error::unknown_table("q"))
        );
        assert_eq!(
            catalog.column_type(&ColumnRef::qualified("p", "age")),
            Err(Error::unknown_column_in("age", "p"))
        );
        assert_eq!(
            catalog.column_type(&ColumnRef::bare("age")),
            Err(Error::unknown_column("age"))
        );
    }
}
