//! Static validation of a statement against its catalog.
//!
//! The validator reads only schema information, never row data, and reports
//! the first problem it finds: SELECT items are checked top to bottom, then
//! WHERE clauses top to bottom.

use crate::ast::{ColumnRef, Comparison, Operand, SelectItem, SelectStatement};
use crate::catalog::Catalog;
use sqleval_core::{DataType, Error, Result};

/// Validator for a single statement.
pub struct Validator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Validator<'a> {
    /// Creates a validator over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Validates the statement, returning the first error found.
    pub fn validate(&self, statement: &SelectStatement) -> Result<()> {
        for item in &statement.select {
            self.check_select_item(item)?;
        }
        for clause in &statement.filters {
            self.check_comparison(clause)?;
        }
        Ok(())
    }

    fn check_select_item(&self, item: &SelectItem) -> Result<()> {
        let column = &item.column;
        match column.table() {
            Some(alias) => {
                let table = self
                    .catalog
                    .get(alias)
                    .ok_or_else(|| Error::unknown_table(alias))?;
                if !table.has_column(&column.name) {
                    return Err(Error::unknown_column_in(column.name.as_str(), alias));
                }
                Ok(())
            }
            None => {
                let owners = self.catalog.tables_with_column(&column.name);
                match owners.as_slice() {
                    [] => Err(Error::unknown_column(column.name.as_str())),
                    [_] => Ok(()),
                    [first, second, ..] => {
                        Err(Error::ambiguous_column(column.name.as_str(), *first, *second))
                    }
                }
            }
        }
    }

    fn check_comparison(&self, clause: &Comparison) -> Result<()> {
        let left = self.operand_type(&clause.left)?;
        let right = self.operand_type(&clause.right)?;
        if left != right {
            return Err(Error::incompatible_types(clause.op.symbol(), left, right));
        }
        Ok(())
    }

    fn operand_type(&self, operand: &Operand) -> Result<DataType> {
        match operand {
            Operand::Literal(value) => Ok(value.data_type()),
            Operand::Column(column) => self.column_type(column),
        }
    }

    fn column_type(&self, column: &ColumnRef) -> Result<DataType> {
        self.catalog.column_type(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CmpOp, TableRef};
    use crate::catalog::InMemoryLoader;
    use alloc::vec;
    use sqleval_core::schema::TableData;
    use sqleval_core::Value;

    fn catalog() -> Catalog {
        let loader = InMemoryLoader::new()
            .with_table(
                TableData::new(
                    "people",
                    vec![("id".into(), DataType::Int), ("name".into(), DataType::Str)],
                )
                .with_row(vec![Value::Int(1), Value::from("a")]),
            )
            .with_table(TableData::new(
                "pets",
                vec![
                    ("id".into(), DataType::Int),
                    ("owner".into(), DataType::Int),
                    ("weight".into(), DataType::Float),
                ],
            ));
        let from = vec![TableRef::new("people", "p"), TableRef::new("pets", "x")];
        Catalog::build(&from, &loader).unwrap()
    }

    fn validate(statement: &SelectStatement) -> Result<()> {
        let catalog = catalog();
        Validator::new(&catalog).validate(statement)
    }

    #[test]
    fn test_valid_statement() {
        let stmt = SelectStatement::new()
            .select(ColumnRef::qualified("p", "name"), "n")
            .select(ColumnRef::bare("owner"), "o")
            .filter(
                CmpOp::Eq,
                Operand::column(ColumnRef::qualified("p", "id")),
                Operand::column(ColumnRef::bare("owner")),
            );
        assert_eq!(validate(&stmt), Ok(()));
    }

    #[test]
    fn test_unknown_table() {
        let stmt = SelectStatement::new().select(ColumnRef::qualified("q", "id"), "id");
        assert_eq!(validate(&stmt), Err(Error::unknown_table("q")));
    }

    #[test]
    fn test_unknown_column_in_table() {
        let stmt = SelectStatement::new().select(ColumnRef::qualified("p", "owner"), "o");
        assert_eq!(validate(&stmt), Err(Error::unknown_column_in("owner", "p")));
    }

    #[test]
    fn test_unknown_bare_column() {
        let stmt = SelectStatement::new().select(ColumnRef::bare("age"), "a");
        assert_eq!(validate(&stmt), Err(Error::unknown_column("age")));
    }

    #[test]
    fn test_ambiguous_column() {
        let stmt = SelectStatement::new().select(ColumnRef::bare("id"), "id");
        assert_eq!(validate(&stmt), Err(Error::ambiguous_column("id", "p", "x")));

        let stmt = SelectStatement::new().select(ColumnRef::qualified("p", "id"), "id");
        assert_eq!(validate(&stmt), Ok(()));
    }

    #[test]
    fn test_incompatible_types() {
        let stmt = SelectStatement::new()
            .select(ColumnRef::qualified("p", "id"), "id")
            .filter(
                CmpOp::Eq,
                Operand::column(ColumnRef::qualified("p", "name")),
                Operand::literal(2i64),
            );
        assert_eq!(
            validate(&stmt),
            Err(Error::incompatible_types("=", DataType::Str, DataType::Int))
        );
    }

    #[test]
    fn test_int_and_float_are_incompatible() {
        let stmt = SelectStatement::new().filter(
            CmpOp::Gt,
            Operand::column(ColumnRef::bare("weight")),
            Operand::literal(2i64),
        );
        assert_eq!(
            validate(&stmt),
            Err(Error::incompatible_types(">", DataType::Float, DataType::Int))
        );
    }

    #[test]
    fn test_select_checked_before_where() {
        let stmt = SelectStatement::new()
            .select(ColumnRef::bare("missing"), "m")
            .filter(
                CmpOp::Eq,
                Operand::literal("a"),
                Operand::literal(1i64),
            );
        assert_eq!(validate(&stmt), Err(Error::unknown_column("missing")));
    }

    #[test]
    fn test_first_error_wins() {
        let stmt = SelectStatement::new()
            .select(ColumnRef::qualified("q", "id"), "a")
            .select(ColumnRef::bare("id"), "b");
        assert_eq!(validate(&stmt), Err(Error::unknown_table("q")));
    }

    #[test]
    fn test_where_ambiguous_column_is_not_an_error() {
        let stmt = SelectStatement::new().filter(
            CmpOp::Eq,
            Operand::column(ColumnRef::bare("id")),
            Operand::literal(1i64),
        );
        assert_eq!(validate(&stmt), Ok(()));
    }

    #[test]
    fn test_where_unknown_references() {
        let stmt = SelectStatement::new().filter(
            CmpOp::Eq,
            Operand::column(ColumnRef::qualified("z", "id")),
            Operand::literal(1i64),
        );
        assert_eq!(validate(&stmt), Err(Error::unknown_table("z")));

        let stmt = SelectStatement::new().filter(
            CmpOp::Eq,
            Operand::literal(1i64),
            Operand::column(ColumnRef::bare("age")),
        );
        assert_eq!(validate(&stmt), Err(Error::unknown_column("age")));
    }
}
