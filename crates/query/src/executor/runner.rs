//! Plan evaluation: cross product, residual filters, projection.

use crate::catalog::Catalog;
use crate::executor::{CrossProduct, FilterExecutor, ProjectExecutor};
use crate::planner::QueryPlan;
use crate::result::ResultSet;
use sqleval_core::Result;

/// Runs an optimized plan over the tables of its catalog.
pub struct Evaluator<'a> {
    plan: &'a QueryPlan,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator for the plan.
    pub fn new(plan: &'a QueryPlan) -> Self {
        Self { plan }
    }

    /// Evaluates the plan, consuming the catalog.
    pub fn execute(&self, catalog: Catalog) -> Result<ResultSet> {
        let mut relation = CrossProduct.execute(catalog.into_tables());
        tracing::debug!(
            rows = relation.len(),
            columns = relation.column_count(),
            "cross product"
        );

        for clause in &self.plan.filters {
            relation = FilterExecutor::bind(clause, &relation)?.execute(relation);
            tracing::debug!(clause = %clause, rows = relation.len(), "residual filter");
        }

        let result = ProjectExecutor::bind(&self.plan.select, &relation)?.execute(relation);
        tracing::debug!(rows = result.len(), columns = result.columns().len(), "projected");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CmpOp, ColumnRef, Operand, SelectStatement};
    use alloc::vec;
    use sqleval_core::schema::{Table, TableData};
    use sqleval_core::{DataType, Value};

    fn catalog() -> Catalog {
        let people = TableData::new(
            "people",
            vec![("id".into(), DataType::Int), ("name".into(), DataType::Str)],
        )
        .with_row(vec![Value::Int(1), Value::from("ann")])
        .with_row(vec![Value::Int(2), Value::from("bob")]);
        let pets = TableData::new(
            "pets",
            vec![("owner".into(), DataType::Int), ("kind".into(), DataType::Str)],
        )
        .with_row(vec![Value::Int(2), Value::from("cat")])
        .with_row(vec![Value::Int(2), Value::from("dog")])
        .with_row(vec![Value::Int(3), Value::from("eel")]);
        Catalog::from_tables(vec![
            Table::from_data("p", people).unwrap(),
            Table::from_data("x", pets).unwrap(),
        ])
    }

    #[test]
    fn test_join_through_filter() {
        let statement = SelectStatement::new()
            .select(ColumnRef::qualified("p", "name"), "who")
            .select(ColumnRef::bare("kind"), "pet")
            .filter(
                CmpOp::Eq,
                Operand::column(ColumnRef::qualified("p", "id")),
                Operand::column(ColumnRef::qualified("x", "owner")),
            );
        let plan = QueryPlan::from_statement(&statement);
        let result = Evaluator::new(&plan).execute(catalog()).unwrap();

        assert_eq!(result.column_names(), vec!["who", "pet"]);
        assert_eq!(
            result.rows(),
            &[
                vec![Value::from("bob"), Value::from("cat")],
                vec![Value::from("bob"), Value::from("dog")],
            ]
        );
    }

    #[test]
    fn test_unfiltered_product() {
        let statement = SelectStatement::new().select(ColumnRef::bare("kind"), "k");
        let plan = QueryPlan::from_statement(&statement);
        let result = Evaluator::new(&plan).execute(catalog()).unwrap();
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn test_empty_result_keeps_declared_types() {
        let statement = SelectStatement::new()
            .select(ColumnRef::qualified("p", "name"), "n")
            .filter(
                CmpOp::Gt,
                Operand::column(ColumnRef::qualified("p", "id")),
                Operand::literal(10i64),
            );
        let plan = QueryPlan::from_statement(&statement);
        let result = Evaluator::new(&plan).execute(catalog()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.columns()[0].data_type, DataType::Str);
    }
}
