//! Property-based tests for the optimizer and the cross product.
//!
//! These tests check that optimization never changes a query's result and
//! that the cross product has the expected shape for random inputs.

use proptest::prelude::*;
use sqleval_core::schema::{Table, TableData};
use sqleval_core::{DataType, Row, Value};
use sqleval_query::ast::{CmpOp, ColumnRef, Comparison, Operand, SelectStatement};
use sqleval_query::catalog::{Catalog, InMemoryLoader};
use sqleval_query::executor::{CrossProduct, Relation};
use sqleval_query::optimizer::{ColumnPruning, OptimizerPass};
use sqleval_query::planner::QueryPlan;
use sqleval_query::{execute_with, OptimizerConfig, QueryResponse};

/// Strategy for small integer cells, so that equality predicates hit.
fn value_strategy() -> impl Strategy<Value = i64> {
    -5i64..5i64
}

/// Strategy for rows of a two-column integer table.
fn rows_strategy(max_rows: usize) -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((value_strategy(), value_strategy()), 0..max_rows)
}

fn op_strategy() -> impl Strategy<Value = CmpOp> {
    prop_oneof![
        Just(CmpOp::Eq),
        Just(CmpOp::Ne),
        Just(CmpOp::Gt),
        Just(CmpOp::Ge),
        Just(CmpOp::Lt),
        Just(CmpOp::Le),
    ]
}

/// Columns a clause may reference. Bare `id` is left out: both tables declare
/// it, and the multi-match pushdown policy is checked separately.
fn column_strategy() -> impl Strategy<Value = ColumnRef> {
    prop_oneof![
        Just(ColumnRef::qualified("a", "id")),
        Just(ColumnRef::qualified("a", "v")),
        Just(ColumnRef::qualified("b", "id")),
        Just(ColumnRef::qualified("b", "w")),
        Just(ColumnRef::bare("v")),
        Just(ColumnRef::bare("w")),
    ]
}

/// Column-vs-literal clauses with the literal on either side.
fn pushable_clause_strategy() -> impl Strategy<Value = Comparison> {
    (op_strategy(), column_strategy(), value_strategy(), any::<bool>()).prop_map(
        |(op, column, literal, literal_left)| {
            let column = Operand::column(column);
            let literal = Operand::literal(literal);
            if literal_left {
                Comparison::new(op, literal, column)
            } else {
                Comparison::new(op, column, literal)
            }
        },
    )
}

fn loader(a: &[(i64, i64)], b: &[(i64, i64)]) -> InMemoryLoader {
    let table = |source: &str, second: &str, rows: &[(i64, i64)]| {
        let mut data = TableData::new(
            source,
            vec![("id".into(), DataType::Int), (second.into(), DataType::Int)],
        );
        for (x, y) in rows {
            data.push_row(vec![Value::Int(*x), Value::Int(*y)]);
        }
        data
    };
    InMemoryLoader::new()
        .with_table(table("a", "v", a))
        .with_table(table("b", "w", b))
}

fn statement(filters: Vec<Comparison>) -> SelectStatement {
    SelectStatement {
        filters,
        ..SelectStatement::new()
            .select(ColumnRef::qualified("a", "id"), "x")
            .select(ColumnRef::qualified("b", "w"), "y")
            .from_table("a", "a")
            .from_table("b", "b")
    }
}

/// Sorted rows, for order-insensitive comparison.
fn sorted_rows(response: &QueryResponse) -> Vec<Vec<Value>> {
    let mut rows = response.result().map(|r| r.rows().to_vec()).unwrap_or_default();
    rows.sort();
    rows
}

fn int_table(alias: &str, columns: usize, rows: usize) -> Table {
    let header = (0..columns)
        .map(|i| (format!("c{}", i), DataType::Int))
        .collect();
    let mut data = TableData::new(alias, header);
    for r in 0..rows {
        data.push_row((0..columns).map(|c| Value::Int((r * columns + c) as i64)).collect());
    }
    Table::from_data(alias, data).unwrap()
}

proptest! {
    /// Property: pushing column-vs-literal clauses below the cross product
    /// yields the same rows as filtering after it.
    #[test]
    fn pushdown_preserves_results(
        a in rows_strategy(8),
        b in rows_strategy(8),
        filters in prop::collection::vec(pushable_clause_strategy(), 0..4),
    ) {
        let loader = loader(&a, &b);
        let optimized = execute_with(statement(filters.clone()), &loader, &OptimizerConfig::default());
        let plain = execute_with(statement(filters), &loader, &OptimizerConfig::disabled());

        prop_assert!(optimized.success());
        prop_assert_eq!(
            optimized.result().map(|r| r.column_names().len()),
            plain.result().map(|r| r.column_names().len())
        );
        prop_assert_eq!(sorted_rows(&optimized), sorted_rows(&plain));
    }

    /// Property: a residual join clause mixed with pushed clauses still
    /// evaluates the same as the unoptimized plan.
    #[test]
    fn pushdown_with_join_clause_preserves_results(
        a in rows_strategy(8),
        b in rows_strategy(8),
        filters in prop::collection::vec(pushable_clause_strategy(), 0..3),
        join_op in op_strategy(),
    ) {
        let mut filters = filters;
        filters.push(Comparison::new(
            join_op,
            Operand::column(ColumnRef::qualified("a", "id")),
            Operand::column(ColumnRef::qualified("b", "id")),
        ));
        let loader = loader(&a, &b);
        let optimized = execute_with(statement(filters.clone()), &loader, &OptimizerConfig::default());
        let plain = execute_with(statement(filters), &loader, &OptimizerConfig::disabled());
        prop_assert_eq!(sorted_rows(&optimized), sorted_rows(&plain));
    }

    /// Property: the cross product has the product of the row counts and
    /// the sum of the column counts.
    #[test]
    fn cross_product_cardinality(
        shapes in prop::collection::vec((1usize..4, 0usize..5), 1..4),
    ) {
        let tables: Vec<Table> = shapes
            .iter()
            .enumerate()
            .map(|(i, (columns, rows))| int_table(&format!("t{}", i), *columns, *rows))
            .collect();
        let result = CrossProduct.execute(tables);

        let rows: usize = shapes.iter().map(|(_, r)| r).product();
        let columns: usize = shapes.iter().map(|(c, _)| c).sum();
        prop_assert_eq!(result.len(), rows);
        prop_assert_eq!(result.column_count(), columns);
        prop_assert!(result.iter().all(|row| row.len() == columns));
    }

    /// Property: the single-table shortcut equals the general product path
    /// started from the one-row, zero-column relation.
    #[test]
    fn single_table_shortcut_matches_general_path(
        columns in 1usize..4,
        rows in 0usize..6,
    ) {
        let table = int_table("t", columns, rows);
        let shortcut = CrossProduct.execute(vec![table.clone()]);
        let unit = Relation::new(Vec::new(), vec![Row::new(Vec::new())]);
        let general = CrossProduct.product(unit, Relation::from_table(table));
        prop_assert_eq!(shortcut, general);
    }

    /// Property: column pruning applied to an already pruned catalog removes
    /// nothing.
    #[test]
    fn column_pruning_is_idempotent(
        a in rows_strategy(5),
        b in rows_strategy(5),
        filters in prop::collection::vec(pushable_clause_strategy(), 0..3),
    ) {
        let loader = loader(&a, &b);
        let statement = statement(filters);
        let mut catalog = Catalog::build(&statement.from, &loader).unwrap();

        let plan = ColumnPruning.optimize(&mut catalog, QueryPlan::from_statement(&statement));
        let once: Vec<Vec<String>> = catalog.iter().map(|t| t.labels()).collect();
        let rows_once: Vec<usize> = catalog.iter().map(|t| t.row_count()).collect();

        ColumnPruning.optimize(&mut catalog, plan);
        let twice: Vec<Vec<String>> = catalog.iter().map(|t| t.labels()).collect();
        let rows_twice: Vec<usize> = catalog.iter().map(|t| t.row_count()).collect();

        prop_assert_eq!(once, twice);
        prop_assert_eq!(rows_once, rows_twice);
    }
}
