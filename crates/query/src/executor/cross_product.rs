//! Cross product of the catalog's tables.

use crate::executor::Relation;
use alloc::vec::Vec;
use sqleval_core::schema::Table;
use sqleval_core::Row;

/// Cartesian product executor.
///
/// Combines every row of each input with every row of the next, in input
/// order. Column order is the concatenation of the inputs' columns and the
/// leftmost input varies slowest.
pub struct CrossProduct;

impl CrossProduct {
    /// Computes the product of the given tables.
    ///
    /// A single table is returned as is. No tables yield an empty relation.
    pub fn execute(&self, tables: Vec<Table>) -> Relation {
        let mut inputs = tables.into_iter().map(Relation::from_table);
        let first = match inputs.next() {
            Some(relation) => relation,
            None => return Relation::empty(),
        };
        inputs.fold(first, |acc, next| self.product(acc, next))
    }

    /// Computes the product of two relations with a nested loop.
    pub fn product(&self, left: Relation, right: Relation) -> Relation {
        let (left_columns, left_rows) = left.into_parts();
        let (right_columns, right_rows) = right.into_parts();

        let mut columns = left_columns;
        columns.extend(right_columns);

        let mut rows = Vec::with_capacity(left_rows.len().saturating_mul(right_rows.len()));
        for l in &left_rows {
            for r in &right_rows {
                rows.push(Row::concat(l, r));
            }
        }

        Relation::new(columns, rows)
    }
}
