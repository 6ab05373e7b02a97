//! Predicate pushdown optimization pass.
//!
//! A WHERE clause that compares one column to a literal depends on a single
//! table, so it can be applied to that table's rows before the cross product.
//! Filtering a factor of a Cartesian product filters the product, so the
//! result is unchanged while the join input shrinks.
//!
//! Pushed clauses move from `QueryPlan::filters` to `QueryPlan::pushed` and
//! are never evaluated again.

use crate::ast::{BoundComparison, ColumnRef, Comparison, Operand, Predicate};
use crate::catalog::Catalog;
use crate::optimizer::{AmbiguousPushdown, OptimizerPass};
use crate::planner::QueryPlan;
use alloc::string::String;
use alloc::vec::Vec;
use sqleval_core::Value;

/// Predicate pushdown optimization.
pub struct PredicatePushdown {
    ambiguous: AmbiguousPushdown,
}

impl Default for PredicatePushdown {
    fn default() -> Self {
        Self::new()
    }
}

impl OptimizerPass for PredicatePushdown {
    fn optimize(&self, catalog: &mut Catalog, plan: QueryPlan) -> QueryPlan {
        let QueryPlan {
            select,
            filters,
            mut pushed,
        } = plan;

        let mut residual = Vec::with_capacity(filters.len());
        for clause in filters {
            if self.try_push(catalog, &clause) {
                pushed.push(clause);
            } else {
                residual.push(clause);
            }
        }

        QueryPlan {
            select,
            filters: residual,
            pushed,
        }
    }

    fn name(&self) -> &'static str {
        "predicate_pushdown"
    }
}

impl PredicatePushdown {
    /// Creates the pass with the default multi-match policy, `AllMatches`.
    pub fn new() -> Self {
        Self::with_policy(AmbiguousPushdown::default())
    }

    /// Creates the pass with an explicit policy for unqualified columns that
    /// several tables declare.
    pub fn with_policy(ambiguous: AmbiguousPushdown) -> Self {
        Self { ambiguous }
    }

    /// Applies the clause to its table(s) if it is column-versus-literal.
    /// Returns whether the clause was consumed.
    fn try_push(&self, catalog: &mut Catalog, clause: &Comparison) -> bool {
        let (column, literal, literal_on_left) = match (&clause.left, &clause.right) {
            (Operand::Column(c), Operand::Literal(v)) => (c, v, false),
            (Operand::Literal(v), Operand::Column(c)) => (c, v, true),
            _ => return false,
        };

        let targets = self.target_tables(catalog, column);
        if targets.is_empty() {
            return false;
        }
        if targets.len() > 1 {
            tracing::warn!(
                column = %column.name,
                tables = targets.len(),
                "unqualified column pushed into every declaring table"
            );
        }

        for alias in &targets {
            let table = match catalog.get_mut(alias) {
                Some(t) => t,
                None => continue,
            };
            let index = match table.column_index(&column.name) {
                Some(i) => i,
                None => continue,
            };
            let predicate = bind(clause, index, literal.clone(), literal_on_left);
            let removed = table.retain_rows(|row| predicate.eval(row));
            tracing::debug!(
                alias = %alias,
                clause = %clause,
                removed,
                kept = table.row_count(),
                "pushed predicate"
            );
        }
        true
    }

    fn target_tables(&self, catalog: &Catalog, column: &ColumnRef) -> Vec<String> {
        match column.table() {
            Some(alias) if catalog.contains(alias) => alloc::vec![alias.into()],
            Some(_) => Vec::new(),
            None => {
                let owners = catalog.tables_with_column(&column.name);
                let owners = match self.ambiguous {
                    AmbiguousPushdown::AllMatches => owners,
                    AmbiguousPushdown::FirstMatch => owners.into_iter().take(1).collect(),
                };
                owners.into_iter().map(String::from).collect()
            }
        }
    }
}

fn bind(clause: &Comparison, index: usize, literal: Value, literal_on_left: bool) -> BoundComparison {
    if literal_on_left {
        BoundComparison::literal_column(clause.op, literal, index)
    } else {
        BoundComparison::column_literal(clause.op, index, literal)
    }
}
