//! The evaluation plan derived from a statement.
//!
//! A `QueryPlan` starts as a copy of the statement's SELECT and WHERE lists.
//! Optimizer passes rewrite the plan, never the statement: a clause that has
//! been applied directly to a table moves from `filters` to `pushed`.

use crate::ast::{Comparison, SelectItem, SelectStatement};
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashSet;

/// Plan consumed by the evaluator.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryPlan {
    /// Projection, in output order.
    pub select: Vec<SelectItem>,
    /// Residual WHERE clauses, evaluated after the cross product.
    pub filters: Vec<Comparison>,
    /// Clauses already applied to a single table's rows.
    pub pushed: Vec<Comparison>,
}

impl QueryPlan {
    /// Creates the unoptimized plan for a statement.
    pub fn from_statement(statement: &SelectStatement) -> Self {
        Self {
            select: statement.select.clone(),
            filters: statement.filters.clone(),
            pushed: Vec::new(),
        }
    }

    /// Returns the bare names of every column the projection or the residual
    /// filters still reference.
    pub fn required_columns(&self) -> HashSet<&str> {
        let mut required: HashSet<&str> = self
            .select
            .iter()
            .map(|item| item.column.name.as_str())
            .collect();
        for clause in &self.filters {
            required.extend(clause.columns().map(|c| c.name.as_str()));
        }
        required
    }
}

impl fmt::Display for QueryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project")?;
        for item in &self.select {
            writeln!(f, "  {} AS {}", item.column, item.output)?;
        }
        for clause in &self.filters {
            writeln!(f, "Filter {}", clause)?;
        }
        for clause in &self.pushed {
            writeln!(f, "Pushed {}", clause)?;
        }
        write!(f, "CrossProduct")
    }
}
