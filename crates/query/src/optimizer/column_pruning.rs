//! Dead-column elimination.
//!
//! Deletes from every table each column whose bare name is referenced neither
//! by the projection nor by a residual filter. Qualification is ignored: a
//! name referenced through one alias keeps that column alive in every table.

use crate::catalog::Catalog;
use crate::optimizer::OptimizerPass;
use crate::planner::QueryPlan;
use alloc::string::String;
use alloc::vec::Vec;

/// Column pruning pass.
pub struct ColumnPruning;

impl OptimizerPass for ColumnPruning {
    fn optimize(&self, catalog: &mut Catalog, plan: QueryPlan) -> QueryPlan {
        let required = plan.required_columns();
        for table in catalog.iter_mut() {
            let dead: Vec<String> = table
                .columns()
                .iter()
                .filter(|c| !required.contains(c.name()))
                .map(|c| c.name().into())
                .collect();
            for name in &dead {
                table.delete_column(name);
            }
            if !dead.is_empty() {
                tracing::debug!(
                    alias = %table.alias(),
                    pruned = dead.len(),
                    remaining = table.column_count(),
                    "pruned columns"
                );
            }
        }
        drop(required);
        plan
    }

    fn name(&self) -> &'static str {
        "column_pruning"
    }
}
