//! Optimizer pass trait.

use crate::catalog::Catalog;
use crate::planner::QueryPlan;

/// An optimization pass.
///
/// A pass may narrow the catalog's tables in place (dropping columns or rows)
/// and returns the rewritten plan. It must never change the query's result.
pub trait OptimizerPass {
    /// Optimizes the given plan against the catalog.
    fn optimize(&self, catalog: &mut Catalog, plan: QueryPlan) -> QueryPlan;

    /// Returns the name of this pass.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}
