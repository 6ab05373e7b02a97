//! Query optimizer module.

mod column_pruning;
mod pass;
mod predicate_pushdown;

pub use column_pruning::ColumnPruning;
pub use pass::OptimizerPass;
pub use predicate_pushdown::PredicatePushdown;

use crate::catalog::Catalog;
use crate::planner::QueryPlan;
use alloc::boxed::Box;
use alloc::vec::Vec;

/// How pushdown treats an unqualified column declared by several tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmbiguousPushdown {
    /// Filter every table that declares the column.
    #[default]
    AllMatches,
    /// Filter only the first declaring table in FROM order.
    FirstMatch,
}

/// Selects which passes the optimizer runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// Run dead-column elimination.
    pub prune_columns: bool,
    /// Push single-table predicates below the cross product.
    pub pushdown_predicates: bool,
    /// Policy for unqualified multi-table columns during pushdown.
    pub ambiguous_pushdown: AmbiguousPushdown,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            prune_columns: true,
            pushdown_predicates: true,
            ambiguous_pushdown: AmbiguousPushdown::AllMatches,
        }
    }
}

impl OptimizerConfig {
    /// A configuration that runs no passes.
    pub fn disabled() -> Self {
        Self {
            prune_columns: false,
            pushdown_predicates: false,
            ambiguous_pushdown: AmbiguousPushdown::AllMatches,
        }
    }
}

/// Query optimizer that applies optimization passes.
pub struct Optimizer {
    passes: Vec<Box<dyn OptimizerPass>>,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer {
    /// Creates a new optimizer with default passes.
    ///
    /// The default passes are applied in this order:
    /// 1. ColumnPruning - Delete columns neither SELECT nor WHERE references
    /// 2. PredicatePushdown - Filter single tables by column-vs-literal clauses
    pub fn new() -> Self {
        Self::from_config(&OptimizerConfig::default())
    }

    /// Creates an optimizer running the passes the configuration enables.
    pub fn from_config(config: &OptimizerConfig) -> Self {
        let mut passes: Vec<Box<dyn OptimizerPass>> = Vec::new();
        if config.prune_columns {
            passes.push(Box::new(ColumnPruning));
        }
        if config.pushdown_predicates {
            passes.push(Box::new(PredicatePushdown::with_policy(
                config.ambiguous_pushdown,
            )));
        }
        Self { passes }
    }

    /// Creates an optimizer that leaves the plan and catalog untouched.
    pub fn disabled() -> Self {
        Self::with_passes(Vec::new())
    }

    /// Creates an optimizer with custom passes.
    pub fn with_passes(passes: Vec<Box<dyn OptimizerPass>>) -> Self {
        Self { passes }
    }

    /// Returns the pass names in application order.
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Optimizes a plan, narrowing the catalog's tables in place.
    pub fn optimize(&self, catalog: &mut Catalog, mut plan: QueryPlan) -> QueryPlan {
        for pass in &self.passes {
            plan = pass.optimize(catalog, plan);
            tracing::debug!(
                pass = pass.name(),
                residual = plan.filters.len(),
                pushed = plan.pushed.len(),
                "optimizer pass applied"
            );
        }
        plan
    }
}
