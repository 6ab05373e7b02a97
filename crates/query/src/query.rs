//! Query lifecycle: prepare once, run once.

use crate::analyzer::Validator;
use crate::ast::SelectStatement;
use crate::catalog::{Catalog, TableLoader};
use crate::executor::Evaluator;
use crate::optimizer::{Optimizer, OptimizerConfig};
use crate::planner::QueryPlan;
use crate::result::ResultSet;
use sqleval_core::{Error, Result};

/// A prepared query.
///
/// Preparing loads every FROM table, validates the statement and, when it is
/// valid, optimizes it. A validation error is kept and reported by `run`.
#[derive(Debug)]
pub struct Query {
    statement: SelectStatement,
    catalog: Catalog,
    plan: QueryPlan,
    error: Option<Error>,
}

impl Query {
    /// Prepares a statement.
    ///
    /// Returns `Err` only if a table cannot be loaded.
    #[tracing::instrument(level = "debug", skip_all, fields(tables = statement.from.len()))]
    pub fn prepare<L: TableLoader>(
        statement: SelectStatement,
        loader: &L,
        config: &OptimizerConfig,
    ) -> Result<Self> {
        let mut catalog = Catalog::build(&statement.from, loader)?;
        let mut plan = QueryPlan::from_statement(&statement);

        let error = Validator::new(&catalog).validate(&statement).err();
        match &error {
            Some(err) => tracing::debug!(error = %err, "validation failed"),
            None => plan = Optimizer::from_config(config).optimize(&mut catalog, plan),
        }

        Ok(Self {
            statement,
            catalog,
            plan,
            error,
        })
    }

    /// Returns whether the statement passed validation.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the validation error, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Returns the statement as given.
    pub fn statement(&self) -> &SelectStatement {
        &self.statement
    }

    /// Returns the plan the evaluator will run.
    pub fn plan(&self) -> &QueryPlan {
        &self.plan
    }

    /// Returns the catalog, narrowed by the optimizer if the query is valid.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Evaluates the query, or returns its validation error.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(self) -> Result<ResultSet> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Evaluator::new(&self.plan).execute(self.catalog)
    }
}
