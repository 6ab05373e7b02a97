//! sqleval Query - validation, optimization and evaluation of structured
//! SELECT queries.
//!
//! This crate provides the query engine:
//!
//! - `ast`: The query description (`SelectStatement`) and bound predicates
//! - `catalog`: Per-query alias → table mapping and the `TableLoader` trait
//! - `analyzer`: Static reference and type checking
//! - `planner`: The plan value the optimizer rewrites
//! - `optimizer`: Column pruning and predicate pushdown passes
//! - `executor`: Cross product, filter and project operators
//! - `result`: Result sets and the response sent to result sinks
//!
//! # Example
//!
//! ```rust
//! use sqleval_core::schema::TableData;
//! use sqleval_core::{DataType, Value};
//! use sqleval_query::ast::{CmpOp, ColumnRef, Operand, SelectStatement};
//! use sqleval_query::catalog::InMemoryLoader;
//!
//! let loader = InMemoryLoader::new().with_table(
//!     TableData::new("t", vec![("id".into(), DataType::Int), ("name".into(), DataType::Str)])
//!         .with_row(vec![Value::Int(1), Value::from("a")])
//!         .with_row(vec![Value::Int(2), Value::from("b")]),
//! );
//! let statement = SelectStatement::new()
//!     .select(ColumnRef::qualified("t", "name"), "n")
//!     .from_table("t", "t")
//!     .filter(CmpOp::Eq, Operand::column(ColumnRef::qualified("t", "id")), Operand::literal(2i64));
//!
//! let response = sqleval_query::execute(statement, &loader);
//! assert!(response.success());
//! assert_eq!(response.result().unwrap().rows(), &[vec![Value::from("b")]]);
//! ```

#![no_std]

extern crate alloc;

pub mod analyzer;
pub mod ast;
pub mod catalog;
pub mod executor;
pub mod optimizer;
pub mod planner;
mod query;
pub mod result;

pub use optimizer::{AmbiguousPushdown, OptimizerConfig};
pub use query::Query;
pub use result::{QueryResponse, ResultColumn, ResultSet};

use ast::SelectStatement;
use catalog::TableLoader;

/// Prepares and runs a statement with the default optimizer, reporting every
/// error as a failure response.
pub fn execute<L: TableLoader>(statement: SelectStatement, loader: &L) -> QueryResponse {
    execute_with(statement, loader, &OptimizerConfig::default())
}

/// Like `execute`, with an explicit optimizer configuration.
pub fn execute_with<L: TableLoader>(
    statement: SelectStatement,
    loader: &L,
    config: &OptimizerConfig,
) -> QueryResponse {
    Query::prepare(statement, loader, config)
        .and_then(Query::run)
        .into()
}
