//! sqleval Core - value, table and error types for the sqleval query engine.
//!
//! This crate provides the foundational types shared by every phase of a query:
//!
//! - `DataType`: The closed set of semantic types (int, float, str, bool)
//! - `Value`: A typed scalar used for literals and cells alike
//! - `Row`: A fixed-arity row of values
//! - `schema`: Aliased columns and tables, plus raw loader output (`TableData`)
//! - `Error`: Error types for query construction, validation and evaluation
//!
//! # Example
//!
//! ```rust
//! use sqleval_core::{DataType, Value};
//! use sqleval_core::schema::{Table, TableData};
//!
//! let data = TableData::new(
//!     "people",
//!     vec![("id".into(), DataType::Int), ("name".into(), DataType::Str)],
//! )
//! .with_row(vec![Value::Int(1), Value::from("Alice")]);
//!
//! let table = Table::from_data("p", data).unwrap();
//! assert_eq!(table.labels(), vec!["p.id", "p.name"]);
//! assert_eq!(table.rows()[0].get(1), Some(&Value::from("Alice")));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod row;
pub mod schema;
mod types;
mod value;

pub use error::{Error, Result};
pub use row::Row;
pub use types::{DataType, UnknownDataType};
pub use value::Value;
