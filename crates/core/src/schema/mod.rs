//! Schema module for sqleval.
//!
//! This module contains the column and table definitions that make up a
//! per-query catalog, plus the raw `TableData` a loader hands over.

mod column;
mod table;

pub use column::Column;
pub use table::{Table, TableData};
