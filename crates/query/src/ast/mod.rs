//! AST module for query descriptions and predicates.

mod expr;
mod predicate;

pub use expr::{CmpOp, ColumnRef, Comparison, Operand, SelectItem, SelectStatement, TableRef};
pub use predicate::{BoundComparison, BoundOperand, Predicate};
