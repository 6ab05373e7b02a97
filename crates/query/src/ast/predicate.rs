//! Predicate definitions for row filtering.
//!
//! A `Comparison` from the query description names its columns; before it can
//! be evaluated it is bound to column positions of a concrete row layout
//! (a single table during pushdown, the cross product during evaluation).

use crate::ast::expr::CmpOp;
use sqleval_core::{Row, Value};

impl CmpOp {
    /// Evaluates `left op right`.
    #[inline]
    pub fn eval(&self, left: &Value, right: &Value) -> bool {
        match self {
            CmpOp::Eq => left == right,
            CmpOp::Ne => left != right,
            CmpOp::Gt => left > right,
            CmpOp::Ge => left >= right,
            CmpOp::Lt => left < right,
            CmpOp::Le => left <= right,
        }
    }
}

/// A predicate that can be evaluated against rows.
pub trait Predicate {
    /// Evaluates the predicate against a row.
    fn eval(&self, row: &Row) -> bool;
}

/// A comparison operand bound to a row layout.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundOperand {
    /// The value at this column position.
    Column(usize),
    /// A constant.
    Literal(Value),
}

impl BoundOperand {
    #[inline]
    fn value<'a>(&'a self, row: &'a Row) -> Option<&'a Value> {
        match self {
            BoundOperand::Column(index) => row.get(*index),
            BoundOperand::Literal(v) => Some(v),
        }
    }
}

/// A comparison whose operands have been bound to column positions.
///
/// Operand order is preserved: `left op right` is evaluated exactly as written.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundComparison {
    pub op: CmpOp,
    pub left: BoundOperand,
    pub right: BoundOperand,
}

impl BoundComparison {
    pub fn new(op: CmpOp, left: BoundOperand, right: BoundOperand) -> Self {
        Self { op, left, right }
    }

    /// Compares a column to a literal, literal on the right.
    pub fn column_literal(op: CmpOp, index: usize, literal: Value) -> Self {
        Self::new(op, BoundOperand::Column(index), BoundOperand::Literal(literal))
    }

    /// Compares a literal to a column, literal on the left.
    pub fn literal_column(op: CmpOp, literal: Value, index: usize) -> Self {
        Self::new(op, BoundOperand::Literal(literal), BoundOperand::Column(index))
    }

    /// Compares two columns.
    pub fn columns(op: CmpOp, left: usize, right: usize) -> Self {
        Self::new(op, BoundOperand::Column(left), BoundOperand::Column(right))
    }
}

impl Predicate for BoundComparison {
    fn eval(&self, row: &Row) -> bool {
        match (self.left.value(row), self.right.value(row)) {
            (Some(l), Some(r)) => self.op.eval(l, r),
            _ => false,
        }
    }
}
