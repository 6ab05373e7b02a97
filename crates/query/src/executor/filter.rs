//! Filter executor.

use crate::ast::{BoundComparison, BoundOperand, Comparison, Operand, Predicate};
use crate::executor::Relation;
use sqleval_core::Result;

/// Filter executor - filters rows based on a predicate.
pub struct FilterExecutor<P: Predicate> {
    predicate: P,
}

impl<P: Predicate> FilterExecutor<P> {
    /// Creates a new filter executor.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }

    /// Executes the filter on the input relation.
    pub fn execute(&self, mut input: Relation) -> Relation {
        input.retain(|row| self.predicate.eval(row));
        input
    }
}

impl FilterExecutor<BoundComparison> {
    /// Binds a WHERE clause against the relation's column layout.
    pub fn bind(clause: &Comparison, relation: &Relation) -> Result<Self> {
        let left = bind_operand(&clause.left, relation)?;
        let right = bind_operand(&clause.right, relation)?;
        Ok(Self::new(BoundComparison::new(clause.op, left, right)))
    }
}

fn bind_operand(operand: &Operand, relation: &Relation) -> Result<BoundOperand> {
    match operand {
        Operand::Column(column) => relation.resolve(column).map(BoundOperand::Column),
        Operand::Literal(value) => Ok(BoundOperand::Literal(value.clone())),
    }
}
