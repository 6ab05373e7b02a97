//! Project executor.

use crate::ast::SelectItem;
use crate::executor::Relation;
use crate::result::{ResultColumn, ResultSet};
use alloc::vec::Vec;
use sqleval_core::{Result, Value};

/// Project executor - picks and renames columns, producing the result set.
pub struct ProjectExecutor {
    /// Column indices to project.
    column_indices: Vec<usize>,
    /// Output name and declared type for each projected column.
    outputs: Vec<ResultColumn>,
}

impl ProjectExecutor {
    /// Creates a new project executor.
    pub fn new(column_indices: Vec<usize>, outputs: Vec<ResultColumn>) -> Self {
        Self {
            column_indices,
            outputs,
        }
    }

    /// Resolves the SELECT list against the relation's columns.
    pub fn bind(select: &[SelectItem], relation: &Relation) -> Result<Self> {
        let mut column_indices = Vec::with_capacity(select.len());
        let mut outputs = Vec::with_capacity(select.len());
        for item in select {
            let index = relation.resolve(&item.column)?;
            let declared = relation.columns()[index].data_type();
            column_indices.push(index);
            outputs.push(ResultColumn::new(item.output.clone(), declared));
        }
        Ok(Self::new(column_indices, outputs))
    }

    /// Executes the projection on the input relation.
    pub fn execute(&self, input: Relation) -> ResultSet {
        let rows: Vec<Vec<Value>> = input
            .into_iter()
            .map(|row| {
                self.column_indices
                    .iter()
                    .filter_map(|&idx| row.get(idx).cloned())
                    .collect()
            })
            .collect();
        ResultSet::new(self.outputs.clone(), rows)
    }
}
