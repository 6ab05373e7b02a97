//! Query description AST definitions.
//!
//! These types mirror the structured query description a caller hands in:
//! `{select, from, where}`. They deserialize directly from its JSON form.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};
use sqleval_core::Value;

/// Reference to a column, optionally qualified by a table alias.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Table alias, or None when the column is to be resolved by name.
    #[serde(default)]
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

impl ColumnRef {
    /// Creates a new column reference.
    pub fn new(table: Option<String>, name: impl Into<String>) -> Self {
        Self {
            table,
            name: name.into(),
        }
    }

    /// Creates a column reference qualified by `table`.
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Some(table.into()), name)
    }

    /// Creates an unqualified column reference.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(None, name)
    }

    /// Returns the table alias as a string slice.
    #[inline]
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{}.{}", table, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// One side of a comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    /// A column reference.
    Column(ColumnRef),
    /// A typed literal.
    Literal(Value),
}

impl Operand {
    /// Creates a column operand.
    pub fn column(column: ColumnRef) -> Self {
        Operand::Column(column)
    }

    /// Creates a literal operand.
    pub fn literal(value: impl Into<Value>) -> Self {
        Operand::Literal(value.into())
    }

    /// Returns the column reference if this is a column operand.
    pub fn as_column(&self) -> Option<&ColumnRef> {
        match self {
            Operand::Column(c) => Some(c),
            Operand::Literal(_) => None,
        }
    }

    /// Returns the literal if this is a literal operand.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Operand::Literal(v) => Some(v),
            Operand::Column(_) => None,
        }
    }
}

/// Comparison operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CmpOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
}

impl CmpOp {
    /// Returns the operator as written in a query.
    pub fn symbol(&self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Ne => "!=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A WHERE clause: `left op right`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub op: CmpOp,
    pub left: Operand,
    pub right: Operand,
}

impl Comparison {
    pub fn new(op: CmpOp, left: Operand, right: Operand) -> Self {
        Self { op, left, right }
    }

    /// Returns the column references on either side, left first.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnRef> {
        self.left
            .as_column()
            .into_iter()
            .chain(self.right.as_column())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Column(c) => write!(f, "{}", c),
            Operand::Literal(Value::Str(s)) => write!(f, "{:?}", s),
            Operand::Literal(v) => write!(f, "{}", v),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

/// A SELECT list entry: a source column and the name it is emitted under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectItem {
    pub column: ColumnRef,
    #[serde(rename = "as")]
    pub output: String,
}

impl SelectItem {
    pub fn new(column: ColumnRef, output: impl Into<String>) -> Self {
        Self {
            column,
            output: output.into(),
        }
    }
}

/// A FROM entry: a source table bound to an alias.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    pub source: String,
    #[serde(rename = "as")]
    pub alias: String,
}

impl TableRef {
    pub fn new(source: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alias: alias.into(),
        }
    }
}

/// A complete `SELECT ... FROM ... WHERE ...` description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
    pub select: Vec<SelectItem>,
    pub from: Vec<TableRef>,
    #[serde(default, rename = "where")]
    pub filters: Vec<Comparison>,
}

impl SelectStatement {
    /// Creates an empty statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a SELECT item.
    pub fn select(mut self, column: ColumnRef, output: impl Into<String>) -> Self {
        self.select.push(SelectItem::new(column, output));
        self
    }

    /// Adds a FROM entry.
    pub fn from_table(mut self, source: impl Into<String>, alias: impl Into<String>) -> Self {
        self.from.push(TableRef::new(source, alias));
        self
    }

    /// Adds a WHERE clause.
    pub fn filter(mut self, op: CmpOp, left: Operand, right: Operand) -> Self {
        self.filters.push(Comparison::new(op, left, right));
        self
    }
}
