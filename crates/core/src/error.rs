//! Error types for sqleval.
//!
//! Every error is terminal for the query that raised it. The `Display` output
//! is the message reported to the caller.

use crate::types::DataType;
use alloc::string::String;
use core::fmt;

/// Result type alias for sqleval operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for query construction, validation and evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A FROM entry names a source the loader cannot find.
    UnknownSource {
        source: String,
    },
    /// Loaded table data is malformed.
    InvalidTable {
        source: String,
        message: String,
    },
    /// A column reference names an alias that is not in the catalog.
    UnknownTable {
        name: String,
    },
    /// A referenced column does not exist. `table` is set when the reference
    /// was qualified.
    UnknownColumn {
        column: String,
        table: Option<String>,
    },
    /// An unqualified column is declared by more than one table.
    AmbiguousColumn {
        column: String,
        first: String,
        second: String,
    },
    /// A comparison has operands of different types.
    IncompatibleTypes {
        op: String,
        left: DataType,
        right: DataType,
    },
    /// A column label could not be resolved against an intermediate relation.
    ColumnNotFound {
        label: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSource { source } => {
                write!(f, "ERROR: Unknown table source \"{}\".", source)
            }
            Error::InvalidTable { source, message } => {
                write!(f, "ERROR: Invalid table \"{}\": {}.", source, message)
            }
            Error::UnknownTable { name } => {
                write!(f, "ERROR: Unknown table name \"{}\".", name)
            }
            Error::UnknownColumn {
                column,
                table: Some(table),
            } => {
                write!(f, "ERROR: Unknown column \"{}\" in table \"{}\".", column, table)
            }
            Error::UnknownColumn { column, table: None } => {
                write!(f, "ERROR: Unknown column \"{}\".", column)
            }
            Error::AmbiguousColumn {
                column,
                first,
                second,
            } => write!(
                f,
                "ERROR: Column reference \"{}\" is ambiguous; present in multiple tables: \"{}\", \"{}\".",
                column, first, second
            ),
            Error::IncompatibleTypes { op, left, right } => {
                write!(f, "ERROR: Incompatible types to \"{}\": {} and {}.", op, left, right)
            }
            Error::ColumnNotFound { label } => {
                write!(f, "ERROR: Column \"{}\" not found in relation.", label)
            }
        }
    }
}

impl Error {
    /// Creates an unknown source error.
    pub fn unknown_source(source: impl Into<String>) -> Self {
        Error::UnknownSource {
            source: source.into(),
        }
    }

    /// Creates an invalid table error.
    pub fn invalid_table(source: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidTable {
            source: source.into(),
            message: message.into(),
        }
    }

    /// Creates an unknown table error.
    pub fn unknown_table(name: impl Into<String>) -> Self {
        Error::UnknownTable { name: name.into() }
    }

    /// Creates an unknown column error for a qualified reference.
    pub fn unknown_column_in(column: impl Into<String>, table: impl Into<String>) -> Self {
        Error::UnknownColumn {
            column: column.into(),
            table: Some(table.into()),
        }
    }

    /// Creates an unknown column error for an unqualified reference.
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Error::UnknownColumn {
            column: column.into(),
            table: None,
        }
    }

    /// Creates an ambiguous column error.
    pub fn ambiguous_column(
        column: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Error::AmbiguousColumn {
            column: column.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Creates an incompatible types error.
    pub fn incompatible_types(op: impl Into<String>, left: DataType, right: DataType) -> Self {
        Error::IncompatibleTypes {
            op: op.into(),
            left,
            right,
        }
    }

    /// Creates a column not found error.
    pub fn column_not_found(label: impl Into<String>) -> Self {
        Error::ColumnNotFound {
            label: label.into(),
        }
    }
}
