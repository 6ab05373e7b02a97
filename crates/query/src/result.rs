//! Query results and the response handed to result sinks.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Serialize, Serializer};
use sqleval_core::{DataType, Error, Result, Value};

/// A result column: output name and type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultColumn {
    pub name: String,
    pub data_type: DataType,
}

impl ResultColumn {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

impl Serialize for ResultColumn {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.name)?;
        tuple.serialize_element(self.data_type.name())?;
        tuple.end()
    }
}

/// The evaluated result of a query.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSet {
    columns: Vec<ResultColumn>,
    rows: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Creates a result set.
    ///
    /// Each column's type is taken from the value in the first row. With no
    /// rows the given (declared) types are kept.
    pub fn new(mut columns: Vec<ResultColumn>, rows: Vec<Vec<Value>>) -> Self {
        if let Some(first) = rows.first() {
            for (column, value) in columns.iter_mut().zip(first) {
                column.data_type = value.data_type();
            }
        }
        Self { columns, rows }
    }

    /// Returns the columns in projection order.
    pub fn columns(&self) -> &[ResultColumn] {
        &self.columns
    }

    /// Returns the output column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consumes the result, returning columns and rows.
    pub fn into_parts(self) -> (Vec<ResultColumn>, Vec<Vec<Value>>) {
        (self.columns, self.rows)
    }
}

/// Outcome of a query as reported to a result sink.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryResponse {
    /// The query ran.
    Success(ResultSet),
    /// The query failed; `message` is the error's display text.
    Failure { message: String },
}

impl QueryResponse {
    /// Creates a failure response from an error.
    pub fn failure(error: &Error) -> Self {
        QueryResponse::Failure {
            message: error.to_string(),
        }
    }

    /// Returns whether the query succeeded.
    pub fn success(&self) -> bool {
        matches!(self, QueryResponse::Success(_))
    }

    /// Returns the result set, if any.
    pub fn result(&self) -> Option<&ResultSet> {
        match self {
            QueryResponse::Success(result) => Some(result),
            QueryResponse::Failure { .. } => None,
        }
    }

    /// Returns the failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            QueryResponse::Success(_) => None,
            QueryResponse::Failure { message } => Some(message),
        }
    }
}

impl From<Result<ResultSet>> for QueryResponse {
    fn from(result: Result<ResultSet>) -> Self {
        match result {
            Ok(result) => QueryResponse::Success(result),
            Err(error) => QueryResponse::failure(&error),
        }
    }
}

impl Serialize for QueryResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match self {
            QueryResponse::Success(result) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("columns", &result.columns)?;
                map.serialize_entry("rows", &result.rows)?;
                map.end()
            }
            QueryResponse::Failure { message } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("message", message)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_type_from_first_row() {
        let result = ResultSet::new(
            vec![ResultColumn::new("n", DataType::Str)],
            vec![vec![Value::from("b")]],
        );
        assert_eq!(result.columns()[0].data_type, DataType::Str);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_empty_keeps_declared_type() {
        let result = ResultSet::new(vec![ResultColumn::new("x", DataType::Float)], Vec::new());
        assert!(result.is_empty());
        assert_eq!(result.columns()[0].data_type, DataType::Float);
    }

    #[test]
    fn test_response_from_result() {
        let ok: Result<ResultSet> = Ok(ResultSet::new(Vec::new(), Vec::new()));
        assert!(QueryResponse::from(ok).success());

        let err: Result<ResultSet> = Err(Error::unknown_table("q"));
        let response = QueryResponse::from(err);
        assert!(!response.success());
        assert_eq!(response.message(), Some("ERROR: Unknown table name \"q\"."));
        assert!(response.result().is_none());
    }

    #[test]
    fn test_serialize_success() {
        let response = QueryResponse::Success(ResultSet::new(
            vec![
                ResultColumn::new("n", DataType::Str),
                ResultColumn::new("k", DataType::Int),
            ],
            vec![vec![Value::from("b"), Value::Int(2)]],
        ));
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"success":true,"columns":[["n","str"],["k","int"]],"rows":[["b",2]]}"#
        );
    }

    #[test]
    fn test_serialize_failure() {
        let response = QueryResponse::failure(&Error::unknown_column("age"));
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"success":false,"message":"ERROR: Unknown column \"age\"."}"#
        );
    }
}
