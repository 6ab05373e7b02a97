//! Table loading from `<folder>/<source>.table.json` files.
//!
//! A table file is a JSON array. Its first element is the header, a list of
//! `[name, type]` pairs; every other element is a row.

use serde_json::Value as Json;
use sqleval_core::schema::TableData;
use sqleval_core::{DataType, Error, Result, Value};
use sqleval_query::catalog::TableLoader;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File extension appended to a source name.
pub const TABLE_EXTENSION: &str = ".table.json";

/// Loads tables from JSON files in one folder.
#[derive(Clone, Debug)]
pub struct JsonTableLoader {
    folder: PathBuf,
}

impl JsonTableLoader {
    /// Creates a loader reading from `folder`.
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    /// Returns the folder tables are read from.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Returns the file a source name maps to.
    pub fn path_for(&self, source: &str) -> PathBuf {
        self.folder.join(format!("{}{}", source, TABLE_EXTENSION))
    }
}

impl TableLoader for JsonTableLoader {
    fn load(&self, source: &str) -> Result<TableData> {
        let path = self.path_for(source);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::unknown_source(source));
            }
            Err(err) => return Err(Error::invalid_table(source, err.to_string())),
        };
        tracing::debug!(source, path = %path.display(), bytes = text.len(), "read table file");
        parse_table(source, &text)
    }
}

/// Parses the JSON text of a table file.
pub fn parse_table(source: &str, text: &str) -> Result<TableData> {
    let invalid = |message: String| Error::invalid_table(source, message);

    let elements: Vec<Json> =
        serde_json::from_str(text).map_err(|e| invalid(format!("malformed JSON: {}", e)))?;
    let mut elements = elements.into_iter();
    let header = elements
        .next()
        .ok_or_else(|| invalid("missing header".into()))?;
    let header: Vec<(String, String)> = serde_json::from_value(header)
        .map_err(|e| invalid(format!("malformed header: {}", e)))?;

    let mut columns = Vec::with_capacity(header.len());
    for (name, type_name) in header {
        let data_type: DataType = type_name
            .parse()
            .map_err(|_| invalid(format!("unknown type \"{}\" for column \"{}\"", type_name, name)))?;
        columns.push((name, data_type));
    }

    let mut data = TableData::new(source, columns);
    for (index, element) in elements.enumerate() {
        let row: Vec<Value> = serde_json::from_value(element)
            .map_err(|e| invalid(format!("malformed row {}: {}", index, e)))?;
        data.push_row(row);
    }
    Ok(data)
}
