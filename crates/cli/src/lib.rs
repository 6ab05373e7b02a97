//! sqleval CLI - runs one query description against a folder of JSON tables.
//!
//! ```text
//! sqleval <table-folder> <sql-json-file> <output-file>
//! ```
//!
//! A query that fails validation is still a successful run: its error
//! message is written to the output file. Only I/O and usage problems make
//! the process fail.

pub mod loader;
pub mod output;

use anyhow::Context;
use sqleval_query::ast::SelectStatement;
use sqleval_query::{execute_with, OptimizerConfig, QueryResponse};
use std::fs;
use std::path::PathBuf;

pub use loader::JsonTableLoader;
pub use output::OutputFormat;

/// Everything one run needs.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub table_folder: PathBuf,
    pub query_file: PathBuf,
    pub output_file: PathBuf,
    pub format: OutputFormat,
    pub optimizer: OptimizerConfig,
}

/// Reads the query, evaluates it and writes the output file.
pub fn run(config: &RunConfig) -> anyhow::Result<QueryResponse> {
    let text = fs::read_to_string(&config.query_file)
        .with_context(|| format!("failed to read query file {}", config.query_file.display()))?;
    let statement: SelectStatement = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse query file {}", config.query_file.display()))?;
    tracing::info!(
        select = statement.select.len(),
        from = statement.from.len(),
        filters = statement.filters.len(),
        "parsed query"
    );

    let loader = JsonTableLoader::new(&config.table_folder);
    let response = execute_with(statement, &loader, &config.optimizer);
    match &response {
        QueryResponse::Success(result) => tracing::info!(rows = result.len(), "query succeeded"),
        QueryResponse::Failure { message } => tracing::info!(%message, "query failed"),
    }

    let rendered = output::render(&response, config.format)?;
    fs::write(&config.output_file, rendered)
        .with_context(|| format!("failed to write output file {}", config.output_file.display()))?;
    Ok(response)
}
