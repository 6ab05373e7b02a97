//! Rendering of query responses for the output file.

use sqleval_core::Value;
use sqleval_query::{QueryResponse, ResultSet};
use std::fmt::Write;

/// Output file format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Bracketed listing, one line per row; the bare message on failure.
    #[default]
    Reference,
    /// The response as a single JSON object.
    Json,
}

/// Renders a response in the given format. The text always ends in a newline.
pub fn render(response: &QueryResponse, format: OutputFormat) -> anyhow::Result<String> {
    let mut out = match format {
        OutputFormat::Reference => render_reference(response),
        OutputFormat::Json => serde_json::to_string(response)?,
    };
    out.push('\n');
    Ok(out)
}

fn render_reference(response: &QueryResponse) -> String {
    match response {
        QueryResponse::Success(result) => render_result(result),
        QueryResponse::Failure { message } => message.clone(),
    }
}

/// ```text
/// [
///     [["n", "str"]],
///     ["b"]
/// ]
/// ```
fn render_result(result: &ResultSet) -> String {
    let mut lines = Vec::with_capacity(result.len() + 1);

    let header: Vec<String> = result
        .columns()
        .iter()
        .map(|c| format!("[{}, {}]", quote(&c.name), quote(c.data_type.name())))
        .collect();
    lines.push(format!("[{}]", header.join(", ")));

    for row in result.rows() {
        let cells: Vec<String> = row.iter().map(literal).collect();
        lines.push(format!("[{}]", cells.join(", ")));
    }

    let mut out = String::from("[\n");
    let last = lines.len() - 1;
    for (i, line) in lines.iter().enumerate() {
        let sep = if i == last { "" } else { "," };
        let _ = writeln!(out, "    {}{}", line, sep);
    }
    out.push(']');
    out
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s)
}

fn literal(value: &Value) -> String {
    match value {
        Value::Int(v) => v.to_string(),
        Value::Float(v) => format!("{:?}", v),
        Value::Str(v) => quote(v),
        Value::Bool(true) => "True".into(),
        Value::Bool(false) => "False".into(),
    }
}
