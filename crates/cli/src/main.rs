//! sqleval command-line entry point.

use clap::{ArgAction, Parser, ValueEnum};
use sqleval_cli::{run, OutputFormat, RunConfig};
use sqleval_query::{AmbiguousPushdown, OptimizerConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Evaluate a structured SELECT query against JSON tables
#[derive(Parser)]
#[command(name = "sqleval")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Folder holding `<source>.table.json` files
    table_folder: PathBuf,

    /// Query description (JSON)
    sql_json_file: PathBuf,

    /// File the result or error message is written to
    output_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Reference)]
    format: OutputFormat,

    /// Skip column pruning and predicate pushdown
    #[arg(long)]
    no_optimize: bool,

    /// Tables an unqualified pushed-down column filters
    #[arg(long, value_enum, default_value_t = PushdownArg::AllMatches)]
    pushdown: PushdownArg,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PushdownArg {
    /// Every table declaring the column
    AllMatches,
    /// The first declaring table only
    FirstMatch,
}

impl From<PushdownArg> for AmbiguousPushdown {
    fn from(arg: PushdownArg) -> Self {
        match arg {
            PushdownArg::AllMatches => AmbiguousPushdown::AllMatches,
            PushdownArg::FirstMatch => AmbiguousPushdown::FirstMatch,
        }
    }
}

impl Cli {
    fn optimizer_config(&self) -> OptimizerConfig {
        if self.no_optimize {
            return OptimizerConfig::disabled();
        }
        OptimizerConfig {
            ambiguous_pushdown: self.pushdown.into(),
            ..OptimizerConfig::default()
        }
    }

    fn into_run_config(self) -> RunConfig {
        let optimizer = self.optimizer_config();
        RunConfig {
            table_folder: self.table_folder,
            query_file: self.sql_json_file,
            output_file: self.output_file,
            format: self.format,
            optimizer,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run(&cli.into_run_config())?;
    Ok(())
}
