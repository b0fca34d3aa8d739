mod config;
mod logging;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use ecomsynth_eval::{EvalError, evaluate_dataset};
use ecomsynth_generate::{GenerationEngine, GenerationError};
use thiserror::Error;

use config::{FileConfig, Overrides, load_config, resolve_options};
use logging::{LogFormat, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvalError),
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset has {0} consistency violation(s)")]
    Violations(usize),
}

#[derive(Parser, Debug)]
#[command(name = "ecomsynth", version, about = "Synthetic e-commerce dataset generator")]
struct Cli {
    /// Log output format.
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the five CSV tables.
    Generate(GenerateArgs),
    /// Check a dataset directory for consistency violations.
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// TOML file with generation settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output directory (default: data).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Random seed (default: 42).
    #[arg(long)]
    seed: Option<u64>,
    /// Rows for customers, products, orders and payments (default: 200).
    #[arg(long)]
    rows: Option<u64>,
    /// Date used as "today" (default: the local date).
    #[arg(long, value_name = "YYYY-MM-DD")]
    as_of: Option<NaiveDate>,
    /// Write a JSON generation report to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct VerifyArgs {
    /// Dataset directory.
    #[arg(long, default_value = "data")]
    dir: PathBuf,
    /// Print the full result as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format)?;

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Verify(args) => run_verify(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        config,
        out,
        seed,
        rows,
        as_of,
        report,
    } = args;

    let file = match &config {
        Some(path) => load_config(path)?,
        None => FileConfig::default(),
    };
    let options = resolve_options(
        file,
        Overrides {
            out_dir: out,
            seed,
            rows,
            as_of,
            report,
        },
    );

    let result = GenerationEngine::new(options).run()?;
    println!("Generated synthetic datasets in {}", result.out_dir.display());
    Ok(())
}

fn run_verify(args: VerifyArgs) -> Result<(), CliError> {
    let result = evaluate_dataset(&args.dir)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for table in &result.tables {
            println!("{}: {} rows", table.table, table.rows);
        }
        for violation in &result.violations {
            println!(
                "[{}] {} {}: {}",
                violation.code, violation.table, violation.row_id, violation.message
            );
        }
    }

    tracing::info!(
        dir = %result.dataset_dir.display(),
        violations = result.violations.len(),
        "verification finished"
    );

    if result.is_consistent() {
        Ok(())
    } else {
        Err(CliError::Violations(result.violations.len()))
    }
}
