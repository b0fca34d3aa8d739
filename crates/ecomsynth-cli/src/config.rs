use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use ecomsynth_generate::GenerateOptions;

use crate::CliError;

/// Generation settings read from a TOML file.
///
/// ```toml
/// out_dir = "data"
/// seed = 42
/// rows = 200
/// as_of = "2025-06-30"
/// report = "data/report.json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub out_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub rows: Option<u64>,
    pub as_of: Option<NaiveDate>,
    pub report: Option<PathBuf>,
}

/// Values given on the command line. They win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub out_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub rows: Option<u64>,
    pub as_of: Option<NaiveDate>,
    pub report: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<FileConfig, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

pub fn resolve_options(file: FileConfig, overrides: Overrides) -> GenerateOptions {
    let defaults = GenerateOptions::default();
    GenerateOptions {
        out_dir: overrides
            .out_dir
            .or(file.out_dir)
            .unwrap_or(defaults.out_dir),
        seed: overrides.seed.or(file.seed).unwrap_or(defaults.seed),
        rows: overrides.rows.or(file.rows).unwrap_or(defaults.rows),
        as_of: overrides.as_of.or(file.as_of),
        report_path: overrides.report.or(file.report),
    }
}
