use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_ROWS: u64 = 200;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where the CSV files are written.
    pub out_dir: PathBuf,
    /// Seed for the run's random source.
    pub seed: u64,
    /// Rows for customers, products, orders and payments.
    pub rows: u64,
    /// Date treated as "today". Defaults to the local date at run time.
    pub as_of: Option<NaiveDate>,
    /// Optional path for a JSON copy of the generation report.
    pub report_path: Option<PathBuf>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("data"),
            seed: DEFAULT_SEED,
            rows: DEFAULT_ROWS,
            as_of: None,
            report_path: None,
        }
    }
}

impl GenerateOptions {
    pub fn as_of_date(&self) -> NaiveDate {
        self.as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// Summary of a written table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub file: String,
    pub rows: u64,
    pub bytes_written: u64,
    pub sha256: String,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub rows: u64,
    pub as_of: NaiveDate,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64, rows: u64, as_of: NaiveDate) -> Self {
        Self {
            run_id,
            seed,
            rows,
            as_of,
            tables: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, table: TableReport) {
        self.bytes_written = self.bytes_written.saturating_add(table.bytes_written);
        self.tables.push(table);
    }

    pub fn table(&self, name: &str) -> Option<&TableReport> {
        self.tables.iter().find(|table| table.table == name)
    }
}
