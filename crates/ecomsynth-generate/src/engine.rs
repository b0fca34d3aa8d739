use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use ecomsynth_core::{TableSpec, tables};

use crate::errors::GenerationError;
use crate::generators::generate_dataset;
use crate::model::{GenerateOptions, GenerationReport, TableReport};
use crate::output::write_csv;
use crate::serialize::{
    CsvRow, serialize_customers, serialize_order_items, serialize_orders, serialize_payments,
    serialize_products,
};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating and writing a dataset.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let as_of = self.options.as_of_date();
        let out_dir = self.options.out_dir.clone();

        info!(
            run_id = %run_id,
            seed = self.options.seed,
            rows = self.options.rows,
            as_of = %as_of,
            out_dir = %out_dir.display(),
            "generation started"
        );

        std::fs::create_dir_all(&out_dir)?;

        // Every table is generated before the first file is touched.
        let dataset = generate_dataset(self.options.seed, self.options.rows, as_of)?;
        let outputs: [(TableSpec, Vec<CsvRow>); 5] = [
            (tables::CUSTOMERS, serialize_customers(&dataset.customers)),
            (tables::PRODUCTS, serialize_products(&dataset.products)),
            (tables::ORDERS, serialize_orders(&dataset.orders)),
            (tables::ORDER_ITEMS, serialize_order_items(&dataset.order_items)),
            (tables::PAYMENTS, serialize_payments(&dataset.payments)),
        ];

        let mut report =
            GenerationReport::new(run_id.clone(), self.options.seed, self.options.rows, as_of);

        for (spec, rows) in outputs {
            let path = out_dir.join(spec.file_name);
            let written = write_csv(&path, spec.columns, &rows)?;

            info!(
                table = spec.name,
                rows = rows.len(),
                bytes_written = written.bytes_written,
                path = %path.display(),
                "table written"
            );

            report.record_table(TableReport {
                table: spec.name.to_string(),
                file: spec.file_name.to_string(),
                rows: rows.len() as u64,
                bytes_written: written.bytes_written,
                sha256: written.sha256,
            });
        }

        report.duration_ms = start.elapsed().as_millis() as u64;

        if let Some(report_path) = &self.options.report_path {
            if let Some(parent) = report_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(report_path, serde_json::to_vec_pretty(&report)?)?;
            info!(path = %report_path.display(), "report written");
        }

        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { out_dir, report })
    }
}
