use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Kind of consistency violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    DuplicateId,
    NonDenseId,
    FkViolation,
    DuplicateEmail,
    PriceOutOfRange,
    PriceSnapshotMismatch,
    QuantityOutOfRange,
    OrderWithoutItems,
    TotalMismatch,
    PaymentDateOutOfRange,
}

impl ViolationCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationCode::DuplicateId => "duplicate_id",
            ViolationCode::NonDenseId => "non_dense_id",
            ViolationCode::FkViolation => "fk_violation",
            ViolationCode::DuplicateEmail => "duplicate_email",
            ViolationCode::PriceOutOfRange => "price_out_of_range",
            ViolationCode::PriceSnapshotMismatch => "price_snapshot_mismatch",
            ViolationCode::QuantityOutOfRange => "quantity_out_of_range",
            ViolationCode::OrderWithoutItems => "order_without_items",
            ViolationCode::TotalMismatch => "total_mismatch",
            ViolationCode::PaymentDateOutOfRange => "payment_date_out_of_range",
        }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub code: ViolationCode,
    pub table: &'static str,
    pub row_id: u64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCount {
    pub table: &'static str,
    pub rows: u64,
}

/// Outcome of evaluating a dataset directory.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub dataset_dir: PathBuf,
    pub tables: Vec<TableCount>,
    pub violations: Vec<Violation>,
}

impl EvaluationResult {
    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations_by_code(&self) -> BTreeMap<ViolationCode, u64> {
        let mut counts = BTreeMap::new();
        for violation in &self.violations {
            *counts.entry(violation.code).or_insert(0) += 1;
        }
        counts
    }
}
