use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use ecomsynth_eval::{EvalError, ViolationCode, evaluate_dataset};
use ecomsynth_generate::{GenerateOptions, GenerationEngine};

fn generated_dir(label: &str, rows: u64) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("ecomsynth_eval_{label}_{}", uuid::Uuid::new_v4()));
    GenerationEngine::new(GenerateOptions {
        out_dir: dir.clone(),
        rows,
        seed: 7,
        as_of: NaiveDate::from_ymd_opt(2025, 6, 30),
        report_path: None,
    })
    .run()
    .expect("generate dataset");
    dir
}

fn rewrite(dir: &Path, file: &str, edit: impl FnOnce(Vec<String>) -> Vec<String>) {
    let path = dir.join(file);
    let content = fs::read_to_string(&path).expect("read csv");
    let lines = edit(content.lines().map(str::to_string).collect());
    fs::write(&path, lines.join("\n") + "\n").expect("write csv");
}

#[test]
fn generated_dataset_is_consistent() {
    let dir = generated_dir("clean", 200);
    let result = evaluate_dataset(&dir).expect("evaluate");

    assert!(result.is_consistent(), "{:?}", result.violations);
    let counts: Vec<_> = result
        .tables
        .iter()
        .map(|count| (count.table, count.rows))
        .collect();
    assert_eq!(counts[0], ("customers", 200));
    assert_eq!(counts[1], ("products", 200));
    assert_eq!(counts[2], ("orders", 200));
    assert_eq!(counts[4], ("payments", 200));
    assert!(counts[3].1 >= 200 && counts[3].1 <= 1000);
}

#[test]
fn tampered_total_is_reported() {
    let dir = generated_dir("total", 5);
    rewrite(&dir, "orders.csv", |mut lines| {
        let mut fields: Vec<String> = lines[1].split(',').map(str::to_string).collect();
        fields[3] = "0.01".to_string();
        lines[1] = fields.join(",");
        lines
    });

    let result = evaluate_dataset(&dir).expect("evaluate");
    let by_code = result.violations_by_code();
    assert_eq!(by_code.get(&ViolationCode::TotalMismatch), Some(&1));
    assert_eq!(result.violations[0].table, "orders");
    assert_eq!(result.violations[0].row_id, 1);
}

#[test]
fn dangling_payment_is_reported() {
    let dir = generated_dir("fk", 5);
    rewrite(&dir, "payments.csv", |mut lines| {
        let mut fields: Vec<String> = lines[2].split(',').map(str::to_string).collect();
        fields[1] = "99".to_string();
        lines[2] = fields.join(",");
        lines
    });

    let result = evaluate_dataset(&dir).expect("evaluate");
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].code, ViolationCode::FkViolation);
    assert_eq!(result.violations[0].table, "payments");
    assert_eq!(result.violations[0].row_id, 2);
}

#[test]
fn malformed_money_is_invalid_dataset() {
    let dir = generated_dir("money", 3);
    rewrite(&dir, "products.csv", |mut lines| {
        let mut fields: Vec<String> = lines[1].rsplitn(2, ',').map(str::to_string).collect();
        fields[0] = "12.5".to_string();
        lines[1] = format!("{},{}", fields[1], fields[0]);
        lines
    });

    let err = evaluate_dataset(&dir).expect_err("bad price");
    assert!(matches!(err, EvalError::InvalidDataset(message) if message.starts_with("products.csv")));
}

#[test]
fn wrong_header_and_missing_file_fail() {
    let dir = generated_dir("header", 3);
    rewrite(&dir, "customers.csv", |mut lines| {
        lines[0] = "customer_id,name,email,location,signup_date".to_string();
        lines
    });
    let err = evaluate_dataset(&dir).expect_err("bad header");
    assert!(matches!(err, EvalError::InvalidDataset(_)));

    let empty = std::env::temp_dir().join(format!("ecomsynth_eval_empty_{}", uuid::Uuid::new_v4()));
    let err = evaluate_dataset(&empty).expect_err("missing files");
    assert!(matches!(err, EvalError::Open { .. }));
}
