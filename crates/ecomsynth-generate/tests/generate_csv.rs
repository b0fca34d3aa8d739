use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use ecomsynth_core::tables::ALL_TABLES;
use ecomsynth_generate::{GenerateOptions, GenerationEngine, GenerationError};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "ecomsynth_generate_{label}_{}",
        uuid::Uuid::new_v4()
    ));
    dir
}

fn options(out_dir: PathBuf, rows: u64) -> GenerateOptions {
    GenerateOptions {
        out_dir,
        rows,
        as_of: NaiveDate::from_ymd_opt(2025, 6, 30),
        ..GenerateOptions::default()
    }
}

fn read_rows(dir: &Path, file: &str) -> Vec<HashMap<String, String>> {
    let mut reader = csv::Reader::from_path(dir.join(file)).expect("open csv");
    reader
        .deserialize::<HashMap<String, String>>()
        .map(|row| row.expect("parse row"))
        .collect()
}

fn cents(raw: &str) -> i64 {
    let (whole, fraction) = raw.split_once('.').expect("two decimals");
    assert_eq!(fraction.len(), 2, "{raw}");
    whole.parse::<i64>().expect("whole") * 100 + fraction.parse::<i64>().expect("fraction")
}

#[test]
fn generate_is_deterministic() {
    let dir_a = temp_out_dir("run_a");
    let dir_b = temp_out_dir("run_b");

    let result_a = GenerationEngine::new(options(dir_a.clone(), 200))
        .run()
        .expect("run generation A");
    let result_b = GenerationEngine::new(options(dir_b.clone(), 200))
        .run()
        .expect("run generation B");

    for table in ALL_TABLES {
        let a = fs::read(dir_a.join(table.file_name)).expect("read A");
        let b = fs::read(dir_b.join(table.file_name)).expect("read B");
        assert_eq!(a, b, "{} should be deterministic", table.file_name);

        let report_a = result_a.report.table(table.name).expect("report A");
        let report_b = result_b.report.table(table.name).expect("report B");
        assert_eq!(report_a.sha256, report_b.sha256);
    }
    assert_ne!(result_a.report.run_id, result_b.report.run_id);
}

#[test]
fn writes_headers_and_row_counts() {
    let dir = temp_out_dir("headers");
    let result = GenerationEngine::new(options(dir.clone(), 200))
        .run()
        .expect("run generation");

    for table in ALL_TABLES {
        let contents = fs::read_to_string(dir.join(table.file_name)).expect("read csv");
        let header = contents.lines().next().expect("header line");
        assert_eq!(header, table.columns.join(","));
    }

    for name in ["customers", "products", "orders", "payments"] {
        assert_eq!(result.report.table(name).expect("table report").rows, 200);
    }
    let items = result.report.table("order_items").expect("items report").rows;
    assert!((200..=1000).contains(&items), "items {items}");
}

#[test]
fn output_keeps_referential_integrity_and_totals() {
    let dir = temp_out_dir("integrity");
    GenerationEngine::new(options(dir.clone(), 120))
        .run()
        .expect("run generation");

    let customers = read_rows(&dir, "customers.csv");
    let products = read_rows(&dir, "products.csv");
    let orders = read_rows(&dir, "orders.csv");
    let items = read_rows(&dir, "order_items.csv");
    let payments = read_rows(&dir, "payments.csv");

    let customer_ids: HashSet<&str> = customers.iter().map(|r| r["customer_id"].as_str()).collect();
    let product_ids: HashSet<&str> = products.iter().map(|r| r["product_id"].as_str()).collect();
    let order_ids: HashSet<&str> = orders.iter().map(|r| r["order_id"].as_str()).collect();

    let emails: HashSet<&str> = customers.iter().map(|r| r["email"].as_str()).collect();
    assert_eq!(emails.len(), customers.len());

    for product in &products {
        let price = cents(&product["price"]);
        assert!((500..=50000).contains(&price), "price {}", product["price"]);
    }

    let mut totals: HashMap<&str, i64> = HashMap::new();
    for item in &items {
        assert!(order_ids.contains(item["order_id"].as_str()));
        assert!(product_ids.contains(item["product_id"].as_str()));
        let quantity: i64 = item["quantity"].parse().expect("quantity");
        *totals.entry(item["order_id"].as_str()).or_insert(0) +=
            cents(&item["item_price"]) * quantity;
    }

    let mut order_dates = HashMap::new();
    for order in &orders {
        assert!(customer_ids.contains(order["customer_id"].as_str()));
        let expected = totals.get(order["order_id"].as_str()).copied().unwrap_or(0);
        assert_eq!(cents(&order["total_amount"]), expected);
        assert!(expected > 0);
        let date = NaiveDate::parse_from_str(&order["order_date"], "%Y-%m-%d").expect("date");
        order_dates.insert(order["order_id"].as_str(), date);
    }

    for payment in &payments {
        let order_date = order_dates[payment["order_id"].as_str()];
        let paid = NaiveDate::parse_from_str(&payment["payment_date"], "%Y-%m-%d").expect("date");
        let lag = (paid - order_date).num_days();
        assert!((0..=5).contains(&lag), "lag {lag}");
    }
}

#[test]
fn three_rows_only_reference_three_customers() {
    let dir = temp_out_dir("three");
    GenerationEngine::new(options(dir.clone(), 3))
        .run()
        .expect("run generation");

    for order in read_rows(&dir, "orders.csv") {
        assert!(["1", "2", "3"].contains(&order["customer_id"].as_str()));
    }
}

#[test]
fn overwrites_previous_output_and_writes_report() {
    let dir = temp_out_dir("overwrite");
    fs::create_dir_all(&dir).expect("create dir");
    fs::write(dir.join("customers.csv"), "stale").expect("seed stale file");

    let report_path = dir.join("reports").join("generation_report.json");
    let mut opts = options(dir.clone(), 5);
    opts.report_path = Some(report_path.clone());
    GenerationEngine::new(opts).run().expect("run generation");

    let customers = fs::read_to_string(dir.join("customers.csv")).expect("read customers");
    assert!(customers.starts_with("customer_id,"));
    assert_eq!(customers.lines().count(), 6);

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");
    assert_eq!(report["seed"], 42);
    assert_eq!(report["as_of"], "2025-06-30");
    assert_eq!(report["tables"].as_array().map(Vec::len), Some(5));
}

#[test]
fn unwritable_output_dir_is_fatal() {
    let dir = temp_out_dir("blocked");
    fs::create_dir_all(dir.parent().expect("parent")).ok();
    fs::write(&dir, "not a directory").expect("create blocking file");

    let err = GenerationEngine::new(options(dir.join("data"), 5))
        .run()
        .expect_err("generation should fail");
    assert!(matches!(err, GenerationError::Io(_)));
}
