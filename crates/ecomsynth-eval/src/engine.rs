use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;

use ecomsynth_core::tables::{self, TableSpec};
use ecomsynth_core::{Dataset, Money, Order, Product};

use crate::errors::EvalError;
use crate::model::{EvaluationResult, TableCount, Violation, ViolationCode};

const PRICE_FLOOR: Money = Money::from_cents(500);
const PRICE_CEILING: Money = Money::from_cents(50_000);
const MAX_QUANTITY: u32 = 5;
const MAX_PAYMENT_LAG_DAYS: i64 = 5;

/// Load the five tables from `dir` and check them.
pub fn evaluate_dataset(dir: &Path) -> Result<EvaluationResult, EvalError> {
    let dataset = load_dataset(dir)?;
    let tables = vec![
        count(&tables::CUSTOMERS, dataset.customers.len()),
        count(&tables::PRODUCTS, dataset.products.len()),
        count(&tables::ORDERS, dataset.orders.len()),
        count(&tables::ORDER_ITEMS, dataset.order_items.len()),
        count(&tables::PAYMENTS, dataset.payments.len()),
    ];
    let violations = check_dataset(&dataset);

    Ok(EvaluationResult {
        dataset_dir: dir.to_path_buf(),
        tables,
        violations,
    })
}

/// Read every table of a dataset directory into typed records.
///
/// Headers must match the fixed column order exactly.
pub fn load_dataset(dir: &Path) -> Result<Dataset, EvalError> {
    Ok(Dataset {
        customers: read_table(dir, &tables::CUSTOMERS)?,
        products: read_table(dir, &tables::PRODUCTS)?,
        orders: read_table(dir, &tables::ORDERS)?,
        order_items: read_table(dir, &tables::ORDER_ITEMS)?,
        payments: read_table(dir, &tables::PAYMENTS)?,
    })
}

/// Run every consistency check and collect all violations.
pub fn check_dataset(dataset: &Dataset) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_ids(
        &tables::CUSTOMERS,
        dataset.customers.iter().map(|c| c.id),
        &mut violations,
    );
    check_ids(
        &tables::PRODUCTS,
        dataset.products.iter().map(|p| p.id),
        &mut violations,
    );
    check_ids(
        &tables::ORDERS,
        dataset.orders.iter().map(|o| o.id),
        &mut violations,
    );
    check_ids(
        &tables::ORDER_ITEMS,
        dataset.order_items.iter().map(|i| i.id),
        &mut violations,
    );
    check_ids(
        &tables::PAYMENTS,
        dataset.payments.iter().map(|p| p.id),
        &mut violations,
    );

    check_customers(dataset, &mut violations);
    check_products(dataset, &mut violations);
    check_orders(dataset, &mut violations);
    check_payments(dataset, &mut violations);

    violations
}

fn read_table<T: DeserializeOwned>(dir: &Path, spec: &TableSpec) -> Result<Vec<T>, EvalError> {
    let path = dir.join(spec.file_name);
    let file = File::open(&path).map_err(|source| EvalError::Open {
        path: path.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?;
    if !headers.iter().eq(spec.columns.iter().copied()) {
        return Err(EvalError::InvalidDataset(format!(
            "{}: expected header '{}', found '{}'",
            spec.file_name,
            spec.columns.join(","),
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    reader
        .deserialize()
        .map(|row| {
            row.map_err(|err| EvalError::InvalidDataset(format!("{}: {err}", spec.file_name)))
        })
        .collect()
}

fn count(spec: &TableSpec, rows: usize) -> TableCount {
    TableCount {
        table: spec.name,
        rows: rows as u64,
    }
}

fn check_ids(
    spec: &TableSpec,
    ids: impl Iterator<Item = u64>,
    violations: &mut Vec<Violation>,
) {
    let mut seen = HashSet::new();
    let mut dense = true;
    for (index, id) in ids.enumerate() {
        let expected = index as u64 + 1;
        if !seen.insert(id) {
            violations.push(violation(
                ViolationCode::DuplicateId,
                spec,
                id,
                format!("id {id} appears more than once"),
            ));
        } else if dense && id != expected {
            // Later rows are shifted too; one report per table is enough.
            dense = false;
            violations.push(violation(
                ViolationCode::NonDenseId,
                spec,
                id,
                format!("expected id {expected} at row {expected}, found {id}"),
            ));
        }
    }
}

fn check_customers(dataset: &Dataset, violations: &mut Vec<Violation>) {
    let mut emails: HashMap<&str, u64> = HashMap::new();
    for customer in &dataset.customers {
        if let Some(first) = emails.insert(customer.email.as_str(), customer.id) {
            violations.push(violation(
                ViolationCode::DuplicateEmail,
                &tables::CUSTOMERS,
                customer.id,
                format!("email '{}' already used by customer {first}", customer.email),
            ));
        }
    }
}

fn check_products(dataset: &Dataset, violations: &mut Vec<Violation>) {
    for product in &dataset.products {
        if product.price < PRICE_FLOOR || product.price > PRICE_CEILING {
            violations.push(violation(
                ViolationCode::PriceOutOfRange,
                &tables::PRODUCTS,
                product.id,
                format!(
                    "price {} outside [{PRICE_FLOOR}, {PRICE_CEILING}]",
                    product.price
                ),
            ));
        }
    }
}

fn check_orders(dataset: &Dataset, violations: &mut Vec<Violation>) {
    let customer_ids: HashSet<u64> = dataset.customers.iter().map(|c| c.id).collect();
    let order_ids: HashSet<u64> = dataset.orders.iter().map(|o| o.id).collect();
    let products: HashMap<u64, &Product> = dataset.products.iter().map(|p| (p.id, p)).collect();

    for order in &dataset.orders {
        if !customer_ids.contains(&order.customer_id) {
            violations.push(violation(
                ViolationCode::FkViolation,
                &tables::ORDERS,
                order.id,
                format!("customer_id {} not found in customers", order.customer_id),
            ));
        }
    }

    let mut per_order: HashMap<u64, Money> = HashMap::new();
    for item in &dataset.order_items {
        if !order_ids.contains(&item.order_id) {
            violations.push(violation(
                ViolationCode::FkViolation,
                &tables::ORDER_ITEMS,
                item.id,
                format!("order_id {} not found in orders", item.order_id),
            ));
        }

        match products.get(&item.product_id) {
            None => violations.push(violation(
                ViolationCode::FkViolation,
                &tables::ORDER_ITEMS,
                item.id,
                format!("product_id {} not found in products", item.product_id),
            )),
            Some(product) if product.price != item.item_price => violations.push(violation(
                ViolationCode::PriceSnapshotMismatch,
                &tables::ORDER_ITEMS,
                item.id,
                format!(
                    "item_price {} differs from product {} price {}",
                    item.item_price, product.id, product.price
                ),
            )),
            Some(_) => {}
        }

        if item.quantity == 0 || item.quantity > MAX_QUANTITY {
            violations.push(violation(
                ViolationCode::QuantityOutOfRange,
                &tables::ORDER_ITEMS,
                item.id,
                format!("quantity {} outside 1..={MAX_QUANTITY}", item.quantity),
            ));
        }

        let total = per_order.entry(item.order_id).or_insert(Money::ZERO);
        *total = *total + item.line_total();
    }

    for order in &dataset.orders {
        match per_order.get(&order.id) {
            None => violations.push(violation(
                ViolationCode::OrderWithoutItems,
                &tables::ORDERS,
                order.id,
                "order has no items".to_string(),
            )),
            Some(expected) if *expected != order.total_amount => violations.push(violation(
                ViolationCode::TotalMismatch,
                &tables::ORDERS,
                order.id,
                format!(
                    "total_amount {} but items sum to {expected}",
                    order.total_amount
                ),
            )),
            Some(_) => {}
        }
    }
}

fn check_payments(dataset: &Dataset, violations: &mut Vec<Violation>) {
    let orders: HashMap<u64, &Order> = dataset.orders.iter().map(|o| (o.id, o)).collect();

    for payment in &dataset.payments {
        let Some(order) = orders.get(&payment.order_id) else {
            violations.push(violation(
                ViolationCode::FkViolation,
                &tables::PAYMENTS,
                payment.id,
                format!("order_id {} not found in orders", payment.order_id),
            ));
            continue;
        };

        let lag = (payment.payment_date - order.order_date).num_days();
        if !(0..=MAX_PAYMENT_LAG_DAYS).contains(&lag) {
            violations.push(violation(
                ViolationCode::PaymentDateOutOfRange,
                &tables::PAYMENTS,
                payment.id,
                format!(
                    "payment_date {} is {lag} day(s) after order_date {}",
                    payment.payment_date, order.order_date
                ),
            ));
        }
    }
}

fn violation(code: ViolationCode, spec: &TableSpec, row_id: u64, message: String) -> Violation {
    Violation {
        code,
        table: spec.name,
        row_id,
        message,
    }
}
