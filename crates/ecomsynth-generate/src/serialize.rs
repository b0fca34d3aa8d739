//! Conversion of typed records into string rows keyed by column name.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use ecomsynth_core::{Customer, Order, OrderItem, Payment, Product};

/// One output row: column name to rendered value.
pub type CsvRow = BTreeMap<&'static str, String>;

pub fn serialize_customers(customers: &[Customer]) -> Vec<CsvRow> {
    customers
        .iter()
        .map(|customer| {
            CsvRow::from([
                ("customer_id", customer.id.to_string()),
                ("name", customer.name.clone()),
                ("email", customer.email.clone()),
                ("signup_date", iso_date(customer.signup_date)),
                ("location", customer.location.clone()),
            ])
        })
        .collect()
}

pub fn serialize_products(products: &[Product]) -> Vec<CsvRow> {
    products
        .iter()
        .map(|product| {
            CsvRow::from([
                ("product_id", product.id.to_string()),
                ("name", product.name.clone()),
                ("category", product.category.to_string()),
                ("price", product.price.to_string()),
            ])
        })
        .collect()
}

pub fn serialize_orders(orders: &[Order]) -> Vec<CsvRow> {
    orders
        .iter()
        .map(|order| {
            CsvRow::from([
                ("order_id", order.id.to_string()),
                ("customer_id", order.customer_id.to_string()),
                ("order_date", iso_date(order.order_date)),
                ("total_amount", order.total_amount.to_string()),
            ])
        })
        .collect()
}

pub fn serialize_order_items(items: &[OrderItem]) -> Vec<CsvRow> {
    items
        .iter()
        .map(|item| {
            CsvRow::from([
                ("order_item_id", item.id.to_string()),
                ("order_id", item.order_id.to_string()),
                ("product_id", item.product_id.to_string()),
                ("quantity", item.quantity.to_string()),
                ("item_price", item.item_price.to_string()),
            ])
        })
        .collect()
}

pub fn serialize_payments(payments: &[Payment]) -> Vec<CsvRow> {
    payments
        .iter()
        .map(|payment| {
            CsvRow::from([
                ("payment_id", payment.id.to_string()),
                ("order_id", payment.order_id.to_string()),
                ("payment_method", payment.payment_method.to_string()),
                ("status", payment.status.to_string()),
                ("payment_date", iso_date(payment.payment_date)),
            ])
        })
        .collect()
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
