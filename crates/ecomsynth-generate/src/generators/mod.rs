//! Generation steps for the five tables.
//!
//! Every step draws from the same [`ChaCha8Rng`], so the order of calls in
//! [`generate_dataset`] is part of the output contract: reordering draws
//! changes every file that follows.

pub mod faker;

use chrono::{Days, Months, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use ecomsynth_core::{
    Category, Customer, Dataset, Money, Order, OrderDraft, OrderItem, Payment, PaymentMethod,
    PaymentStatus, Product,
};

use crate::errors::GenerationError;
use crate::unique::{MAX_UNIQUE_ATTEMPTS, UniqueValues};

const SIGNUP_WINDOW_MONTHS: u32 = 24;
const SIGNUP_MIN_AGE_DAYS: u64 = 7;
const ORDER_WINDOW_MONTHS: u32 = 6;
const PRICE_MIN: f64 = 5.0;
const PRICE_MAX: f64 = 500.0;
const MAX_ITEMS_PER_ORDER: u32 = 5;
const MAX_QUANTITY: u32 = 5;
const MAX_PAYMENT_LAG_DAYS: u64 = 5;

/// Generate a complete dataset from `seed`.
///
/// `rows` applies to customers, products, orders and payments; order items
/// vary between one and five per order.
pub fn generate_dataset(
    seed: u64,
    rows: u64,
    as_of: NaiveDate,
) -> Result<Dataset, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let customers = generate_customers(rows, as_of, &mut rng)?;
    let products = generate_products(rows, &mut rng);
    let drafts = generate_orders(&customers, rows, as_of, &mut rng)?;
    let (orders, order_items) = generate_order_items(drafts, &products, &mut rng)?;
    let payments = generate_payments(&orders, &mut rng)?;

    Ok(Dataset {
        customers,
        products,
        orders,
        order_items,
        payments,
    })
}

pub fn generate_customers(
    count: u64,
    as_of: NaiveDate,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<Customer>, GenerationError> {
    let earliest = months_before(as_of, SIGNUP_WINDOW_MONTHS)?;
    let latest = days_before(as_of, SIGNUP_MIN_AGE_DAYS)?;
    let mut emails = UniqueValues::new("customers.email", MAX_UNIQUE_ATTEMPTS);

    let mut customers = Vec::with_capacity(count as usize);
    for id in 1..=count {
        let name = faker::person_name(rng);
        let email = emails.draw(|| faker::safe_email(rng))?;
        let signup_date = faker::date_between(rng, earliest, latest);
        let location = faker::city(rng);
        customers.push(Customer {
            id,
            name,
            email,
            signup_date,
            location,
        });
    }

    debug!(rows = customers.len(), "customers generated");
    Ok(customers)
}

pub fn generate_products(count: u64, rng: &mut ChaCha8Rng) -> Vec<Product> {
    let mut products = Vec::with_capacity(count as usize);
    for id in 1..=count {
        let category = *faker::pick(&Category::ALL, rng);
        let name = faker::catch_phrase(rng);
        let price = Money::from_f64(rng.random_range(PRICE_MIN..=PRICE_MAX));
        products.push(Product {
            id,
            name,
            category,
            price,
        });
    }

    debug!(rows = products.len(), "products generated");
    products
}

/// Draft `count` orders for randomly chosen customers.
///
/// Totals are attached later by [`generate_order_items`].
pub fn generate_orders(
    customers: &[Customer],
    count: u64,
    as_of: NaiveDate,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<OrderDraft>, GenerationError> {
    if count > 0 && customers.is_empty() {
        return Err(GenerationError::EmptyParent(
            "orders require at least one customer".to_string(),
        ));
    }
    let earliest = months_before(as_of, ORDER_WINDOW_MONTHS)?;

    let mut drafts = Vec::with_capacity(count as usize);
    for id in 1..=count {
        let customer = faker::pick(customers, rng);
        let order_date = faker::date_between(rng, earliest, as_of);
        drafts.push(OrderDraft {
            id,
            customer_id: customer.id,
            order_date,
        });
    }

    debug!(rows = drafts.len(), "orders drafted");
    Ok(drafts)
}

/// Generate line items for each draft and finalize it with its total.
///
/// Items keep the product's unit price; the order total sums the extended
/// price (`unit price × quantity`) of its lines.
pub fn generate_order_items(
    drafts: Vec<OrderDraft>,
    products: &[Product],
    rng: &mut ChaCha8Rng,
) -> Result<(Vec<Order>, Vec<OrderItem>), GenerationError> {
    if !drafts.is_empty() && products.is_empty() {
        return Err(GenerationError::EmptyParent(
            "order items require at least one product".to_string(),
        ));
    }

    let mut orders = Vec::with_capacity(drafts.len());
    let mut items = Vec::new();
    let mut next_item_id = 1_u64;

    for draft in drafts {
        let line_count = rng.random_range(1..=MAX_ITEMS_PER_ORDER);
        let mut total = Money::ZERO;
        for _ in 0..line_count {
            let product = faker::pick(products, rng);
            let quantity = rng.random_range(1..=MAX_QUANTITY);
            let item = OrderItem {
                id: next_item_id,
                order_id: draft.id,
                product_id: product.id,
                quantity,
                item_price: product.price,
            };
            total = total + item.line_total();
            items.push(item);
            next_item_id += 1;
        }
        orders.push(draft.finalize(total));
    }

    debug!(orders = orders.len(), items = items.len(), "order items generated");
    Ok((orders, items))
}

pub fn generate_payments(
    orders: &[Order],
    rng: &mut ChaCha8Rng,
) -> Result<Vec<Payment>, GenerationError> {
    // Statuses for the whole batch are drawn before any per-order draw.
    let statuses: Vec<PaymentStatus> = orders.iter().map(|_| weighted_status(rng)).collect();

    let mut payments = Vec::with_capacity(orders.len());
    for (index, (order, status)) in orders.iter().zip(statuses).enumerate() {
        let lag = rng.random_range(0..=MAX_PAYMENT_LAG_DAYS);
        let payment_date = order
            .order_date
            .checked_add_days(Days::new(lag))
            .ok_or_else(|| {
                GenerationError::InvalidOptions(format!(
                    "payment date overflows for order {}",
                    order.id
                ))
            })?;
        let payment_method = *faker::pick(&PaymentMethod::ALL, rng);
        payments.push(Payment {
            id: index as u64 + 1,
            order_id: order.id,
            payment_method,
            status,
            payment_date,
        });
    }

    debug!(rows = payments.len(), "payments generated");
    Ok(payments)
}

fn weighted_status(rng: &mut ChaCha8Rng) -> PaymentStatus {
    let roll: f64 = rng.random();
    let mut cumulative = 0.0;
    for status in PaymentStatus::ALL {
        cumulative += status.weight();
        if roll < cumulative {
            return status;
        }
    }
    PaymentStatus::Failed
}

fn months_before(date: NaiveDate, months: u32) -> Result<NaiveDate, GenerationError> {
    date.checked_sub_months(Months::new(months))
        .ok_or_else(|| GenerationError::InvalidOptions(format!("as-of date {date} is out of range")))
}

fn days_before(date: NaiveDate, days: u64) -> Result<NaiveDate, GenerationError> {
    date.checked_sub_days(Days::new(days))
        .ok_or_else(|| GenerationError::InvalidOptions(format!("as-of date {date} is out of range")))
}
