use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// All tables of one generated dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}

/// A customer row. Field names follow the `customers.csv` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "customer_id")]
    pub id: u64,
    pub name: String,
    pub email: String,
    pub signup_date: NaiveDate,
    pub location: String,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "product_id")]
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub price: Money,
}

/// An order whose line items are not known yet.
///
/// Drafts only become [`Order`]s once their total has been computed from
/// the generated items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub id: u64,
    pub customer_id: u64,
    pub order_date: NaiveDate,
}

impl OrderDraft {
    pub fn finalize(self, total_amount: Money) -> Order {
        Order {
            id: self.id,
            customer_id: self.customer_id,
            order_date: self.order_date,
            total_amount,
        }
    }
}

/// A finalized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "order_id")]
    pub id: u64,
    pub customer_id: u64,
    pub order_date: NaiveDate,
    pub total_amount: Money,
}

/// One line of an order. `item_price` is the unit price snapshot, not the
/// extended price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "order_item_id")]
    pub id: u64,
    pub order_id: u64,
    pub product_id: u64,
    pub quantity: u32,
    pub item_price: Money,
}

impl OrderItem {
    pub fn line_total(&self) -> Money {
        self.item_price.times(self.quantity)
    }
}

/// Payment attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "payment_id")]
    pub id: u64,
    pub order_id: u64,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    pub payment_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    #[serde(rename = "Home & Kitchen")]
    HomeKitchen,
    Apparel,
    #[serde(rename = "Health & Beauty")]
    HealthBeauty,
    #[serde(rename = "Sports & Outdoors")]
    SportsOutdoors,
    Books,
    #[serde(rename = "Toys & Games")]
    ToysGames,
    Automotive,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Electronics,
        Category::HomeKitchen,
        Category::Apparel,
        Category::HealthBeauty,
        Category::SportsOutdoors,
        Category::Books,
        Category::ToysGames,
        Category::Automotive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::HomeKitchen => "Home & Kitchen",
            Category::Apparel => "Apparel",
            Category::HealthBeauty => "Health & Beauty",
            Category::SportsOutdoors => "Sports & Outdoors",
            Category::Books => "Books",
            Category::ToysGames => "Toys & Games",
            Category::Automotive => "Automotive",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
    BankTransfer,
    GiftCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Paypal,
        PaymentMethod::BankTransfer,
        PaymentMethod::GiftCard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::DebitCard => "debit_card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::GiftCard => "gift_card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Completed,
        PaymentStatus::Pending,
        PaymentStatus::Failed,
    ];

    /// Relative frequency of the status among generated payments.
    pub fn weight(self) -> f64 {
        match self {
            PaymentStatus::Completed => 0.80,
            PaymentStatus::Pending => 0.15,
            PaymentStatus::Failed => 0.05,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
