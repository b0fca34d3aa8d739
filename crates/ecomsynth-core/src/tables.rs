/// Output table descriptor: file name plus the fixed column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    pub file_name: &'static str,
    pub columns: &'static [&'static str],
}

pub const CUSTOMERS: TableSpec = TableSpec {
    name: "customers",
    file_name: "customers.csv",
    columns: &["customer_id", "name", "email", "signup_date", "location"],
};

pub const PRODUCTS: TableSpec = TableSpec {
    name: "products",
    file_name: "products.csv",
    columns: &["product_id", "name", "category", "price"],
};

pub const ORDERS: TableSpec = TableSpec {
    name: "orders",
    file_name: "orders.csv",
    columns: &["order_id", "customer_id", "order_date", "total_amount"],
};

pub const ORDER_ITEMS: TableSpec = TableSpec {
    name: "order_items",
    file_name: "order_items.csv",
    columns: &[
        "order_item_id",
        "order_id",
        "product_id",
        "quantity",
        "item_price",
    ],
};

pub const PAYMENTS: TableSpec = TableSpec {
    name: "payments",
    file_name: "payments.csv",
    columns: &[
        "payment_id",
        "order_id",
        "payment_method",
        "status",
        "payment_date",
    ],
};

/// All tables in generation (and parent-before-child) order.
pub const ALL_TABLES: [TableSpec; 5] = [CUSTOMERS, PRODUCTS, ORDERS, ORDER_ITEMS, PAYMENTS];
