//! Core contracts for ecomsynth.
//!
//! This crate defines the record types of the synthetic e-commerce dataset,
//! the closed value sets they draw from, money handling, and the table
//! descriptors (file names and column order) shared by the generator, the
//! verifier and the CLI.

pub mod error;
pub mod money;
pub mod records;
pub mod tables;

pub use error::{Error, Result};
pub use money::Money;
pub use records::{
    Category, Customer, Dataset, Order, OrderDraft, OrderItem, Payment, PaymentMethod, PaymentStatus,
    Product,
};
pub use tables::{ALL_TABLES, TableSpec};
