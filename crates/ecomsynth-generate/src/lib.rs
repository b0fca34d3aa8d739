//! Seeded dataset generator for ecomsynth.
//!
//! Produces customers, products, orders, order items and payments from a
//! single explicit random source, keeps every foreign key and order total
//! consistent, and writes the tables as CSV files.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod serialize;
pub mod unique;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use ecomsynth_core::Dataset;
pub use generators::generate_dataset;
pub use model::{GenerateOptions, GenerationReport, TableReport};
