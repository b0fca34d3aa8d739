//! Referential consistency checks for generated datasets.

pub mod engine;
pub mod errors;
pub mod model;

pub use engine::{check_dataset, evaluate_dataset, load_dataset};
pub use errors::EvalError;
pub use model::{EvaluationResult, TableCount, Violation, ViolationCode};
