use thiserror::Error;

/// Core error type shared across ecomsynth crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A monetary value is not a plain decimal with exactly two fraction digits.
    #[error("invalid money value '{0}': expected digits with exactly two decimals")]
    InvalidMoney(String),
}

/// Convenience alias for results returned by ecomsynth crates.
pub type Result<T> = std::result::Result<T, Error>;
