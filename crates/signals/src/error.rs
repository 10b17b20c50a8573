// In crates/signals/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A classification input was NaN or infinite. Not retried; the data
    /// source must filter bad entries before classification.
    #[error("change percent must be finite, got {0}")]
    NonFiniteInput(f64),

    /// An attempted buy-threshold mutation fell outside the enumerated set.
    #[error("buy threshold {0}% is not one of -3, -5, -7, -10, -15")]
    InvalidBuyThreshold(f64),

    /// An attempted sell-threshold mutation fell outside the enumerated set.
    #[error("sell threshold {0}% is not one of 5, 7, 10, 15, 20")]
    InvalidSellThreshold(f64),

    #[error(transparent)]
    InvalidTimeframe(#[from] core_types::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
