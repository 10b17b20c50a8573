// In crates/core-types/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown timeframe token: '{0}' (expected one of 1d, 1w, 1m, 3m, 6m, 1y)")]
    UnknownTimeframe(String),
}

pub type Result<T> = std::result::Result<T, Error>;
