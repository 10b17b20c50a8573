// In crates/market-data/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The provider could not produce data for the request. The mock never
    /// fails this way; real REST/streaming providers surface transport and
    /// decoding failures through this variant.
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
