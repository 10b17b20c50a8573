// In crates/commentary/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The generator could not produce commentary. The mock never fails;
    /// a real provider surfaces API failures through this variant.
    #[error("commentary generation failed: {0}")]
    GenerationFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
