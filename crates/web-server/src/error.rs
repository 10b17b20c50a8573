// In crates/web-server/src/error.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Invalid classification input or config mutation. Fatal to the
    /// request, not to the session: the store keeps its last valid state.
    #[error(transparent)]
    Signals(#[from] signals::Error),

    #[error(transparent)]
    Timeframe(#[from] core_types::Error),

    #[error(transparent)]
    MarketData(#[from] market_data::Error),

    #[error(transparent)]
    Commentary(#[from] commentary::Error),

    #[error("Failed to bind server address: {0}")]
    ServerBindError(std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Signals(_) | Error::Timeframe(_) => StatusCode::BAD_REQUEST,
            Error::MarketData(_) | Error::Commentary(_) => StatusCode::BAD_GATEWAY,
            Error::ServerBindError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
