// In crates/web-server/src/types.rs

use core_types::Timeframe;
use serde::{Deserialize, Serialize};
use signals::{SignalPartition, StrategyConfig};

/// Query parameters for endpoints that read a snapshot sequence
/// (e.g., `?timeframe=1w`). When absent, the store's current timeframe is
/// used.
#[derive(Debug, Deserialize)]
pub struct TimeframeParams {
    pub timeframe: Option<Timeframe>,
}

/// Response for `GET /api/signals`: the config that produced the buckets
/// alongside the buckets themselves.
#[derive(Debug, Serialize)]
pub struct SignalsResponse {
    pub config: StrategyConfig,
    #[serde(flatten)]
    pub partition: SignalPartition,
}

/// Partial strategy update for `PUT /api/strategy`. Absent fields are left
/// unchanged; the update is atomic — if any supplied value is rejected,
/// none are applied.
#[derive(Debug, Default, Deserialize)]
pub struct StrategyUpdate {
    pub buy_threshold: Option<f64>,
    pub sell_threshold: Option<f64>,
    pub timeframe: Option<String>,
}

/// Request body for `POST /api/analysis`.
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    /// Index whose constituents are being analyzed. Defaults to NIFTY 50.
    pub index_name: Option<String>,
    /// Timeframe token; defaults to the store's current timeframe.
    pub timeframe: Option<String>,
}
