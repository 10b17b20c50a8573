// In crates/commentary/src/types.rs

use core_types::Timeframe;
use serde::{Deserialize, Serialize};
use signals::SignalPartition;

/// How many buy/sell candidates to surface by name in commentary.
const TOP_CANDIDATES: usize = 3;

/// The summarized signal picture a generator turns into prose.
///
/// These are exactly the figures the dashboard's prompt builder assembled:
/// index and timeframe under analysis, bucket counts, and the top few
/// names on each side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentaryContext {
    pub index_name: String,
    pub timeframe: Timeframe,
    pub total_instruments: usize,
    pub buy_count: usize,
    pub sell_count: usize,
    pub top_buys: Vec<String>,
    pub top_sells: Vec<String>,
}

impl CommentaryContext {
    /// Builds a context from a partition pass, keeping the first few names
    /// of each bucket (partition order, i.e. watchlist order).
    pub fn from_partition(
        index_name: impl Into<String>,
        timeframe: Timeframe,
        partition: &SignalPartition,
    ) -> Self {
        Self {
            index_name: index_name.into(),
            timeframe,
            total_instruments: partition.total(),
            buy_count: partition.buy.len(),
            sell_count: partition.sell.len(),
            top_buys: partition
                .buy
                .iter()
                .take(TOP_CANDIDATES)
                .map(|i| i.name.clone())
                .collect(),
            top_sells: partition
                .sell
                .iter()
                .take(TOP_CANDIDATES)
                .map(|i| i.name.clone())
                .collect(),
        }
    }
}

/// Overall tone of a piece of commentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

/// Generated advisory text with its tone and the generator's confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Commentary {
    pub analysis: String,
    pub sentiment: Sentiment,
    /// In [0, 1].
    pub confidence: f64,
}
