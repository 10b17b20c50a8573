// In crates/signals/src/types.rs

use core_types::{Instrument, Timeframe};
use serde::{Deserialize, Serialize};

/// The threshold strategy parameters supplied to the classifier.
///
/// Classification is a pure function of `(change_percent, buy_threshold,
/// sell_threshold)`; the timeframe only selects which snapshot sequence the
/// data source produces. Thresholds are percentages: `buy_threshold` is
/// non-positive ("buy when down by"), `sell_threshold` non-negative ("sell
/// when up by"). The store enforces the enumerated allowed values; the
/// classifier trusts its caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub buy_threshold: f64,
    pub sell_threshold: f64,
    pub timeframe: Timeframe,
}

impl Default for StrategyConfig {
    /// The original dashboard's defaults: buy when down 5%, sell when up
    /// 10%, measured over one day.
    fn default() -> Self {
        Self {
            buy_threshold: -5.0,
            sell_threshold: 10.0,
            timeframe: Timeframe::OneDay,
        }
    }
}

/// The three signal buckets produced by one partition pass.
///
/// Input order is preserved within each bucket and the bucket lengths sum
/// to the input length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignalPartition {
    pub buy: Vec<Instrument>,
    pub sell: Vec<Instrument>,
    pub hold: Vec<Instrument>,
}

impl SignalPartition {
    pub fn total(&self) -> usize {
        self.buy.len() + self.sell.len() + self.hold.len()
    }
}
