// In crates/market-data/src/types.rs

use serde::Deserialize;
use std::time::Duration;

/// Artificial per-endpoint latency for the mock provider, in milliseconds.
///
/// The defaults reproduce the delays the original dashboard simulated for
/// each endpoint so the UI's loading states stay exercised. Settings may
/// override any subset of endpoints; missing fields keep their defaults.
/// Tests use `MockLatency::zero()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MockLatency {
    pub watchlist_ms: u64,
    pub market_summary_ms: u64,
    pub trades_ms: u64,
    pub add_trade_ms: u64,
    pub journal_ms: u64,
    pub add_journal_ms: u64,
    pub strategies_ms: u64,
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            watchlist_ms: 600,
            market_summary_ms: 800,
            trades_ms: 500,
            add_trade_ms: 700,
            journal_ms: 650,
            add_journal_ms: 700,
            strategies_ms: 550,
        }
    }
}

impl MockLatency {
    /// No artificial delay on any endpoint.
    pub fn zero() -> Self {
        Self {
            watchlist_ms: 0,
            market_summary_ms: 0,
            trades_ms: 0,
            add_trade_ms: 0,
            journal_ms: 0,
            add_journal_ms: 0,
            strategies_ms: 0,
        }
    }

    pub(crate) fn watchlist(&self) -> Duration {
        Duration::from_millis(self.watchlist_ms)
    }

    pub(crate) fn market_summary(&self) -> Duration {
        Duration::from_millis(self.market_summary_ms)
    }

    pub(crate) fn trades(&self) -> Duration {
        Duration::from_millis(self.trades_ms)
    }

    pub(crate) fn add_trade(&self) -> Duration {
        Duration::from_millis(self.add_trade_ms)
    }

    pub(crate) fn journal(&self) -> Duration {
        Duration::from_millis(self.journal_ms)
    }

    pub(crate) fn add_journal(&self) -> Duration {
        Duration::from_millis(self.add_journal_ms)
    }

    pub(crate) fn strategies(&self) -> Duration {
        Duration::from_millis(self.strategies_ms)
    }
}
