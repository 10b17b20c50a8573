// In crates/market-data/src/lib.rs

use async_trait::async_trait;
use core_types::{
    IndexSummary, Instrument, JournalEntry, NewJournalEntry, NewTrade, StrategyDoc, Timeframe,
    Trade,
};

pub mod error;
pub mod mock;
pub mod types;

// Re-export public types.
pub use error::{Error, Result};
pub use mock::MockProvider;
pub use types::MockLatency;

/// The universal interface for an instrument data source.
///
/// A provider yields snapshot sequences for a requested timeframe along
/// with the dashboard's supporting records (trade log, journal, saved
/// strategy documents). The classifier is agnostic to how a sequence was
/// obtained — a mock fixture, a REST client, and a streaming feed all sit
/// behind this same trait.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// The name of the provider (e.g., "MockProvider").
    fn name(&self) -> &'static str;

    /// Fetches the watchlist snapshots for the given timeframe.
    async fn fetch_watchlist(&self, timeframe: Timeframe) -> Result<Vec<Instrument>>;

    /// Fetches the headline market index summaries.
    async fn fetch_market_summary(&self) -> Result<Vec<IndexSummary>>;

    /// Fetches the trade log, oldest first.
    async fn fetch_trades(&self) -> Result<Vec<Trade>>;

    /// Records a new trade and returns it with its assigned id.
    async fn add_trade(&self, trade: NewTrade) -> Result<Trade>;

    /// Fetches the journal, oldest first.
    async fn fetch_journal_entries(&self) -> Result<Vec<JournalEntry>>;

    /// Records a new journal entry and returns it with its assigned id.
    async fn add_journal_entry(&self, entry: NewJournalEntry) -> Result<JournalEntry>;

    /// Fetches the saved strategy documents.
    async fn fetch_strategies(&self) -> Result<Vec<StrategyDoc>>;
}
