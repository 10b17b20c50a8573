// In crates/market-data/src/mock.rs

use crate::types::MockLatency;
use crate::{MarketDataProvider, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use core_types::{
    IndexSummary, Instrument, JournalEntry, Mood, NewJournalEntry, NewTrade, StrategyDoc,
    Timeframe, Trade, TradeSide, TradeStatus,
};
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tokio::time::sleep;

/// Mutable portion of the mock's state: the records the user can append to.
#[derive(Debug)]
struct MockState {
    trades: Vec<Trade>,
    journal: Vec<JournalEntry>,
}

/// An in-memory data source serving fixture data with artificial latency.
///
/// This stands in for a real broker integration: every call sleeps its
/// configured delay before answering, so consumers exercise the same async
/// paths they would against a network-backed provider. The watchlist and
/// index fixtures are static per process; trades and journal entries
/// accumulate in memory and are lost on shutdown.
pub struct MockProvider {
    latency: MockLatency,
    watchlist: Vec<Instrument>,
    indices: Vec<IndexSummary>,
    strategies: Vec<StrategyDoc>,
    state: Mutex<MockState>,
    next_id: AtomicU64,
}

impl MockProvider {
    pub fn new(latency: MockLatency) -> Self {
        let trades = seed_trades();
        let journal = seed_journal();
        // Seeded records occupy the low ids; user-added records continue
        // the sequence.
        let next_id = (trades.len() + journal.len()) as u64 + 1;

        Self {
            latency,
            watchlist: seed_watchlist(),
            indices: seed_indices(),
            strategies: seed_strategies(),
            state: Mutex::new(MockState { trades, journal }),
            next_id: AtomicU64::new(next_id),
        }
    }

    fn mint_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    fn name(&self) -> &'static str {
        "MockProvider"
    }

    async fn fetch_watchlist(&self, timeframe: Timeframe) -> Result<Vec<Instrument>> {
        sleep(self.latency.watchlist()).await;
        // The fixture set does not vary by timeframe, matching the original
        // mock; the parameter is part of the provider contract.
        tracing::debug!(timeframe = %timeframe, count = self.watchlist.len(), "serving watchlist fixture");
        Ok(self.watchlist.clone())
    }

    async fn fetch_market_summary(&self) -> Result<Vec<IndexSummary>> {
        sleep(self.latency.market_summary()).await;
        Ok(self.indices.clone())
    }

    async fn fetch_trades(&self) -> Result<Vec<Trade>> {
        sleep(self.latency.trades()).await;
        Ok(self.state.lock().await.trades.clone())
    }

    async fn add_trade(&self, trade: NewTrade) -> Result<Trade> {
        sleep(self.latency.add_trade()).await;
        let trade = trade.into_trade(self.mint_id());
        tracing::info!(symbol = %trade.symbol, id = trade.id, "trade recorded");
        self.state.lock().await.trades.push(trade.clone());
        Ok(trade)
    }

    async fn fetch_journal_entries(&self) -> Result<Vec<JournalEntry>> {
        sleep(self.latency.journal()).await;
        Ok(self.state.lock().await.journal.clone())
    }

    async fn add_journal_entry(&self, entry: NewJournalEntry) -> Result<JournalEntry> {
        sleep(self.latency.add_journal()).await;
        let entry = entry.into_entry(self.mint_id());
        tracing::info!(title = %entry.title, id = entry.id, "journal entry recorded");
        self.state.lock().await.journal.push(entry.clone());
        Ok(entry)
    }

    async fn fetch_strategies(&self) -> Result<Vec<StrategyDoc>> {
        sleep(self.latency.strategies()).await;
        Ok(self.strategies.clone())
    }
}

// --- Fixture data ---

fn instrument(symbol: &str, name: &str, price: rust_decimal::Decimal, change_percent: f64) -> Instrument {
    Instrument {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change_percent,
    }
}

/// NSE large caps with a spread of moves wide enough to light up all three
/// signal buckets under every selectable threshold pair.
fn seed_watchlist() -> Vec<Instrument> {
    vec![
        instrument("RELIANCE", "Reliance Industries", dec!(2980.75), 1.45),
        instrument("TCS", "Tata Consultancy Services", dec!(3560.25), 7.10),
        instrument("INFY", "Infosys", dec!(1580.25), 11.23),
        instrument("HDFCBANK", "HDFC Bank", dec!(1495.60), -7.12),
        instrument("ICICIBANK", "ICICI Bank", dec!(1020.40), -8.90),
        instrument("ITC", "ITC Limited", dec!(380.25), -12.34),
        instrument("LT", "Larsen & Toubro", dec!(2340.60), -8.76),
        instrument("MARUTI", "Maruti Suzuki", dec!(10450.75), 9.87),
        instrument("WIPRO", "Wipro Ltd", dec!(450.75), 8.45),
        instrument("SBIN", "State Bank of India", dec!(620.30), 16.54),
        instrument("BHARTIARTL", "Bharti Airtel", dec!(1125.40), 3.50),
        instrument("TATASTEEL", "Tata Steel", dec!(134.80), -7.20),
    ]
}

fn seed_indices() -> Vec<IndexSummary> {
    vec![
        IndexSummary {
            index_name: "NIFTY 50".to_string(),
            value: dec!(22419.95),
            change: dec!(123.95),
            change_percent: 0.56,
        },
        IndexSummary {
            index_name: "SENSEX".to_string(),
            value: dec!(73852.94),
            change: dec!(335.39),
            change_percent: 0.46,
        },
        IndexSummary {
            index_name: "NIFTY BANK".to_string(),
            value: dec!(47124.60),
            change: dec!(-189.35),
            change_percent: -0.40,
        },
    ]
}

fn seed_trades() -> Vec<Trade> {
    vec![
        Trade {
            id: 1,
            symbol: "RELIANCE".to_string(),
            side: TradeSide::Buy,
            price: dec!(2870.45),
            quantity: 10,
            executed_at: Utc.with_ymd_and_hms(2023, 9, 15, 14, 30, 0).unwrap(),
            profit_loss: None,
            status: TradeStatus::Open,
        },
        Trade {
            id: 2,
            symbol: "TCS".to_string(),
            side: TradeSide::Sell,
            price: dec!(3324.78),
            quantity: 5,
            executed_at: Utc.with_ymd_and_hms(2023, 9, 20, 10, 15, 0).unwrap(),
            profit_loss: Some(dec!(1120.50)),
            status: TradeStatus::Closed,
        },
        Trade {
            id: 3,
            symbol: "HDFCBANK".to_string(),
            side: TradeSide::Buy,
            price: dec!(1510.30),
            quantity: 8,
            executed_at: Utc.with_ymd_and_hms(2023, 10, 5, 11, 45, 0).unwrap(),
            profit_loss: None,
            status: TradeStatus::Open,
        },
    ]
}

fn seed_journal() -> Vec<JournalEntry> {
    vec![
        JournalEntry {
            id: 4,
            written_at: Utc.with_ymd_and_hms(2023, 10, 10, 8, 30, 0).unwrap(),
            title: "IT sector analysis".to_string(),
            content: "IT stocks are showing signs of recovery after the recent correction. \
                      Infosys looks particularly strong with solid fundamentals and good \
                      technical signals. Considering increasing my position."
                .to_string(),
            mood: Mood::Positive,
            tags: vec!["it".to_string(), "analysis".to_string(), "infosys".to_string()],
        },
        JournalEntry {
            id: 5,
            written_at: Utc.with_ymd_and_hms(2023, 10, 15, 14, 20, 0).unwrap(),
            title: "Earnings season reflection".to_string(),
            content: "Mixed results from earnings this week. Maruti beat expectations but \
                      guidance was cautious. Need to be more selective with entries as the \
                      market seems to be pricing in perfection."
                .to_string(),
            mood: Mood::Neutral,
            tags: vec!["earnings".to_string(), "maruti".to_string(), "market conditions".to_string()],
        },
    ]
}

fn seed_strategies() -> Vec<StrategyDoc> {
    vec![
        StrategyDoc {
            id: 1,
            name: "Mean Reversion Strategy".to_string(),
            description: "Buy stocks that have fallen significantly and sell stocks that \
                          have risen significantly over the past week."
                .to_string(),
            rules: MEAN_REVERSION_RULES.to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 8, 12, 9, 20, 0).unwrap(),
        },
        StrategyDoc {
            id: 2,
            name: "Momentum Strategy".to_string(),
            description: "Buy stocks showing strong upward momentum and sell on signs of \
                          weakening momentum."
                .to_string(),
            rules: MOMENTUM_RULES.to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 9, 5, 15, 45, 0).unwrap(),
        },
    ]
}

const MEAN_REVERSION_RULES: &str = "# Mean Reversion Strategy\n\n## Rules:\n\n\
### Buy Conditions:\n\
- Stock has dropped by at least 10% in the past week\n\
- Stock is above its 200-day moving average\n\
- RSI is below 30 (oversold)\n\n\
### Sell Conditions:\n\
- Stock has gained at least 7% from purchase price\n\
- Stock has been held for more than 30 days\n\
- RSI moves above 70 (overbought)\n\n\
## Risk Management:\n\
- Stop loss at 5% below purchase price\n\
- Position size not more than 5% of portfolio";

const MOMENTUM_RULES: &str = "# Momentum Strategy\n\n## Rules:\n\n\
### Buy Conditions:\n\
- Stock has risen by at least 5% in the past week\n\
- Volume is above 50-day average volume\n\
- MACD is showing bullish crossover\n\n\
### Sell Conditions:\n\
- Stock has fallen by 3% or more from recent high\n\
- Volume starts declining\n\
- MACD shows bearish crossover\n\n\
## Risk Management:\n\
- Trailing stop of 7%\n\
- Maximum exposure of 10% to any single sector";

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MockProvider {
        MockProvider::new(MockLatency::zero())
    }

    #[tokio::test]
    async fn watchlist_has_finite_change_percents() {
        let instruments = provider().fetch_watchlist(Timeframe::OneDay).await.unwrap();
        assert!(!instruments.is_empty());
        assert!(instruments.iter().all(|i| i.change_percent.is_finite()));
    }

    #[tokio::test]
    async fn watchlist_symbols_are_unique() {
        let instruments = provider().fetch_watchlist(Timeframe::OneWeek).await.unwrap();
        let mut symbols: Vec<&str> = instruments.iter().map(|i| i.symbol.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), instruments.len());
    }

    #[tokio::test]
    async fn added_trade_gets_a_fresh_id_and_is_listed() {
        let provider = provider();
        let before = provider.fetch_trades().await.unwrap();

        let added = provider
            .add_trade(NewTrade {
                symbol: "WIPRO".to_string(),
                side: TradeSide::Buy,
                price: dec!(450.75),
                quantity: 20,
                executed_at: Utc::now(),
                profit_loss: None,
                status: TradeStatus::Open,
            })
            .await
            .unwrap();

        assert!(before.iter().all(|t| t.id != added.id));
        let after = provider.fetch_trades().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().unwrap(), &added);
    }

    #[tokio::test]
    async fn added_journal_entry_is_appended() {
        let provider = provider();
        let entry = provider
            .add_journal_entry(NewJournalEntry {
                written_at: Utc::now(),
                title: "Bank rally".to_string(),
                content: "PSU banks leading; watch SBIN.".to_string(),
                mood: Mood::Positive,
                tags: vec!["banks".to_string()],
            })
            .await
            .unwrap();

        let journal = provider.fetch_journal_entries().await.unwrap();
        assert_eq!(journal.last().unwrap(), &entry);
    }

    #[tokio::test]
    async fn ids_stay_unique_across_trades_and_journal() {
        let provider = provider();
        let trade = provider
            .add_trade(NewTrade {
                symbol: "ITC".to_string(),
                side: TradeSide::Sell,
                price: dec!(380.25),
                quantity: 50,
                executed_at: Utc::now(),
                profit_loss: Some(dec!(210.00)),
                status: TradeStatus::Closed,
            })
            .await
            .unwrap();
        let entry = provider
            .add_journal_entry(NewJournalEntry {
                written_at: Utc::now(),
                title: "Exit note".to_string(),
                content: "Closed ITC short.".to_string(),
                mood: Mood::Neutral,
                tags: vec![],
            })
            .await
            .unwrap();
        assert_ne!(trade.id, entry.id);
    }

    #[tokio::test]
    async fn strategy_documents_carry_markdown_rules() {
        let docs = provider().fetch_strategies().await.unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs[0].rules.starts_with("# Mean Reversion Strategy"));
    }
}
