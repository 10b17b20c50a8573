// In crates/core-types/src/types.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// A single priced security at one point in time.
///
/// Snapshots are immutable once produced by a data source; the classifier
/// reads `change_percent` and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Exchange ticker, unique within a snapshot sequence (e.g., "RELIANCE").
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    /// Signed percentage move over the requested timeframe (e.g., -8.76).
    pub change_percent: f64,
}

/// The outcome of classifying one percentage move against a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Buy,
    Sell,
    Hold,
}

/// A classified instrument. Derived, never stored — recomputed on every pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    pub instrument: Instrument,
    pub classification: Classification,
}

/// The period over which a percentage price change is measured.
///
/// This is the canonical token set. The original views drifted between
/// subsets of it; every consumer here uses the full enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Timeframe {
    #[serde(rename = "1d")]
    #[strum(serialize = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    #[strum(serialize = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    #[strum(serialize = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    #[strum(serialize = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    #[strum(serialize = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    #[strum(serialize = "1y")]
    OneYear,
}

impl Timeframe {
    /// Parses a timeframe token (e.g., "1d"), mapping the strum parse
    /// failure into our own error so callers get the token back.
    pub fn parse(token: &str) -> crate::Result<Self> {
        Self::from_str(token).map_err(|_| crate::Error::UnknownTimeframe(token.to_string()))
    }

    /// Human-readable form for commentary text (e.g., "3 months").
    pub fn describe(&self) -> &'static str {
        match self {
            Timeframe::OneDay => "day",
            Timeframe::OneWeek => "week",
            Timeframe::OneMonth => "month",
            Timeframe::ThreeMonths => "3 months",
            Timeframe::SixMonths => "6 months",
            Timeframe::OneYear => "year",
        }
    }
}

/// Direction of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Open,
    Closed,
}

/// One entry in the trade log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: u64,
    pub symbol: String,
    pub side: TradeSide,
    pub price: Decimal,
    pub quantity: u32,
    pub executed_at: DateTime<Utc>,
    /// Realized P&L, present once the trade is closed.
    pub profit_loss: Option<Decimal>,
    pub status: TradeStatus,
}

/// A trade as submitted by the user; the data source assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrade {
    pub symbol: String,
    pub side: TradeSide,
    pub price: Decimal,
    pub quantity: u32,
    pub executed_at: DateTime<Utc>,
    pub profit_loss: Option<Decimal>,
    pub status: TradeStatus,
}

impl NewTrade {
    pub fn into_trade(self, id: u64) -> Trade {
        Trade {
            id,
            symbol: self.symbol,
            side: self.side,
            price: self.price,
            quantity: self.quantity,
            executed_at: self.executed_at,
            profit_loss: self.profit_loss,
            status: self.status,
        }
    }
}

/// The writer's mood attached to a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u64,
    pub written_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJournalEntry {
    pub written_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub tags: Vec<String>,
}

impl NewJournalEntry {
    pub fn into_entry(self, id: u64) -> JournalEntry {
        JournalEntry {
            id,
            written_at: self.written_at,
            title: self.title,
            content: self.content,
            mood: self.mood,
            tags: self.tags,
        }
    }
}

/// A market index snapshot (e.g., NIFTY 50) for the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSummary {
    pub index_name: String,
    pub value: Decimal,
    pub change: Decimal,
    pub change_percent: f64,
}

/// A saved strategy document: free-form markdown rules plus metadata.
///
/// These are user-authored documents for the strategy editor, distinct from
/// the machine-checked threshold config owned by the signals crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyDoc {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub rules: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn timeframe_parses_all_canonical_tokens() {
        let cases = [
            ("1d", Timeframe::OneDay),
            ("1w", Timeframe::OneWeek),
            ("1m", Timeframe::OneMonth),
            ("3m", Timeframe::ThreeMonths),
            ("6m", Timeframe::SixMonths),
            ("1y", Timeframe::OneYear),
        ];
        for (token, expected) in cases {
            assert_eq!(Timeframe::parse(token).unwrap(), expected);
            assert_eq!(expected.to_string(), token);
        }
    }

    #[test]
    fn timeframe_rejects_unknown_token() {
        let err = Timeframe::parse("2w").unwrap_err();
        assert!(matches!(err, crate::Error::UnknownTimeframe(ref t) if t == "2w"));
    }

    #[test]
    fn timeframe_serde_uses_short_tokens() {
        let json = serde_json::to_string(&Timeframe::ThreeMonths).unwrap();
        assert_eq!(json, "\"3m\"");
        let back: Timeframe = serde_json::from_str("\"1y\"").unwrap();
        assert_eq!(back, Timeframe::OneYear);
    }

    #[test]
    fn instrument_serializes_with_decimal_price() {
        let instrument = Instrument {
            symbol: "INFY".to_string(),
            name: "Infosys".to_string(),
            price: dec!(1580.25),
            change_percent: 11.23,
        };
        let json = serde_json::to_string(&instrument).unwrap();
        let back: Instrument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, instrument);
    }

    #[test]
    fn new_trade_keeps_fields_when_assigned_an_id() {
        let new_trade = NewTrade {
            symbol: "RELIANCE".to_string(),
            side: TradeSide::Buy,
            price: dec!(2980.75),
            quantity: 10,
            executed_at: Utc::now(),
            profit_loss: None,
            status: TradeStatus::Open,
        };
        let trade = new_trade.clone().into_trade(42);
        assert_eq!(trade.id, 42);
        assert_eq!(trade.symbol, new_trade.symbol);
        assert_eq!(trade.status, TradeStatus::Open);
    }
}
