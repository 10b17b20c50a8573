// In crates/signals/src/lib.rs

use core_types::{Classification, Instrument, Signal};

pub mod error;
pub mod store;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use store::{BUY_THRESHOLDS, SELL_THRESHOLDS, ThresholdStrategyStore};
pub use types::{SignalPartition, StrategyConfig};

/// Classifies a single percentage move against the strategy's thresholds.
///
/// The rules are evaluated in a fixed priority order, first match wins:
/// 1. `change_percent <= buy_threshold`  -> `Buy`
/// 2. `change_percent >= sell_threshold` -> `Sell`
/// 3. otherwise                          -> `Hold`
///
/// With a degenerate config where both thresholds are zero, an exact 0%
/// move classifies as `Buy` because the buy rule fires first. The
/// enumerated option sets never produce that config, but the ordering is
/// deliberate and tested, not incidental.
///
/// The only failure mode is a non-finite input (`NaN` or infinite); bad
/// data must be filtered upstream, not silently compared.
pub fn classify(change_percent: f64, config: &StrategyConfig) -> Result<Classification> {
    if !change_percent.is_finite() {
        return Err(Error::NonFiniteInput(change_percent));
    }

    if change_percent <= config.buy_threshold {
        Ok(Classification::Buy)
    } else if change_percent >= config.sell_threshold {
        Ok(Classification::Sell)
    } else {
        Ok(Classification::Hold)
    }
}

/// Classifies one instrument, pairing it with its classification.
pub fn classify_instrument(instrument: &Instrument, config: &StrategyConfig) -> Result<Signal> {
    let classification = classify(instrument.change_percent, config)?;
    Ok(Signal {
        instrument: instrument.clone(),
        classification,
    })
}

/// Stable-partitions a snapshot sequence into buy/sell/hold buckets.
///
/// Every instrument lands in exactly one bucket and input order is
/// preserved within each bucket, so the three bucket lengths always sum to
/// the input length. An empty input yields three empty buckets.
///
/// A single non-finite `change_percent` fails the whole call: the caller
/// is expected to filter bad data before classification, and a partial
/// partition would hide the defect.
pub fn partition(instruments: &[Instrument], config: &StrategyConfig) -> Result<SignalPartition> {
    let mut buckets = SignalPartition::default();

    for instrument in instruments {
        match classify(instrument.change_percent, config)? {
            Classification::Buy => buckets.buy.push(instrument.clone()),
            Classification::Sell => buckets.sell.push(instrument.clone()),
            Classification::Hold => buckets.hold.push(instrument.clone()),
        }
    }

    Ok(buckets)
}
