// In crates/signals/src/store.rs

use crate::types::StrategyConfig;
use crate::{Error, Result};
use core_types::Timeframe;

/// The buy-threshold options offered by the strategy editor.
pub const BUY_THRESHOLDS: [f64; 5] = [-3.0, -5.0, -7.0, -10.0, -15.0];

/// The sell-threshold options offered by the strategy editor.
pub const SELL_THRESHOLDS: [f64; 5] = [5.0, 7.0, 10.0, 15.0, 20.0];

/// Owns the current `StrategyConfig` and exposes controlled mutation.
///
/// Setters validate against the enumerated option sets and leave the prior
/// valid config untouched on failure, so the store never holds a config the
/// editor could not have produced. One store lives per interactive session;
/// single-writer, single-reader, so there is no locking here. Hosting it
/// behind a mutex is the web layer's concern.
#[derive(Debug, Clone)]
pub struct ThresholdStrategyStore {
    config: StrategyConfig,
}

impl Default for ThresholdStrategyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThresholdStrategyStore {
    /// Creates a store holding the default strategy (-5% buy, +10% sell, 1d).
    pub fn new() -> Self {
        Self {
            config: StrategyConfig::default(),
        }
    }

    /// Creates a store from an externally supplied config (e.g., settings
    /// defaults), rejecting thresholds outside the enumerated sets so a
    /// typo in a config file cannot smuggle in an unselectable strategy.
    pub fn from_config(config: StrategyConfig) -> Result<Self> {
        if !BUY_THRESHOLDS.contains(&config.buy_threshold) {
            return Err(Error::InvalidBuyThreshold(config.buy_threshold));
        }
        if !SELL_THRESHOLDS.contains(&config.sell_threshold) {
            return Err(Error::InvalidSellThreshold(config.sell_threshold));
        }
        Ok(Self { config })
    }

    /// Returns a snapshot of the current config. `StrategyConfig` is `Copy`,
    /// so callers cannot reach back into the store through the return value.
    pub fn get(&self) -> StrategyConfig {
        self.config
    }

    pub fn set_buy_threshold(&mut self, value: f64) -> Result<()> {
        if !BUY_THRESHOLDS.contains(&value) {
            return Err(Error::InvalidBuyThreshold(value));
        }
        self.config.buy_threshold = value;
        Ok(())
    }

    pub fn set_sell_threshold(&mut self, value: f64) -> Result<()> {
        if !SELL_THRESHOLDS.contains(&value) {
            return Err(Error::InvalidSellThreshold(value));
        }
        self.config.sell_threshold = value;
        Ok(())
    }

    /// Sets the timeframe from its token form (e.g., "1w"). Unknown tokens
    /// are rejected and the current timeframe is kept.
    pub fn set_timeframe(&mut self, token: &str) -> Result<()> {
        self.config.timeframe = Timeframe::parse(token)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_holds_the_documented_defaults() {
        let config = ThresholdStrategyStore::new().get();
        assert_eq!(config.buy_threshold, -5.0);
        assert_eq!(config.sell_threshold, 10.0);
        assert_eq!(config.timeframe, Timeframe::OneDay);
    }

    #[test]
    fn every_enumerated_option_is_accepted() {
        let mut store = ThresholdStrategyStore::new();
        for value in BUY_THRESHOLDS {
            store.set_buy_threshold(value).unwrap();
            assert_eq!(store.get().buy_threshold, value);
        }
        for value in SELL_THRESHOLDS {
            store.set_sell_threshold(value).unwrap();
            assert_eq!(store.get().sell_threshold, value);
        }
    }

    #[test]
    fn out_of_set_buy_threshold_is_rejected_and_state_retained() {
        let mut store = ThresholdStrategyStore::new();
        let err = store.set_buy_threshold(-4.0).unwrap_err();
        assert!(matches!(err, Error::InvalidBuyThreshold(v) if v == -4.0));
        assert_eq!(store.get().buy_threshold, -5.0);
    }

    #[test]
    fn out_of_set_sell_threshold_is_rejected_and_state_retained() {
        let mut store = ThresholdStrategyStore::new();
        store.set_sell_threshold(15.0).unwrap();
        let err = store.set_sell_threshold(11.0).unwrap_err();
        assert!(matches!(err, Error::InvalidSellThreshold(v) if v == 11.0));
        assert_eq!(store.get().sell_threshold, 15.0);
    }

    #[test]
    fn positive_value_is_not_a_valid_buy_threshold() {
        let mut store = ThresholdStrategyStore::new();
        assert!(store.set_buy_threshold(5.0).is_err());
    }

    #[test]
    fn timeframe_setter_parses_tokens_and_rejects_junk() {
        let mut store = ThresholdStrategyStore::new();
        store.set_timeframe("6m").unwrap();
        assert_eq!(store.get().timeframe, Timeframe::SixMonths);

        assert!(store.set_timeframe("fortnight").is_err());
        assert_eq!(store.get().timeframe, Timeframe::SixMonths);
    }

    #[test]
    fn snapshot_is_a_copy_not_a_view() {
        let mut store = ThresholdStrategyStore::new();
        let before = store.get();
        store.set_buy_threshold(-15.0).unwrap();
        // The earlier snapshot is unaffected by the later mutation.
        assert_eq!(before.buy_threshold, -5.0);
    }

    #[test]
    fn from_config_rejects_unselectable_defaults() {
        let config = StrategyConfig {
            buy_threshold: -4.0,
            ..StrategyConfig::default()
        };
        assert!(ThresholdStrategyStore::from_config(config).is_err());

        let valid = StrategyConfig {
            buy_threshold: -10.0,
            sell_threshold: 20.0,
            timeframe: Timeframe::OneWeek,
        };
        let store = ThresholdStrategyStore::from_config(valid).unwrap();
        assert_eq!(store.get(), valid);
    }
}
