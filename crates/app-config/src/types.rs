// In crates/app-config/src/types.rs

use market_data::MockLatency;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    pub server: ServerSettings,
    #[serde(default)]
    pub market_data: MarketDataSettings,
    #[serde(default)]
    pub strategy: StrategyDefaults,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    pub environment: String,
    /// The log level for the application.
    pub log_level: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Settings for the mock market-data provider.
#[derive(Deserialize, Debug, Clone)]
pub struct MarketDataSettings {
    /// When false, the mock answers immediately instead of simulating
    /// per-endpoint network delay. Tests and the one-shot CLI disable it.
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,
    /// Per-endpoint delays in milliseconds; any subset may be overridden,
    /// the rest keep the original dashboard's values.
    #[serde(default)]
    pub latency: MockLatency,
}

impl Default for MarketDataSettings {
    fn default() -> Self {
        Self {
            simulate_latency: default_simulate_latency(),
            latency: MockLatency::default(),
        }
    }
}

/// The threshold strategy the store starts each session with. Values must
/// come from the editor's enumerated option sets; the store rejects
/// anything else at startup.
#[derive(Deserialize, Debug, Clone)]
pub struct StrategyDefaults {
    #[serde(default = "default_buy_threshold")]
    pub buy_threshold: f64,
    #[serde(default = "default_sell_threshold")]
    pub sell_threshold: f64,
    #[serde(default = "default_timeframe")]
    pub timeframe: String,
}

impl Default for StrategyDefaults {
    fn default() -> Self {
        Self {
            buy_threshold: default_buy_threshold(),
            sell_threshold: default_sell_threshold(),
            timeframe: default_timeframe(),
        }
    }
}

// Helper functions for serde defaults.
fn default_simulate_latency() -> bool { true }
fn default_buy_threshold() -> f64 { -5.0 }
fn default_sell_threshold() -> f64 { 10.0 }
fn default_timeframe() -> String { "1d".to_string() }

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn settings_from(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn minimal_settings_fill_in_defaults() {
        let settings = settings_from(
            r#"
            [app]
            environment = "test"
            log_level = "info"

            [server]
            host = "127.0.0.1"
            port = 0
            "#,
        );
        assert!(settings.market_data.simulate_latency);
        assert_eq!(settings.market_data.latency.watchlist_ms, 600);
        assert_eq!(settings.strategy.buy_threshold, -5.0);
        assert_eq!(settings.strategy.timeframe, "1d");
    }

    #[test]
    fn partial_latency_table_overrides_only_named_endpoints() {
        let settings = settings_from(
            r#"
            [app]
            environment = "test"
            log_level = "info"

            [server]
            host = "127.0.0.1"
            port = 0

            [market_data]
            simulate_latency = true

            [market_data.latency]
            watchlist_ms = 50
            add_trade_ms = 25
            "#,
        );
        let latency = &settings.market_data.latency;
        assert_eq!(latency.watchlist_ms, 50);
        assert_eq!(latency.add_trade_ms, 25);
        // Endpoints the table does not name keep their defaults.
        assert_eq!(latency.market_summary_ms, 800);
        assert_eq!(latency.journal_ms, 650);
    }
}
