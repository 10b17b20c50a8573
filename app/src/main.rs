// In app/src/main.rs

use anyhow::Result;
use app_config::Settings;
use clap::{Parser, Subcommand};
use commentary::MockAnalyst;
use core_types::{Signal, Timeframe};
use market_data::{MarketDataProvider, MockLatency, MockProvider};
use signals::{StrategyConfig, ThresholdStrategyStore};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use web_server::AppState;

/// Simulated round-trip for the mock analyst, matching the original AI
/// panel's artificial delay.
const ANALYST_DELAY_MS: u64 = 1200;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Trading dashboard backend for Indian equity markets."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs the HTTP API for the dashboard frontend.
    Serve,

    /// Prints the watchlist's buy/sell/hold signals as JSON and exits.
    Signals {
        /// Timeframe token (e.g., "1d", "1w"). Defaults to the configured
        /// strategy's timeframe.
        #[arg(short, long)]
        timeframe: Option<String>,
    },
}

// --- Main Application Entry Point ---

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    let settings = app_config::load_settings()?;

    // RUST_LOG wins when set; otherwise fall back to the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.app.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Parse command-line arguments.
    let cli = Cli::parse();

    tracing::info!(environment = %settings.app.environment, "Starting TradeDesk application");

    match cli.command {
        Commands::Serve => run_server(settings).await?,
        Commands::Signals { timeframe } => run_signals(settings, timeframe).await?,
    }

    Ok(())
}

/// Builds the session's strategy store from the configured defaults,
/// rejecting values outside the editor's enumerated option sets.
fn build_store(settings: &Settings) -> Result<ThresholdStrategyStore> {
    let config = StrategyConfig {
        buy_threshold: settings.strategy.buy_threshold,
        sell_threshold: settings.strategy.sell_threshold,
        timeframe: Timeframe::parse(&settings.strategy.timeframe)?,
    };
    Ok(ThresholdStrategyStore::from_config(config)?)
}

async fn run_server(settings: Settings) -> Result<()> {
    let store = build_store(&settings)?;

    let latency = if settings.market_data.simulate_latency {
        settings.market_data.latency.clone()
    } else {
        MockLatency::zero()
    };
    let analyst_delay = if settings.market_data.simulate_latency {
        Duration::from_millis(ANALYST_DELAY_MS)
    } else {
        Duration::ZERO
    };

    let app_state = AppState {
        store: Arc::new(Mutex::new(store)),
        market_data: Arc::new(MockProvider::new(latency)),
        commentary: Arc::new(MockAnalyst::new(analyst_delay)),
    };

    web_server::run(&settings.server, app_state).await?;
    Ok(())
}

/// One-shot terminal view of the current signal picture: classifies the
/// watchlist with the configured strategy and prints the result as JSON.
async fn run_signals(settings: Settings, timeframe: Option<String>) -> Result<()> {
    let store = build_store(&settings)?;
    let mut config = store.get();
    if let Some(token) = timeframe {
        config.timeframe = Timeframe::parse(&token)?;
    }

    // No point simulating network delay for a one-shot dump.
    let provider = MockProvider::new(MockLatency::zero());
    let instruments = provider.fetch_watchlist(config.timeframe).await?;

    let flat: Vec<Signal> = instruments
        .iter()
        .map(|instrument| signals::classify_instrument(instrument, &config))
        .collect::<signals::Result<_>>()?;
    let buckets = signals::partition(&instruments, &config)?;

    let output = serde_json::json!({
        "config": config,
        "signals": flat,
        "summary": {
            "buy": buckets.buy.len(),
            "sell": buckets.sell.len(),
            "hold": buckets.hold.len(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
