// In crates/web-server/src/lib.rs

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use commentary::{Commentary, CommentaryContext, CommentaryProvider};
use core_types::{
    IndexSummary, Instrument, JournalEntry, NewJournalEntry, NewTrade, StrategyDoc, Timeframe,
    Trade,
};
use market_data::MarketDataProvider;
use signals::{SignalPartition, StrategyConfig, ThresholdStrategyStore};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use types::{AnalysisRequest, SignalsResponse, StrategyUpdate, TimeframeParams};

use app_config::ServerSettings;

pub mod error;
pub mod types;

// Re-export our custom error type for convenience.
pub use error::{Error, Result};

const DEFAULT_INDEX: &str = "NIFTY 50";

/// The shared application state that is available to all API handlers.
///
/// The strategy store is the one piece of mutable state; it sits behind a
/// mutex because the server hosts the single-session store in a
/// multi-request process. Both collaborators are trait objects so a real
/// feed or a real analyst can be swapped in without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ThresholdStrategyStore>>,
    pub market_data: Arc<dyn MarketDataProvider>,
    pub commentary: Arc<dyn CommentaryProvider>,
}

impl AppState {
    fn current_config(&self) -> StrategyConfig {
        self.store.lock().unwrap().get()
    }
}

/// Creates the main application router with all routes and middleware.
pub fn create_router(app_state: AppState) -> Router {
    // Permissive CORS for development; the dashboard frontend runs on its
    // own origin.
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    // Define the API sub-router.
    let api_router = Router::new()
        .route("/watchlist", get(get_watchlist_handler))
        .route("/market-summary", get(get_market_summary_handler))
        .route("/signals", get(get_signals_handler))
        .route(
            "/strategy",
            get(get_strategy_handler).put(update_strategy_handler),
        )
        .route("/trades", get(get_trades_handler).post(add_trade_handler))
        .route(
            "/journal",
            get(get_journal_handler).post(add_journal_entry_handler),
        )
        .route("/strategies", get(get_strategies_handler))
        .route("/analysis", post(run_analysis_handler));

    // The main router.
    Router::new()
        .route("/health", get(health_check_handler))
        .nest("/api", api_router)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// A simple health check handler.
async fn health_check_handler() -> &'static str {
    "OK"
}

/// Handler for `GET /api/watchlist`.
/// Returns the instrument snapshots for the requested (or current) timeframe.
async fn get_watchlist_handler(
    State(state): State<AppState>,
    Query(params): Query<TimeframeParams>,
) -> Result<Json<Vec<Instrument>>> {
    let timeframe = params
        .timeframe
        .unwrap_or_else(|| state.current_config().timeframe);
    let instruments = state.market_data.fetch_watchlist(timeframe).await?;
    Ok(Json(instruments))
}

/// Handler for `GET /api/market-summary`.
async fn get_market_summary_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<IndexSummary>>> {
    let summary = state.market_data.fetch_market_summary().await?;
    Ok(Json(summary))
}

/// Handler for `GET /api/signals`.
/// Fetches the watchlist and partitions it with the current strategy.
async fn get_signals_handler(
    State(state): State<AppState>,
    Query(params): Query<TimeframeParams>,
) -> Result<Json<SignalsResponse>> {
    let mut config = state.current_config();
    if let Some(timeframe) = params.timeframe {
        config.timeframe = timeframe;
    }

    let instruments = state.market_data.fetch_watchlist(config.timeframe).await?;
    let partition = signals::partition(&instruments, &config)?;

    tracing::debug!(
        buys = partition.buy.len(),
        sells = partition.sell.len(),
        holds = partition.hold.len(),
        "partitioned watchlist"
    );
    Ok(Json(SignalsResponse { config, partition }))
}

/// Handler for `GET /api/strategy`.
async fn get_strategy_handler(State(state): State<AppState>) -> Result<Json<StrategyConfig>> {
    Ok(Json(state.current_config()))
}

/// Handler for `PUT /api/strategy`.
/// Applies a partial update; rejected values leave the store untouched.
async fn update_strategy_handler(
    State(state): State<AppState>,
    Json(update): Json<StrategyUpdate>,
) -> Result<Json<StrategyConfig>> {
    let mut store = state.store.lock().unwrap();
    let updated = apply_update(&mut store, &update)?;
    tracing::info!(
        buy_threshold = updated.buy_threshold,
        sell_threshold = updated.sell_threshold,
        timeframe = %updated.timeframe,
        "strategy updated"
    );
    Ok(Json(updated))
}

/// Applies a partial update atomically: all supplied fields are validated
/// against a draft copy of the store, and the store is only replaced when
/// every one of them was accepted.
fn apply_update(
    store: &mut ThresholdStrategyStore,
    update: &StrategyUpdate,
) -> Result<StrategyConfig> {
    let mut draft = store.clone();
    if let Some(value) = update.buy_threshold {
        draft.set_buy_threshold(value)?;
    }
    if let Some(value) = update.sell_threshold {
        draft.set_sell_threshold(value)?;
    }
    if let Some(token) = &update.timeframe {
        draft.set_timeframe(token)?;
    }
    *store = draft;
    Ok(store.get())
}

/// Handler for `GET /api/trades`.
async fn get_trades_handler(State(state): State<AppState>) -> Result<Json<Vec<Trade>>> {
    Ok(Json(state.market_data.fetch_trades().await?))
}

/// Handler for `POST /api/trades`.
async fn add_trade_handler(
    State(state): State<AppState>,
    Json(new_trade): Json<NewTrade>,
) -> Result<Json<Trade>> {
    Ok(Json(state.market_data.add_trade(new_trade).await?))
}

/// Handler for `GET /api/journal`.
async fn get_journal_handler(State(state): State<AppState>) -> Result<Json<Vec<JournalEntry>>> {
    Ok(Json(state.market_data.fetch_journal_entries().await?))
}

/// Handler for `POST /api/journal`.
async fn add_journal_entry_handler(
    State(state): State<AppState>,
    Json(new_entry): Json<NewJournalEntry>,
) -> Result<Json<JournalEntry>> {
    Ok(Json(state.market_data.add_journal_entry(new_entry).await?))
}

/// Handler for `GET /api/strategies`.
/// Returns the saved strategy documents for the editor.
async fn get_strategies_handler(State(state): State<AppState>) -> Result<Json<Vec<StrategyDoc>>> {
    Ok(Json(state.market_data.fetch_strategies().await?))
}

/// Handler for `POST /api/analysis`.
/// Partitions the current watchlist and asks the commentary provider for
/// its read on the resulting signal picture.
async fn run_analysis_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<Commentary>> {
    let config = state.current_config();
    let timeframe = match &request.timeframe {
        Some(token) => Timeframe::parse(token)?,
        None => config.timeframe,
    };
    let index_name = request
        .index_name
        .unwrap_or_else(|| DEFAULT_INDEX.to_string());

    let instruments = state.market_data.fetch_watchlist(timeframe).await?;
    let partition: SignalPartition = signals::partition(&instruments, &config)?;
    let context = CommentaryContext::from_partition(index_name, timeframe, &partition);

    let commentary = state.commentary.generate_commentary(&context).await?;
    Ok(Json(commentary))
}

/// The main entry point for running the web server.
///
/// This function sets up the TCP listener and serves the application router.
/// It will run until the process is terminated.
pub async fn run(settings: &ServerSettings, app_state: AppState) -> Result<()> {
    let app = create_router(app_state);

    let address = format!("{}:{}", settings.host, settings.port);
    tracing::info!("Web server listening on {}", address);

    let listener = TcpListener::bind(&address)
        .await
        .map_err(Error::ServerBindError)?;

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(Error::ServerBindError)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_changes_only_supplied_fields() {
        let mut store = ThresholdStrategyStore::new();
        let update = StrategyUpdate {
            sell_threshold: Some(15.0),
            ..StrategyUpdate::default()
        };
        let config = apply_update(&mut store, &update).unwrap();
        assert_eq!(config.sell_threshold, 15.0);
        assert_eq!(config.buy_threshold, -5.0);
        assert_eq!(config.timeframe, Timeframe::OneDay);
    }

    #[test]
    fn rejected_update_leaves_store_untouched() {
        let mut store = ThresholdStrategyStore::new();
        // The buy threshold is valid, the sell threshold is not; neither
        // may be applied.
        let update = StrategyUpdate {
            buy_threshold: Some(-10.0),
            sell_threshold: Some(11.0),
            timeframe: None,
        };
        assert!(apply_update(&mut store, &update).is_err());
        let config = store.get();
        assert_eq!(config.buy_threshold, -5.0);
        assert_eq!(config.sell_threshold, 10.0);
    }

    #[test]
    fn full_update_applies_all_fields() {
        let mut store = ThresholdStrategyStore::new();
        let update = StrategyUpdate {
            buy_threshold: Some(-7.0),
            sell_threshold: Some(20.0),
            timeframe: Some("1y".to_string()),
        };
        let config = apply_update(&mut store, &update).unwrap();
        assert_eq!(config.buy_threshold, -7.0);
        assert_eq!(config.sell_threshold, 20.0);
        assert_eq!(config.timeframe, Timeframe::OneYear);
    }

    #[test]
    fn bad_timeframe_token_rejects_whole_update() {
        let mut store = ThresholdStrategyStore::new();
        let update = StrategyUpdate {
            buy_threshold: Some(-15.0),
            sell_threshold: None,
            timeframe: Some("5d".to_string()),
        };
        assert!(apply_update(&mut store, &update).is_err());
        assert_eq!(store.get().buy_threshold, -5.0);
    }
}
