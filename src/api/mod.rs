pub mod config;
pub mod error;
pub mod handlers;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::aggregators::DailyAggregator;
use handlers::{daily_averages::get_daily_averages, health::health, not_found};

/// Build the relay's router with the aggregator as shared state
pub fn router(aggregator: DailyAggregator) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/daily-averages", get(get_daily_averages))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        // Frontend is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(aggregator)
}
