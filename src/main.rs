use std::env;

use daily_averages_relay::{aggregators::DailyAggregator, api, utils::app_config::AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Also reads `.env`, including RUST_LOG
    let app_config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    tracing::info!("Application configuration loaded successfully");
    tracing::info!(
        channel = %app_config.thingspeak.channel_id,
        "Aggregating at most the latest {} readings per request",
        app_config.thingspeak.results
    );

    let aggregator = DailyAggregator::from_config(app_config.thingspeak.clone());
    let router = api::router(aggregator);

    let addr = app_config.api.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server running on http://localhost:{}", app_config.api.port);

    axum::serve(listener, router).await?;

    Ok(())
}
