use axum::{Json, extract::State, http::StatusCode};

use crate::{
    aggregators::{DailyAggregator, DailyAverage},
    api::error::ApiError,
};

/// GET /api/daily-averages - Per-day temperature and humidity averages
pub async fn get_daily_averages(
    State(aggregator): State<DailyAggregator>,
) -> Result<(StatusCode, Json<Vec<DailyAverage>>), ApiError> {
    let daily = aggregator
        .daily_averages()
        .await
        .map_err(|e| ApiError::upstream_failure(format!("{:#}", e)))?;

    Ok((StatusCode::OK, Json(daily)))
}
