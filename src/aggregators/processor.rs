use anyhow::{Context, Result};

use crate::aggregators::daily::{DailyAverage, aggregate_daily};
use crate::thingspeak::{ThingSpeakClient, ThingSpeakConfig};

/// Fetches the channel feed and reduces it to per-day averages.
///
/// Holds no aggregation state between calls; every call re-fetches and
/// re-aggregates from scratch.
#[derive(Clone, Debug)]
pub struct DailyAggregator {
    client: ThingSpeakClient,
}

impl DailyAggregator {
    pub fn new(client: ThingSpeakClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: ThingSpeakConfig) -> Self {
        Self::new(ThingSpeakClient::new(config))
    }

    pub async fn daily_averages(&self) -> Result<Vec<DailyAverage>> {
        let feeds = self.client.fetch_latest().await?;
        let daily = aggregate_daily(&feeds).context("Failed to aggregate channel feed")?;

        tracing::debug!(
            readings = feeds.len(),
            days = daily.len(),
            "Aggregated channel feed"
        );

        Ok(daily)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_upstream, unreachable_base_url};
    use axum::{Json, Router, routing::get};
    use serde_json::json;

    async fn aggregator_for(router: Router) -> Result<DailyAggregator> {
        let base_url = spawn_upstream(router).await?;
        Ok(DailyAggregator::from_config(
            ThingSpeakConfig::new("100", "KEY").with_base_url(base_url),
        ))
    }

    #[tokio::test]
    async fn test_daily_averages_from_upstream() -> Result<()> {
        let router = Router::new().route(
            "/channels/:channel/feeds.json",
            get(|| async {
                Json(json!({
                    "channel": { "id": 100 },
                    "feeds": [
                        { "created_at": "2024-01-01T10:00:00Z", "entry_id": 1, "field1": "20", "field2": "50" },
                        { "created_at": "2024-01-01T22:00:00Z", "entry_id": 2, "field1": "22", "field2": "" },
                        { "created_at": "2024-01-02T01:00:00Z", "entry_id": 3, "field1": "abc", "field2": "40" },
                        { "created_at": "2024-01-03T09:00:00Z", "entry_id": 4, "field1": "10.005", "field2": "30" },
                        { "created_at": "2024-01-03T10:00:00Z", "entry_id": 5, "field1": "0", "field2": "30" },
                        { "created_at": "2024-01-03T11:00:00Z", "entry_id": 6, "field1": "0", "field2": "30" }
                    ]
                }))
            }),
        );
        let aggregator = aggregator_for(router).await?;

        let daily = aggregator.daily_averages().await?;

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].date, "2024-01-01");
        assert_eq!(daily[0].avg_temp, 21.0);
        assert_eq!(daily[0].avg_humidity, 25.0);
        assert_eq!(daily[1].date, "2024-01-03");
        assert_eq!(daily[1].avg_temp, 3.34);
        assert_eq!(daily[1].avg_humidity, 30.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() -> Result<()> {
        let router = Router::new().route(
            "/channels/:channel/feeds.json",
            get(|| async {
                Json(json!({
                    "feeds": [
                        { "created_at": "2024-04-01T10:00:00Z", "field1": "12.345", "field2": "67.891" },
                        { "created_at": "2024-04-02T10:00:00Z", "field1": "13", "field2": "70" }
                    ]
                }))
            }),
        );
        let aggregator = aggregator_for(router).await?;

        let first = aggregator.daily_averages().await?;
        let second = aggregator.daily_averages().await?;
        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn test_odd_entry_metadata_still_aggregates() -> Result<()> {
        let router = Router::new().route(
            "/channels/:channel/feeds.json",
            get(|| async {
                Json(json!({
                    "feeds": [
                        { "created_at": "2024-07-01T08:00:00Z", "entry_id": "7", "field1": "20", "field2": "40" },
                        { "created_at": "2024-07-01T09:00:00Z", "entry_id": 8, "field1": "22", "field2": "60" },
                        { "created_at": 1719824400, "entry_id": 9, "field1": "99", "field2": "99" }
                    ]
                }))
            }),
        );
        let aggregator = aggregator_for(router).await?;

        let daily = aggregator.daily_averages().await?;

        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].date, "2024-07-01");
        assert_eq!(daily[0].avg_temp, 21.0);
        assert_eq!(daily[0].avg_humidity, 50.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_upstream_failure_is_an_error() -> Result<()> {
        let aggregator = DailyAggregator::from_config(
            ThingSpeakConfig::new("100", "KEY").with_base_url(unreachable_base_url().await?),
        );

        assert!(aggregator.daily_averages().await.is_err());
        Ok(())
    }
}
