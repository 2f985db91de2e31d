use anyhow::{Context, Result};
use reqwest::Client;

use crate::thingspeak::{
    config::ThingSpeakConfig,
    wire_types::{FeedEntry, FeedResponse},
};

/// Reads the latest readings of one ThingSpeak channel
#[derive(Clone, Debug)]
pub struct ThingSpeakClient {
    http: Client,
    config: ThingSpeakConfig,
}

impl ThingSpeakClient {
    pub fn new(config: ThingSpeakConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Fetch the most recent `results` readings of the channel.
    ///
    /// Transport errors, non-success statuses and bodies without a `feeds`
    /// array are all returned as errors. No retry is attempted.
    pub async fn fetch_latest(&self) -> Result<Vec<FeedEntry>> {
        let url = self.config.feeds_url();
        let results = self.config.results.to_string();

        tracing::debug!(channel = %self.config.channel_id, results = %results, "Requesting channel feed");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("results", results.as_str()),
            ])
            .send()
            .await
            .with_context(|| format!("Request to channel {} failed", self.config.channel_id))?
            .error_for_status()
            .context("Feed request returned an error status")?;

        let body = response
            .json::<FeedResponse>()
            .await
            .context("Feed response was not a valid feeds payload")?;

        Ok(body.feeds)
    }
}
