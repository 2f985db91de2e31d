use clap::Args;

/// Upper bound on readings requested per fetch. Only the most recent
/// readings inside this window are ever aggregated.
pub const DEFAULT_RESULTS: u32 = 8000;

pub const DEFAULT_BASE_URL: &str = "https://api.thingspeak.com";

/// Connection settings for the upstream ThingSpeak channel
#[derive(Args, Debug, Clone)]
pub struct ThingSpeakConfig {
    /// Channel to read the feed from
    #[clap(long, env = "THINGSPEAK_CHANNEL_ID")]
    pub channel_id: String,

    /// Read API key for the channel
    #[clap(long, env = "THINGSPEAK_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Number of latest readings requested from the feed
    #[clap(long, env = "THINGSPEAK_RESULTS", default_value_t = DEFAULT_RESULTS)]
    pub results: u32,

    #[clap(long, env = "THINGSPEAK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl ThingSpeakConfig {
    pub fn new(channel_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            api_key: api_key.into(),
            results: DEFAULT_RESULTS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_results(mut self, results: u32) -> Self {
        self.results = results;
        self
    }

    pub fn feeds_url(&self) -> String {
        format!(
            "{}/channels/{}/feeds.json",
            self.base_url.trim_end_matches('/'),
            self.channel_id
        )
    }
}
