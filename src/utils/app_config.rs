use anyhow::{Result, anyhow};
use clap::Parser;
use dotenvy::dotenv;

use crate::api::config::ApiConfig;
use crate::thingspeak::ThingSpeakConfig;

/// Process configuration, read once at startup from flags, the environment
/// and an optional `.env` file.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "daily-averages-relay",
    about = "Serves per-day temperature and humidity averages of a ThingSpeak channel"
)]
pub struct AppConfig {
    #[command(flatten)]
    pub api: ApiConfig,

    #[command(flatten)]
    pub thingspeak: ThingSpeakConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();
        Self::try_parse().map_err(|e| anyhow!(e))
    }
}
