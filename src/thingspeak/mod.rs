pub mod client;
pub mod config;
pub mod wire_types;

pub use client::ThingSpeakClient;
pub use config::ThingSpeakConfig;
pub use wire_types::{FeedEntry, FeedResponse};
