//! Feed acquisition and parsing: feed document in, earthquake events out.

pub mod event;
pub mod georss;
pub mod http_client;

pub use event::{EarthquakeEvent, GeoPoint};

use crate::config::FeedConfig;
use crate::error::FeedError;
use tracing::info;

/// Fetch-once feed loader.
///
/// Retrieves the configured feed URL a single time and parses it into the
/// session-lifetime event list. There is no re-poll or background refresh;
/// callers own the returned events for the rest of the session.
pub struct FeedLoader {
    config: FeedConfig,
    client: http_client::HttpClient,
}

impl FeedLoader {
    pub fn new(config: FeedConfig) -> Self {
        let client = http_client::HttpClient::new(config.timeout);
        Self { config, client }
    }

    /// Fetch the feed and parse it into events.
    pub async fn load(&self) -> Result<Vec<EarthquakeEvent>, FeedError> {
        let body = self.client.get_text(&self.config.url).await?;
        let events = georss::parse_feed(&body, self.config.policy)?;
        info!(url = %self.config.url, events = events.len(), "feed loaded");
        Ok(events)
    }

    /// Parse an already-retrieved feed document (offline / fixture path).
    pub fn load_str(&self, xml: &str) -> Result<Vec<EarthquakeEvent>, FeedError> {
        georss::parse_feed(xml, self.config.policy)
    }
}
