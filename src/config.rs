//! Feed source configuration.

use std::time::Duration;

/// USGS "magnitude 4.5+, past day" Atom feed with GeoRSS extensions.
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/4.5_day.atom";

/// How to treat malformed numeric fields inside otherwise valid entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Abort the whole feed load on the first malformed magnitude, depth,
    /// or coordinate value.
    Strict,
    /// Degrade per field: drop the magnitude, zero the depth, or skip the
    /// entry (coordinates), and keep parsing the rest of the feed.
    #[default]
    Lenient,
}

/// Configuration for a single feed load.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Feed URL to fetch once at startup.
    pub url: String,
    /// Malformed-field handling.
    pub policy: ParsePolicy,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            policy: ParsePolicy::default(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl FeedConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn strict(mut self) -> Self {
        self.policy = ParsePolicy::Strict;
        self
    }
}
