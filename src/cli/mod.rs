//! CLI subcommand implementations for the seismap binary.

pub mod fetch_cmd;
pub mod legend_cmd;

use crate::config::FeedConfig;

/// Build a feed config from the shared CLI flags.
pub fn feed_config(url: &str, strict: bool) -> FeedConfig {
    let cfg = FeedConfig::with_url(url);
    if strict {
        cfg.strict()
    } else {
        cfg
    }
}
