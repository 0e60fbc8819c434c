//! Fetch the feed and print the legend summary.

use crate::cli::feed_config;
use crate::feed::FeedLoader;
use crate::marker::MarkerSet;
use anyhow::{Context, Result};

/// Fetch the feed and print per-tier counts with their palette colors.
pub async fn run(url: &str, strict: bool, json: bool) -> Result<()> {
    let loader = FeedLoader::new(feed_config(url, strict));
    let events = loader.load().await.context("feed load failed")?;
    let legend = MarkerSet::from_events(&events).legend();

    if json {
        println!("{}", serde_json::to_string_pretty(&legend)?);
        return Ok(());
    }

    for row in &legend.rows {
        let c = row.color;
        println!(
            "{:>20}  rgba({:>3},{:>3},{:>3},{:>3})  {}",
            row.label, c.r, c.g, c.b, c.a, row.count
        );
    }
    println!("{} earthquakes total", legend.total);
    Ok(())
}
