//! Fetch the feed and print the classified marker list.

use crate::cli::feed_config;
use crate::feed::FeedLoader;
use crate::marker::MarkerSet;
use anyhow::{Context, Result};

/// Fetch, parse, classify, and print markers as JSON or a plain table.
pub async fn run(url: &str, strict: bool, json: bool) -> Result<()> {
    let loader = FeedLoader::new(feed_config(url, strict));
    let events = loader.load().await.context("feed load failed")?;
    let set = MarkerSet::from_events(&events);

    if json {
        println!("{}", serde_json::to_string_pretty(set.markers())?);
        return Ok(());
    }

    println!(
        "{:>9}  {:>9}  {:>5}  {:>8}  {:>7}  bucket",
        "lat", "lon", "mag", "depth_km", "radius"
    );
    for m in set.markers() {
        let mag = m
            .magnitude
            .map(|v| format!("{v:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>9.4}  {:>9.4}  {:>5}  {:>8.1}  {:>7.2}  {}",
            m.location.lat,
            m.location.lon,
            mag,
            m.depth_km,
            m.radius,
            m.bucket.label()
        );
    }
    println!("{} markers", set.len());
    Ok(())
}
