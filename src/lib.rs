//! seismap — earthquake feed to classified map markers.
//!
//! Fetches a USGS Atom + GeoRSS earthquake feed once at startup, parses each
//! entry into an immutable [`feed::EarthquakeEvent`], and derives per-event
//! visual encodings (severity color bucket by magnitude, radius by depth) for
//! an external map-widget collaborator to draw. Map rendering, projection,
//! and windowing stay outside this crate.

pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod marker;

pub use config::{FeedConfig, ParsePolicy, DEFAULT_FEED_URL};
pub use error::FeedError;
pub use feed::{EarthquakeEvent, FeedLoader, GeoPoint};
pub use marker::{MarkerSet, MarkerSpec, SeverityBucket};
