//! Marker classification: events to color buckets, radii, and legend content.

pub mod classifier;
pub mod set;
pub mod severity;

pub use classifier::{classify, marker_radius, MarkerSpec, MAX_RADIUS};
pub use set::{Legend, LegendRow, MarkerSet};
pub use severity::{Rgba, SeverityBucket};
