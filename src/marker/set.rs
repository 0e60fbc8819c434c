//! Cached marker list derived once from the immutable event list.

use crate::feed::event::{EarthquakeEvent, GeoPoint};
use crate::marker::classifier::{classify, MarkerSpec};
use crate::marker::severity::{Rgba, SeverityBucket};
use serde::Serialize;

/// The full set of classified markers for one feed load.
///
/// Computed once after parsing and read-only thereafter; every redraw and
/// pointer query works against this cache instead of reclassifying events.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerSet {
    markers: Vec<MarkerSpec>,
}

/// One legend row: a severity tier with its color and how many markers
/// currently fall into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendRow {
    pub bucket: SeverityBucket,
    pub label: &'static str,
    pub color: Rgba,
    pub count: usize,
}

/// Legend content for the GUI collaborator to draw: one row per tier in
/// ascending severity order, plus the total marker count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub rows: Vec<LegendRow>,
    pub total: usize,
}

impl MarkerSet {
    /// Classify every event once, preserving feed order.
    pub fn from_events(events: &[EarthquakeEvent]) -> Self {
        Self {
            markers: events.iter().map(classify).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Ordered marker specs for the map collaborator.
    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }

    /// Look up the marker at a geographic location (popup content query).
    ///
    /// The GUI collaborator resolves pointer position to a geo location via
    /// its own hit testing; this answers "what is here" against the cache.
    pub fn at(&self, location: GeoPoint) -> Option<&MarkerSpec> {
        self.markers.iter().find(|m| m.location == location)
    }

    /// Count markers in one severity tier.
    pub fn count_in(&self, bucket: SeverityBucket) -> usize {
        self.markers.iter().filter(|m| m.bucket == bucket).count()
    }

    /// Build the legend: per-tier counts in ascending severity order.
    pub fn legend(&self) -> Legend {
        let rows = SeverityBucket::ALL
            .iter()
            .map(|&bucket| LegendRow {
                bucket,
                label: bucket.label(),
                color: bucket.color(),
                count: self.count_in(bucket),
            })
            .collect();
        Legend {
            rows,
            total: self.markers.len(),
        }
    }
}
