//! Per-event visual encoding: severity color by magnitude, radius by depth.

use crate::feed::event::{EarthquakeEvent, GeoPoint};
use crate::marker::severity::{Rgba, SeverityBucket};
use serde::{Deserialize, Serialize};

/// Radius cap in screen units. Applied where the depth scaling formula blows
/// up (depth at or below 1 km) and to the near-1 region where it exceeds the
/// cap; shallower quakes simply draw at the maximum size.
pub const MAX_RADIUS: f64 = 100.0;

/// Marker radius from hypocenter depth: `(1 / ln(depth_km)) * 50`.
///
/// The raw formula is undefined at 1 km (division by zero) and negative below
/// it, so depths of 1 km or less are clamped to [`MAX_RADIUS`]. For all
/// deeper values the result is positive and strictly decreasing with depth.
pub fn marker_radius(depth_km: f64) -> f64 {
    if depth_km <= 1.0 {
        return MAX_RADIUS;
    }
    ((1.0 / depth_km.ln()) * 50.0).min(MAX_RADIUS)
}

/// Everything the map collaborator needs to draw one marker, plus the raw
/// magnitude/depth/title carried through for popup content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub location: GeoPoint,
    pub bucket: SeverityBucket,
    pub color: Rgba,
    pub radius: f64,
    pub magnitude: Option<f64>,
    pub depth_km: f64,
    pub title: Option<String>,
}

/// Derive the visual encoding for one event. Pure; recomputable at will.
///
/// Events without an extractable magnitude classify as micro, matching the
/// source behavior of an unset magnitude property reading as zero.
pub fn classify(event: &EarthquakeEvent) -> MarkerSpec {
    let bucket = SeverityBucket::from_magnitude(event.magnitude.unwrap_or(0.0));
    MarkerSpec {
        location: event.location,
        bucket,
        color: bucket.color(),
        radius: marker_radius(event.depth_km),
        magnitude: event.magnitude,
        depth_km: event.depth_km,
        title: event.title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(magnitude: Option<f64>, depth_km: f64) -> EarthquakeEvent {
        EarthquakeEvent {
            location: GeoPoint::new(34.05, -118.25),
            title: magnitude.map(|m| format!("M {m:.1} - test region")),
            magnitude,
            depth_km,
        }
    }

    #[test]
    fn test_radius_formula_for_deep_events() {
        // Exact formula wherever it is well-behaved.
        let d = 12.0_f64;
        assert!((marker_radius(d) - (1.0 / d.ln()) * 50.0).abs() < 1e-12);
        let d = 550.0_f64;
        assert!((marker_radius(d) - (1.0 / d.ln()) * 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_radius_positive_and_decreasing() {
        let depths = [2.0, 5.0, 10.0, 35.0, 70.0, 300.0, 700.0];
        let mut prev = f64::INFINITY;
        for d in depths {
            let r = marker_radius(d);
            assert!(r > 0.0);
            assert!(r < prev, "radius must shrink with depth");
            prev = r;
        }
    }

    #[test]
    fn test_radius_clamped_at_degenerate_depths() {
        // ln(1) = 0 and ln of anything below 1 is negative; both clamp.
        assert_eq!(marker_radius(1.0), MAX_RADIUS);
        assert_eq!(marker_radius(0.5), MAX_RADIUS);
        assert_eq!(marker_radius(0.0), MAX_RADIUS);
        // Just above 1 km the raw value exceeds the cap.
        assert_eq!(marker_radius(1.0001), MAX_RADIUS);
    }

    #[test]
    fn test_classify_round_trip_scenario() {
        // Point "34.05 -118.25", title "M 5.2 - ...", elev -12000 m.
        let spec = classify(&event(Some(5.2), 12.0));
        assert_eq!(spec.bucket, SeverityBucket::Medium);
        assert_eq!(spec.color, SeverityBucket::Medium.color());
        assert!((spec.radius - (1.0 / 12.0_f64.ln()) * 50.0).abs() < 1e-12);
        assert_eq!(spec.magnitude, Some(5.2));
        assert_eq!(spec.depth_km, 12.0);
    }

    #[test]
    fn test_classify_boundary_magnitude() {
        let spec = classify(&event(Some(6.0), 10.0));
        assert_eq!(spec.bucket, SeverityBucket::Strong);
    }

    #[test]
    fn test_classify_without_magnitude() {
        let spec = classify(&event(None, 10.0));
        assert_eq!(spec.bucket, SeverityBucket::Micro);
        assert_eq!(spec.magnitude, None);
    }
}
