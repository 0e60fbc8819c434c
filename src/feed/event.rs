//! Earthquake event records parsed from the feed.

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One earthquake parsed from a feed entry.
///
/// The location is the sole admission criterion: entries without a usable
/// `georss:point` never become events. Everything else is best-effort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeEvent {
    /// Epicenter coordinates.
    pub location: GeoPoint,
    /// Entry title, e.g. `"M 5.2 - 100 km NW of Anchorage, Alaska"`.
    pub title: Option<String>,
    /// Magnitude extracted from the title; `None` when the title is absent
    /// or does not follow the expected grammar.
    pub magnitude: Option<f64>,
    /// Hypocenter depth in kilometers, always non-negative. The feed reports
    /// elevation in meters (negative below the geoid); depth is its absolute
    /// value divided by 1000.
    pub depth_km: f64,
}

/// Byte range of the magnitude digits in a USGS-style title.
///
/// USGS summary feeds title every entry `"M <mag> - <place>"`, so the
/// magnitude occupies characters 2 through 4 ("5.2" in "M 5.2 - ...").
const MAGNITUDE_SPAN: std::ops::Range<usize> = 2..5;

/// Extract the magnitude from a feed entry title.
///
/// Returns `None` if the title is too short for the expected `"M d.d - ..."`
/// grammar or the span does not parse as a decimal number.
pub fn magnitude_from_title(title: &str) -> Option<f64> {
    let span = title.get(MAGNITUDE_SPAN)?;
    span.trim().parse::<f64>().ok()
}

/// Convert a `georss:elev` value (meters, signed) to depth in kilometers.
pub fn depth_km_from_elevation_m(elevation_m: f64) -> f64 {
    (elevation_m / 1000.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_from_usgs_title() {
        assert_eq!(
            magnitude_from_title("M 5.2 - 100 km NW of Anchorage, Alaska"),
            Some(5.2)
        );
        assert_eq!(magnitude_from_title("M 6.0 - Fiji region"), Some(6.0));
    }

    #[test]
    fn test_magnitude_title_too_short() {
        assert_eq!(magnitude_from_title(""), None);
        assert_eq!(magnitude_from_title("M 5"), None);
    }

    #[test]
    fn test_magnitude_title_not_numeric() {
        assert_eq!(magnitude_from_title("Earthquake near Tokyo"), None);
    }

    #[test]
    fn test_magnitude_title_non_ascii_boundary() {
        // Multibyte character across the span must not panic.
        assert_eq!(magnitude_from_title("Mé5.2 - somewhere"), None);
    }

    #[test]
    fn test_depth_conversion() {
        assert_eq!(depth_km_from_elevation_m(-12000.0), 12.0);
        assert_eq!(depth_km_from_elevation_m(3500.0), 3.5);
        assert_eq!(depth_km_from_elevation_m(0.0), 0.0);
    }
}
