//! GeoRSS/Atom earthquake feed parsing.
//!
//! Walks the feed document with a streaming reader and turns each `<entry>`
//! carrying a `georss:point` into an [`EarthquakeEvent`]. Entries without a
//! point are filtered out; malformed numeric fields are handled per the
//! configured [`ParsePolicy`].

use crate::config::ParsePolicy;
use crate::error::FeedError;
use crate::feed::event::{depth_km_from_elevation_m, magnitude_from_title, EarthquakeEvent, GeoPoint};
use tracing::{debug, warn};

/// Parse an Atom + GeoRSS document into an ordered list of events.
///
/// Feed order is preserved and entries are never deduplicated.
pub fn parse_feed(xml: &str, policy: ParsePolicy) -> Result<Vec<EarthquakeEvent>, FeedError> {
    let mut events = Vec::new();
    let mut in_entry = false;
    let mut entry_index = 0usize;
    let mut current_tag = String::new();
    let mut point_text: Option<String> = None;
    let mut title: Option<String> = None;
    let mut elev_text: Option<String> = None;

    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(ref e))
            | Ok(quick_xml::events::Event::Empty(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "entry" {
                    in_entry = true;
                    point_text = None;
                    title = None;
                    elev_text = None;
                }
                current_tag = name;
            }
            Ok(quick_xml::events::Event::Text(ref e)) => {
                if in_entry {
                    let text = e.unescape().unwrap_or_default().to_string();
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        match current_tag.as_str() {
                            "georss:point" => point_text = Some(trimmed.to_string()),
                            "title" => title = Some(trimmed.to_string()),
                            "georss:elev" => elev_text = Some(trimmed.to_string()),
                            _ => {}
                        }
                    }
                }
            }
            Ok(quick_xml::events::Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "entry" && in_entry {
                    if let Some(event) = finish_entry(
                        entry_index,
                        point_text.take(),
                        title.take(),
                        elev_text.take(),
                        policy,
                    )? {
                        events.push(event);
                    }
                    in_entry = false;
                    entry_index += 1;
                }
            }
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => return Err(FeedError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    debug!(entries = entry_index, events = events.len(), "feed parsed");
    Ok(events)
}

/// Build an event from the fields collected for one `<entry>`.
///
/// Returns `Ok(None)` when the entry is filtered out (no point geometry, or
/// unparseable coordinates under lenient policy).
fn finish_entry(
    entry: usize,
    point_text: Option<String>,
    title: Option<String>,
    elev_text: Option<String>,
    policy: ParsePolicy,
) -> Result<Option<EarthquakeEvent>, FeedError> {
    // Admission filter: no point geometry, no event. Not an error.
    let Some(point_raw) = point_text else {
        debug!(entry, "entry skipped: no point geometry");
        return Ok(None);
    };

    let location = match parse_point(&point_raw) {
        Some(loc) => loc,
        None => match policy {
            ParsePolicy::Strict => {
                return Err(FeedError::MalformedField {
                    entry,
                    field: "georss:point",
                    value: point_raw,
                })
            }
            ParsePolicy::Lenient => {
                warn!(entry, point = %point_raw, "entry skipped: unparseable coordinates");
                return Ok(None);
            }
        },
    };

    let magnitude = match &title {
        Some(t) => match magnitude_from_title(t) {
            Some(m) => Some(m),
            None => match policy {
                ParsePolicy::Strict => {
                    return Err(FeedError::MalformedField {
                        entry,
                        field: "magnitude",
                        value: t.clone(),
                    })
                }
                ParsePolicy::Lenient => {
                    warn!(entry, title = %t, "magnitude not extractable from title");
                    None
                }
            },
        },
        None => None,
    };

    let depth_km = match elev_text {
        Some(raw) => match raw.parse::<f64>() {
            Ok(meters) => depth_km_from_elevation_m(meters),
            Err(_) => match policy {
                ParsePolicy::Strict => {
                    return Err(FeedError::MalformedField {
                        entry,
                        field: "georss:elev",
                        value: raw,
                    })
                }
                ParsePolicy::Lenient => {
                    warn!(entry, elev = %raw, "unparseable elevation, depth set to 0");
                    0.0
                }
            },
        },
        None => match policy {
            ParsePolicy::Strict => {
                return Err(FeedError::MalformedField {
                    entry,
                    field: "georss:elev",
                    value: "missing".to_string(),
                })
            }
            ParsePolicy::Lenient => {
                debug!(entry, "no elevation element, depth set to 0");
                0.0
            }
        },
    };

    Ok(Some(EarthquakeEvent {
        location,
        title,
        magnitude,
        depth_km,
    }))
}

/// Parse `georss:point` text content: two whitespace-separated decimals,
/// latitude first. Trailing tokens are ignored.
fn parse_point(text: &str) -> Option<GeoPoint> {
    let mut parts = text.split_whitespace();
    let lat: f64 = parts.next()?.parse().ok()?;
    let lon: f64 = parts.next()?.parse().ok()?;
    Some(GeoPoint::new(lat, lon))
}
