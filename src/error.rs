//! Error taxonomy for the feed-to-marker pipeline.

use thiserror::Error;

/// Errors surfaced while loading or parsing the earthquake feed.
///
/// A missing point geometry is deliberately *not* represented here: entries
/// without a usable location are filtered out of the result, never reported
/// as failures.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The feed document could not be retrieved at all.
    #[error("feed unreachable: {url}: {reason}")]
    Unreachable { url: String, reason: String },

    /// A numeric field failed to parse under strict policy.
    #[error("malformed {field} in entry {entry}: {value:?}")]
    MalformedField {
        entry: usize,
        field: &'static str,
        value: String,
    },

    /// The document itself is not well-formed XML.
    #[error("malformed feed document: {0}")]
    Xml(#[from] quick_xml::Error),
}
