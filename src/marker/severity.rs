//! Severity buckets: magnitude to ordered tier and fixed marker color.

use serde::{Deserialize, Serialize};

/// An RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Shared alpha for all marker colors (~35% opaque).
const MARKER_ALPHA: u8 = 90;

/// Magnitude tier on a Richter-like damage scale.
///
/// Eight ordered buckets with boundaries at magnitude 3 through 9; a boundary
/// value always lands in the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBucket {
    Micro,
    VeryLight,
    Light,
    Medium,
    Strong,
    Great,
    VeryGreat,
    GlobalCatastrophe,
}

/// (upper magnitude bound, bucket) ladder, ascending. First `m < bound` wins;
/// anything at or above 9.0 is a global catastrophe.
const LADDER: [(f64, SeverityBucket); 7] = [
    (3.0, SeverityBucket::Micro),
    (4.0, SeverityBucket::VeryLight),
    (5.0, SeverityBucket::Light),
    (6.0, SeverityBucket::Medium),
    (7.0, SeverityBucket::Strong),
    (8.0, SeverityBucket::Great),
    (9.0, SeverityBucket::VeryGreat),
];

impl SeverityBucket {
    /// Classify a magnitude. Total over all of f64 (NaN falls through to the
    /// top bucket, matching the source ladder's final else arm).
    pub fn from_magnitude(m: f64) -> Self {
        for (bound, bucket) in LADDER {
            if m < bound {
                return bucket;
            }
        }
        SeverityBucket::GlobalCatastrophe
    }

    /// All buckets in ascending severity order (legend rows).
    pub const ALL: [SeverityBucket; 8] = [
        SeverityBucket::Micro,
        SeverityBucket::VeryLight,
        SeverityBucket::Light,
        SeverityBucket::Medium,
        SeverityBucket::Strong,
        SeverityBucket::Great,
        SeverityBucket::VeryGreat,
        SeverityBucket::GlobalCatastrophe,
    ];

    /// Fixed fill/stroke color for this tier. Palette runs from pale
    /// orange-pink (micro) to deep violet (global catastrophe).
    pub const fn color(self) -> Rgba {
        match self {
            SeverityBucket::Micro => Rgba::new(248, 193, 168, MARKER_ALPHA),
            SeverityBucket::VeryLight => Rgba::new(239, 145, 152, MARKER_ALPHA),
            SeverityBucket::Light => Rgba::new(232, 96, 138, MARKER_ALPHA),
            SeverityBucket::Medium => Rgba::new(192, 69, 138, MARKER_ALPHA),
            SeverityBucket::Strong => Rgba::new(143, 49, 146, MARKER_ALPHA),
            SeverityBucket::Great => Rgba::new(99, 33, 143, MARKER_ALPHA),
            SeverityBucket::VeryGreat => Rgba::new(75, 24, 108, MARKER_ALPHA),
            SeverityBucket::GlobalCatastrophe => Rgba::new(51, 16, 74, MARKER_ALPHA),
        }
    }

    /// Human-readable legend label.
    pub const fn label(self) -> &'static str {
        match self {
            SeverityBucket::Micro => "micro",
            SeverityBucket::VeryLight => "very light",
            SeverityBucket::Light => "light",
            SeverityBucket::Medium => "medium",
            SeverityBucket::Strong => "strong",
            SeverityBucket::Great => "great",
            SeverityBucket::VeryGreat => "very great",
            SeverityBucket::GlobalCatastrophe => "global catastrophe",
        }
    }
}
