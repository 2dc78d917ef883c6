//! Aspect-ratio classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Landscape tolerance: `round(h/w * 100)` must be at or below this bound
/// (178 ~ 16/9 * 100).
const LANDSCAPE_BOUND: f64 = 178.0;

/// Portrait tolerance: `round(w/h * 100)` must be at or below this bound
/// (56 ~ 9/16 * 100).
const PORTRAIT_BOUND: f64 = 56.0;

/// Coarse shape label for a video's pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "other")]
    Other,
}

impl AspectRatio {
    /// The ratio label, e.g. `16:9`.
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Other => "other",
        }
    }

    /// Folder prefix used when keying objects by shape.
    pub fn folder(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "landscape",
            AspectRatio::Portrait => "portrait",
            AspectRatio::Other => "other",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify pixel dimensions into a coarse shape label.
///
/// The narrower dimension is expressed as a whole percentage of the wider
/// one (rounded half away from zero) and compared against a tolerance band,
/// so near-misses like 1920x1080 (56.25%) still land on `16:9`. Exact
/// squares always classify as `Other`.
///
/// Callers must pass strictly positive dimensions.
pub fn classify(width: u32, height: u32) -> AspectRatio {
    debug_assert!(width > 0 && height > 0);

    if height < width {
        let ratio = (height as f64 / width as f64 * 100.0).round();
        if ratio <= LANDSCAPE_BOUND {
            AspectRatio::Landscape
        } else {
            AspectRatio::Other
        }
    } else if height > width {
        let ratio = (width as f64 / height as f64 * 100.0).round();
        if ratio <= PORTRAIT_BOUND {
            AspectRatio::Portrait
        } else {
            AspectRatio::Other
        }
    } else {
        AspectRatio::Other
    }
}
