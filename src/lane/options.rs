use serde::{Deserialize, Serialize};

/// Histogram-seeded sliding-window search parameters.
///
/// - `scan_start_row`: rows above this one do not contribute to the seeding
///   histogram (the far field is too noisy to anchor on).
/// - `window_count`: number of equal-height bands scanned bottom to top.
/// - `margin_px`: half-width of each search window.
/// - `min_pixels`: a window must collect more pixels than this to recentre
///   the next one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlindSearchOptions {
    pub scan_start_row: usize,
    pub window_count: usize,
    pub margin_px: usize,
    pub min_pixels: usize,
}

impl Default for BlindSearchOptions {
    fn default() -> Self {
        Self {
            scan_start_row: 400,
            window_count: 9,
            margin_px: 100,
            min_pixels: 50,
        }
    }
}

/// Prior-guided search parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidedSearchOptions {
    /// Pixels strictly closer than this to the prior curve are kept.
    pub margin_px: f64,
}

impl Default for GuidedSearchOptions {
    fn default() -> Self {
        Self { margin_px: 50.0 }
    }
}
