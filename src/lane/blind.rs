//! Blind search: histogram seeding followed by sliding windows.
//!
//! 1. Count mask pixels per column over the rows below `scan_start_row` and
//!    take the peak of each half as the starting column of each boundary.
//! 2. Split the height into `window_count` bands and walk them bottom to top.
//!    In every band, each boundary owns a window `[center - margin,
//!    center + margin)`; all mask pixels inside it are collected.
//! 3. A window holding more than `min_pixels` pixels moves the boundary's
//!    center to their mean column for the next band.
//! 4. The pooled pixels of each boundary are fitted with a quadratic.
use super::histogram::ColumnHistogram;
use super::model::LaneModel;
use super::options::BlindSearchOptions;
use crate::error::LaneError;
use crate::image::{BinaryMask, ImageView};
use crate::types::{Boundary, PixelCoord};
use log::debug;
use serde::Serialize;

/// One sliding window as it was placed during the search.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchWindow {
    pub side: Boundary,
    /// Band index, `0` at the bottom of the image.
    pub band: usize,
    pub x_low: i64,
    pub x_high: i64,
    pub y_low: usize,
    pub y_high: usize,
    pub pixels: usize,
    pub recentered: bool,
}

/// Pixel sets and window trace gathered by the sliding-window walk.
#[derive(Clone, Debug)]
pub struct WindowScan {
    /// Histogram peaks used as starting columns, `(left, right)`.
    pub bases: (usize, usize),
    pub windows: Vec<SearchWindow>,
    /// Collected pixels per boundary, indexed by [`Boundary::index`].
    pub pixels: [Vec<PixelCoord>; 2],
}

/// Outcome of a successful blind search.
#[derive(Clone, Debug)]
pub struct BlindSearch {
    pub model: LaneModel,
    pub bases: (usize, usize),
    pub windows: Vec<SearchWindow>,
}

/// Walk the sliding windows over `mask` without fitting.
pub fn scan_windows(mask: &BinaryMask, opts: &BlindSearchOptions) -> WindowScan {
    let (w, h) = (mask.w, mask.h);
    let bases = ColumnHistogram::from_mask(mask, opts.scan_start_row).lane_bases();
    let band_height = h / opts.window_count.max(1);
    let margin = opts.margin_px as i64;

    let mut centers = [bases.0 as i64, bases.1 as i64];
    let mut pixels: [Vec<PixelCoord>; 2] = Default::default();
    let mut windows = Vec::with_capacity(2 * opts.window_count);

    for band in 0..opts.window_count {
        let y_high = h.saturating_sub(band * band_height);
        let y_low = y_high.saturating_sub(band_height);
        for side in Boundary::BOTH {
            let slot = side.index();
            let x_low = centers[slot] - margin;
            let x_high = centers[slot] + margin;
            let cols = x_low.clamp(0, w as i64) as usize..x_high.clamp(0, w as i64) as usize;

            let found_before = pixels[slot].len();
            let mut sum_x = 0usize;
            for y in y_low..y_high {
                let row = mask.row(y);
                for x in cols.clone() {
                    if row[x] != 0 {
                        pixels[slot].push((x, y));
                        sum_x += x;
                    }
                }
            }
            let found = pixels[slot].len() - found_before;
            let recentered = found > opts.min_pixels;
            if recentered {
                centers[slot] = (sum_x / found) as i64;
            }
            windows.push(SearchWindow {
                side,
                band,
                x_low,
                x_high,
                y_low,
                y_high,
                pixels: found,
                recentered,
            });
        }
    }

    WindowScan {
        bases,
        windows,
        pixels,
    }
}

/// Locate both boundaries from scratch.
pub fn blind_search(mask: &BinaryMask, opts: &BlindSearchOptions) -> Result<BlindSearch, LaneError> {
    let scan = scan_windows(mask, opts);
    let [left, right] = &scan.pixels;
    debug!(
        "blind search: bases=({}, {}) left_px={} right_px={}",
        scan.bases.0,
        scan.bases.1,
        left.len(),
        right.len()
    );
    let model = LaneModel::fit(left, right, mask.h)?;
    Ok(BlindSearch {
        model,
        bases: scan.bases,
        windows: scan.windows,
    })
}
