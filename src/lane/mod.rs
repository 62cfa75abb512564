//! Lane locator: fits one quadratic per lane boundary in the bird's-eye view.
//!
//! Two strategies share the same least-squares fit:
//! - [`blind_search`] seeds windows from a column histogram and needs no
//!   prior knowledge;
//! - [`guided_search`] keeps only pixels near a previously accepted model.

mod blind;
mod guided;
mod histogram;
mod model;
mod options;
mod polynomial;

pub use blind::{blind_search, scan_windows, BlindSearch, SearchWindow, WindowScan};
pub use guided::guided_search;
pub use histogram::ColumnHistogram;
pub use model::{LaneModel, PlotRange};
pub use options::{BlindSearchOptions, GuidedSearchOptions};
pub use polynomial::LanePolynomial;

use crate::error::LaneError;
use crate::image::BinaryMask;

/// Both search strategies bound to their parameters.
#[derive(Clone, Debug, Default)]
pub struct LaneLocator {
    pub blind: BlindSearchOptions,
    pub guided: GuidedSearchOptions,
}

impl LaneLocator {
    pub fn new(blind: BlindSearchOptions, guided: GuidedSearchOptions) -> Self {
        Self { blind, guided }
    }

    pub fn blind_search(&self, mask: &BinaryMask) -> Result<BlindSearch, LaneError> {
        blind_search(mask, &self.blind)
    }

    pub fn guided_search(&self, mask: &BinaryMask, prior: &LaneModel) -> Result<LaneModel, LaneError> {
        guided_search(mask, prior, &self.guided)
    }
}
