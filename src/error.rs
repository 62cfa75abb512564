//! Error taxonomy of the lane tracker.
//!
//! Per-frame tracking failures never abort a stream: the tracker records them
//! in the [`FrameStep`](crate::tracker::FrameStep) of the frame that produced
//! them and carries on with the next frame.

use crate::types::Boundary;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LaneError {
    /// A boundary search yielded too few distinct rows to fit a quadratic.
    #[error("{side} boundary search yielded a degenerate sample set ({samples} pixels)")]
    DegenerateSampleSet { side: Boundary, samples: usize },

    /// Consistency gate rejection of a guided-search model.
    #[error("implausible lane width: near {near_m:.2} m, far {far_m:.2} m")]
    ImplausibleWidth { near_m: f64, far_m: f64 },

    #[error("guided search requested without a prior lane model")]
    NoPriorModel,

    #[error("perspective point pairs do not define an invertible homography")]
    DegenerateHomography,

    #[error("frame size mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
}
