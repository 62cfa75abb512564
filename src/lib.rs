#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod error;
pub mod gate;
pub mod image;
pub mod lane;
pub mod pipeline;
pub mod render;
pub mod tracker;
pub mod types;

// Supporting modules: geometry, reporting and demo configuration.
pub mod config;
pub mod diagnostics;
pub mod homography;
pub mod metrics;
pub mod perspective;

// --- High-level re-exports -------------------------------------------------

// Main entry points: tracker, pipeline + results.
pub use crate::error::LaneError;
pub use crate::lane::{LaneModel, LanePolynomial};
pub use crate::pipeline::{FrameOutput, FrameProcessor, LanePipeline, PipelineParams};
pub use crate::tracker::{FrameStep, LaneTracker, TrackerParams, TrackerState};

// Reports produced per frame and per stream.
pub use crate::diagnostics::{FrameReport, SequenceReport};

// Geometry helpers that are generally useful.
pub use crate::perspective::{PerspectiveMapper, WarpDirection};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_tracker::prelude::*;
///
/// # fn main() {
/// let (w, h) = (1280usize, 720usize);
/// let mask = BinaryMask::from_fn(w, h, |x, _| (398..=402).contains(&x) || (958..=962).contains(&x));
///
/// let mut tracker = LaneTracker::new(TrackerParams::default());
/// let step = tracker.update(&mask);
/// println!("step={} model={:?}", step.label(), tracker.model().map(|m| m.left));
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{BinaryMask, RgbImage};
    pub use crate::{
        FrameProcessor, FrameStep, LaneError, LaneModel, LaneTracker, PipelineParams,
        TrackerParams,
    };
}
