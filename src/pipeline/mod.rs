//! Per-frame lane pipeline.
//!
//! Data flow for one frame:
//!
//! ```text
//! raw ─ Rectifier ─ MaskExtractor ─ warp to bird's-eye ─ LaneTracker::update
//!                                                          │
//!                        rectified + accepted model ─ OverlayRenderer ─ output
//! ```
//!
//! [`FrameProcessor`] covers everything after masking and is what callers with
//! externally produced masks drive directly. [`LanePipeline`] adds the two
//! collaborator stages in front of it.
//!
//! Typical usage:
//! ```no_run
//! use lane_tracker::image::{BinaryMask, RgbImage};
//! use lane_tracker::pipeline::{FrameProcessor, PipelineParams};
//!
//! # fn frames() -> Vec<(RgbImage, BinaryMask)> { Vec::new() }
//! let mut processor = FrameProcessor::new(PipelineParams::default()).unwrap();
//! for (frame, mask) in frames() {
//!     let out = processor.process(&frame, &mask).unwrap();
//!     println!("{}", out.report.summary());
//! }
//! ```

mod collaborators;
mod params;

pub use collaborators::{MaskExtractor, PassthroughRectifier, Rectifier};
pub use params::PipelineParams;

use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{FrameReport, InputDescriptor, TimingBreakdown};
use crate::error::LaneError;
use crate::image::{BinaryMask, RgbImage};
use crate::metrics::lane_metrics;
use crate::perspective::{PerspectiveMapper, WarpDirection};
use crate::render::OverlayRenderer;
use crate::tracker::LaneTracker;
use log::debug;
use std::time::Instant;

/// Composited frame plus the report describing how it was produced.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    /// Rectified frame with the lane overlay, or the plain rectified frame
    /// when no lane model is available.
    pub image: RgbImage,
    pub report: FrameReport,
}

/// Tracker, mapper and renderer driven by rectified frames and their masks.
pub struct FrameProcessor {
    mapper: PerspectiveMapper,
    tracker: LaneTracker,
    renderer: OverlayRenderer,
    next_index: u64,
}

impl FrameProcessor {
    pub fn new(params: PipelineParams) -> Result<Self, LaneError> {
        Ok(Self {
            mapper: PerspectiveMapper::new(&params.perspective)?,
            tracker: LaneTracker::new(params.tracker),
            renderer: OverlayRenderer::new(params.overlay),
            next_index: 0,
        })
    }

    pub fn mapper(&self) -> &PerspectiveMapper {
        &self.mapper
    }

    pub fn tracker(&self) -> &LaneTracker {
        &self.tracker
    }

    /// Restart the stream: drop the tracked model and the frame counter.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.next_index = 0;
    }

    /// Process one rectified frame with its camera-space lane mask.
    ///
    /// Fails only if the mask and frame sizes differ; tracking failures are
    /// reported through [`FrameReport::step`].
    pub fn process(&mut self, rectified: &RgbImage, mask: &BinaryMask) -> Result<FrameOutput, LaneError> {
        check_dimensions(rectified, mask)?;
        Ok(self.run(rectified, mask, TimingBreakdown::default()))
    }

    fn run(&mut self, rectified: &RgbImage, mask: &BinaryMask, mut timings: TimingBreakdown) -> FrameOutput {
        let start = Instant::now();
        let frame_index = self.next_index;
        self.next_index += 1;

        let birdseye = timings.time("warp", || {
            self.mapper.warp_mask(mask, WarpDirection::ToBirdsEye)
        });
        let step = timings.time("track", || self.tracker.update(&birdseye));

        let model = self.tracker.model().cloned();
        let image = match &model {
            Some(model) => timings.time("render", || {
                self.renderer.render(rectified, model, &self.mapper)
            }),
            None => rectified.clone(),
        };

        let gate = self.tracker.gate();
        let widths = model.as_ref().map(|m| gate.measure(m));
        let metrics = model
            .as_ref()
            .map(|m| lane_metrics(m, &gate.envelope().scale, birdseye.w));
        timings.total_ms += elapsed_ms(start);

        debug!(
            "FrameProcessor: frame {} step={} overlay={}",
            frame_index,
            step.label(),
            model.is_some()
        );

        let report = FrameReport {
            frame_index,
            input: InputDescriptor {
                width: rectified.w,
                height: rectified.h,
                birdseye_pixels: birdseye.count_nonzero(),
            },
            step,
            phase: self.tracker.state().phase(),
            overlay: model.is_some(),
            model,
            widths,
            metrics,
            timings,
        };
        FrameOutput { image, report }
    }
}

fn check_dimensions(rectified: &RgbImage, mask: &BinaryMask) -> Result<(), LaneError> {
    if (mask.w, mask.h) != (rectified.w, rectified.h) {
        return Err(LaneError::DimensionMismatch {
            expected: (rectified.w, rectified.h),
            got: (mask.w, mask.h),
        });
    }
    Ok(())
}

/// Full raw-frame pipeline: rectify, mask, then [`FrameProcessor`].
pub struct LanePipeline<R, M> {
    rectifier: R,
    extractor: M,
    processor: FrameProcessor,
}

impl<R: Rectifier, M: MaskExtractor> LanePipeline<R, M> {
    pub fn new(params: PipelineParams, rectifier: R, extractor: M) -> Result<Self, LaneError> {
        Ok(Self {
            rectifier,
            extractor,
            processor: FrameProcessor::new(params)?,
        })
    }

    pub fn processor(&self) -> &FrameProcessor {
        &self.processor
    }

    pub fn reset(&mut self) {
        self.processor.reset();
    }

    pub fn process(&mut self, raw: &RgbImage) -> Result<FrameOutput, LaneError> {
        let start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let rectified = timings.time("rectify", || self.rectifier.rectify(raw));
        let mask = timings.time("mask", || self.extractor.extract(&rectified));
        check_dimensions(&rectified, &mask)?;
        let front_ms = elapsed_ms(start);
        let mut out = self.processor.run(&rectified, &mask, timings);
        out.report.timings.total_ms += front_ms;
        Ok(out)
    }
}
