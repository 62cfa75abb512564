use super::timing::TimingBreakdown;
use crate::gate::LaneWidths;
use crate::lane::LaneModel;
use crate::metrics::LaneMetrics;
use crate::tracker::{FrameStep, TrackerPhase};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    /// Lane pixels in the bird's-eye mask handed to the tracker.
    pub birdseye_pixels: usize,
}

/// Everything the pipeline decided about one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub frame_index: u64,
    pub input: InputDescriptor,
    pub step: FrameStep,
    /// Tracker phase after this frame.
    pub phase: TrackerPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<LaneModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widths: Option<LaneWidths>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<LaneMetrics>,
    /// Whether the output frame carries a lane overlay.
    pub overlay: bool,
    pub timings: TimingBreakdown,
}

impl FrameReport {
    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        let mut line = format!("frame {:>5}: {:<20}", self.frame_index, self.step.label());
        if let Some(model) = &self.model {
            line.push_str(&format!(
                " left=[{:.2e} {:.3} {:.1}] right=[{:.2e} {:.3} {:.1}]",
                model.left.a, model.left.b, model.left.c, model.right.a, model.right.b, model.right.c
            ));
        }
        if let Some(w) = &self.widths {
            line.push_str(&format!(" width near={:.2}m far={:.2}m", w.near_m, w.far_m));
        }
        line.push_str(&format!(" ({:.2} ms)", self.timings.total_ms));
        line
    }
}
