use crate::perspective::PerspectiveOptions;
use crate::render::OverlayStyle;
use crate::tracker::TrackerParams;
use serde::{Deserialize, Serialize};

/// Everything needed to build a [`FrameProcessor`](super::FrameProcessor).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineParams {
    pub perspective: PerspectiveOptions,
    pub tracker: TrackerParams,
    pub overlay: OverlayStyle,
}
