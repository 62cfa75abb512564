use crate::pipeline::PipelineParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One frame of the input stream: the rectified image and its lane mask.
#[derive(Clone, Debug, Deserialize)]
pub struct FrameInput {
    pub image: PathBuf,
    pub mask: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DemoOutputConfig {
    /// Directory receiving one overlay image per frame.
    pub dir: PathBuf,
    #[serde(default)]
    pub json_out: Option<PathBuf>,
    /// Also write the bird's-eye mask handed to the tracker.
    #[serde(default)]
    pub save_birdseye: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LaneDemoConfig {
    pub frames: Vec<FrameInput>,
    #[serde(default)]
    pub params: PipelineParams,
    /// Mask pixels brighter than this value count as lane pixels.
    #[serde(default)]
    pub mask_threshold: u8,
    pub output: DemoOutputConfig,
}

pub fn load_config(path: &Path) -> Result<LaneDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
