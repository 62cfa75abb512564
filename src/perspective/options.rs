use serde::{Deserialize, Serialize};

/// Fixed calibration geometry of the bird's-eye projection.
///
/// `src` is a trapezoid on the road plane in the rectified camera frame and
/// `dst` is the rectangle it maps to in the top-down view. Point order must
/// match between the two arrays. Defaults correspond to a 1280×720 camera
/// whose ego lane spans columns 400..960 once rectified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerspectiveOptions {
    pub src: [[f64; 2]; 4],
    pub dst: [[f64; 2]; 4],
}

impl Default for PerspectiveOptions {
    fn default() -> Self {
        Self {
            src: [
                [830.0, 525.0],  // top right
                [1080.0, 670.0], // bottom right
                [340.0, 670.0],  // bottom left
                [510.0, 525.0],  // top left
            ],
            dst: [[960.0, 525.0], [960.0, 670.0], [400.0, 670.0], [400.0, 525.0]],
        }
    }
}
