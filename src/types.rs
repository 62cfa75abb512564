use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two boundaries of the ego lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Boundary {
    Left,
    Right,
}

impl Boundary {
    pub const BOTH: [Boundary; 2] = [Boundary::Left, Boundary::Right];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Boundary::Left => 0,
            Boundary::Right => 1,
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Left => f.write_str("left"),
            Boundary::Right => f.write_str("right"),
        }
    }
}

/// Pixel coordinate `(x, y)` of a mask sample, `y` growing downwards.
pub type PixelCoord = (usize, usize);
