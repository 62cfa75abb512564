use super::polynomial::LanePolynomial;
use crate::error::LaneError;
use crate::types::{Boundary, PixelCoord};
use serde::Serialize;

/// Sampled row range (`ploty`) over which a lane model is valid: `samples`
/// evenly spaced rows from `y_min` to `y_max` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotRange {
    pub y_min: f64,
    pub y_max: f64,
    pub samples: usize,
}

impl PlotRange {
    /// Every row of a bird's-eye image of the given height.
    pub fn for_height(height: usize) -> Self {
        Self {
            y_min: 0.0,
            y_max: height.saturating_sub(1) as f64,
            samples: height,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let step = if self.samples > 1 {
            (self.y_max - self.y_min) / (self.samples - 1) as f64
        } else {
            0.0
        };
        (0..self.samples).map(move |i| self.y_min + step * i as f64)
    }
}

/// One frame's lane estimate: a polynomial per boundary over a shared range.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneModel {
    pub left: LanePolynomial,
    pub right: LanePolynomial,
    pub ploty: PlotRange,
    /// Number of mask pixels behind each fit, `[left, right]`.
    pub support: [usize; 2],
}

impl LaneModel {
    /// Fit both boundaries from their pixel sets over a frame of `height` rows.
    pub fn fit(
        left: &[PixelCoord],
        right: &[PixelCoord],
        height: usize,
    ) -> Result<Self, LaneError> {
        let fit_side = |side: Boundary, samples: &[PixelCoord]| {
            LanePolynomial::fit(samples).ok_or(LaneError::DegenerateSampleSet {
                side,
                samples: samples.len(),
            })
        };
        Ok(Self {
            left: fit_side(Boundary::Left, left)?,
            right: fit_side(Boundary::Right, right)?,
            ploty: PlotRange::for_height(height),
            support: [left.len(), right.len()],
        })
    }

    /// Horizontal distance between the boundaries at row `y`, in pixels.
    pub fn width_px_at(&self, y: f64) -> f64 {
        self.right.eval(y) - self.left.eval(y)
    }

    /// Row closest to the camera (bottom of the bird's-eye view).
    pub fn near_y(&self) -> f64 {
        self.ploty.y_max
    }

    /// Row furthest from the camera.
    pub fn far_y(&self) -> f64 {
        self.ploty.y_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_range_covers_every_row() {
        let r = PlotRange::for_height(720);
        let ys: Vec<f64> = r.iter().collect();
        assert_eq!(ys.len(), 720);
        assert_eq!(ys[0], 0.0);
        assert!((ys[719] - 719.0).abs() < 1e-9);
        assert!((ys[360] - 360.0).abs() < 1e-9);
    }

    #[test]
    fn fit_reports_the_failing_side() {
        let left: Vec<PixelCoord> = (0..10).map(|y| (5, y)).collect();
        let err = LaneModel::fit(&left, &[], 10).unwrap_err();
        assert_eq!(
            err,
            LaneError::DegenerateSampleSet {
                side: Boundary::Right,
                samples: 0
            }
        );
    }
}
