//! Consistency gate: lane-width plausibility check for guided-search models.
//!
//! A real lane has a roughly constant, known width. The gate measures the
//! boundary separation at the nearest and furthest sampled rows, converts it
//! to meters and accepts the model only if both widths fall strictly inside
//! the envelope. A collapsing, exploding or diverging pair of boundaries is
//! the usual symptom of the guided search locking onto shadows, occluders or
//! a merging marking.

use crate::error::LaneError;
use crate::lane::LaneModel;
use serde::{Deserialize, Serialize};

/// Meters per bird's-eye pixel along each axis.
///
/// Defaults describe roughly 30 m of road over 720 rows and a 3.7 m lane
/// over 700 columns.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixelScale {
    pub xm_per_pix: f64,
    pub ym_per_pix: f64,
}

impl Default for PixelScale {
    fn default() -> Self {
        Self {
            xm_per_pix: 3.7 / 700.0,
            ym_per_pix: 30.0 / 720.0,
        }
    }
}

/// Accepted lane-width interval in meters (exclusive bounds).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlausibilityEnvelope {
    pub min_width_m: f64,
    pub max_width_m: f64,
    pub scale: PixelScale,
}

impl Default for PlausibilityEnvelope {
    fn default() -> Self {
        Self {
            min_width_m: 2.0,
            max_width_m: 3.2,
            scale: PixelScale::default(),
        }
    }
}

impl PlausibilityEnvelope {
    #[inline]
    pub fn contains(&self, width_m: f64) -> bool {
        width_m > self.min_width_m && width_m < self.max_width_m
    }
}

/// Lane width measured at both ends of a model's row range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneWidths {
    pub near_m: f64,
    pub far_m: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ConsistencyGate {
    envelope: PlausibilityEnvelope,
}

impl ConsistencyGate {
    pub fn new(envelope: PlausibilityEnvelope) -> Self {
        Self { envelope }
    }

    pub fn envelope(&self) -> &PlausibilityEnvelope {
        &self.envelope
    }

    pub fn measure(&self, model: &LaneModel) -> LaneWidths {
        let xm = self.envelope.scale.xm_per_pix;
        LaneWidths {
            near_m: model.width_px_at(model.near_y()) * xm,
            far_m: model.width_px_at(model.far_y()) * xm,
        }
    }

    /// Accept `model` or explain why it is implausible.
    pub fn check(&self, model: &LaneModel) -> Result<LaneWidths, LaneError> {
        let widths = self.measure(model);
        if self.envelope.contains(widths.near_m) && self.envelope.contains(widths.far_m) {
            Ok(widths)
        } else {
            Err(LaneError::ImplausibleWidth {
                near_m: widths.near_m,
                far_m: widths.far_m,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::{LanePolynomial, PlotRange};

    fn model_with_widths(near_m: f64, far_m: f64) -> LaneModel {
        // Left boundary fixed at x = 300; right boundary linear in y so that
        // the separation hits the requested widths at y = 0 and y = 719.
        let xm = PixelScale::default().xm_per_pix;
        let far_px = far_m / xm;
        let near_px = near_m / xm;
        let slope = (near_px - far_px) / 719.0;
        LaneModel {
            left: LanePolynomial::vertical(300.0),
            right: LanePolynomial::new(0.0, slope, 300.0 + far_px),
            ploty: PlotRange::for_height(720),
            support: [720, 720],
        }
    }

    #[test]
    fn accepts_three_meter_lane() {
        let gate = ConsistencyGate::default();
        let widths = gate.check(&model_with_widths(3.0, 3.0)).unwrap();
        assert!((widths.near_m - 3.0).abs() < 1e-9);
        assert!((widths.far_m - 3.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_wide_near_field() {
        let gate = ConsistencyGate::default();
        let err = gate.check(&model_with_widths(3.5, 3.0)).unwrap_err();
        match err {
            LaneError::ImplausibleWidth { near_m, far_m } => {
                assert!((near_m - 3.5).abs() < 1e-9);
                assert!((far_m - 3.0).abs() < 1e-9);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn rejects_collapsing_far_field() {
        let gate = ConsistencyGate::default();
        assert!(gate.check(&model_with_widths(3.0, 1.5)).is_err());
    }

    #[test]
    fn envelope_bounds_are_exclusive() {
        let env = PlausibilityEnvelope::default();
        assert!(!env.contains(2.0));
        assert!(!env.contains(3.2));
        assert!(env.contains(2.96));
    }
}
