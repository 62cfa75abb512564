//! Road-geometry figures derived from an accepted lane model.
//!
//! Curvature is evaluated at the row nearest the camera after rescaling the
//! pixel polynomial into meters: for `x = a·y² + b·y + c` in pixels, the world
//! polynomial has `A = a·xm/ym²` and `B = b·xm/ym`, and the radius is
//! `(1 + (2A·Y + B)²)^{3/2} / |2A|` at `Y = y_near·ym`.
use crate::gate::PixelScale;
use crate::lane::{LaneModel, LanePolynomial};
use serde::Serialize;

const MIN_CURVATURE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneMetrics {
    /// `None` for a straight boundary.
    pub left_radius_m: Option<f64>,
    pub right_radius_m: Option<f64>,
    /// Lateral offset of the frame center from the lane center at the near
    /// row; positive when the vehicle sits right of the lane center.
    pub center_offset_m: f64,
}

pub fn lane_metrics(model: &LaneModel, scale: &PixelScale, frame_width: usize) -> LaneMetrics {
    let y_near = model.near_y();
    let lane_center = 0.5 * (model.left.eval(y_near) + model.right.eval(y_near));
    let frame_center = frame_width as f64 / 2.0;
    LaneMetrics {
        left_radius_m: radius_of_curvature_m(&model.left, y_near, scale),
        right_radius_m: radius_of_curvature_m(&model.right, y_near, scale),
        center_offset_m: (frame_center - lane_center) * scale.xm_per_pix,
    }
}

pub fn radius_of_curvature_m(poly: &LanePolynomial, y_px: f64, scale: &PixelScale) -> Option<f64> {
    let (xm, ym) = (scale.xm_per_pix, scale.ym_per_pix);
    let a = poly.a * xm / (ym * ym);
    let b = poly.b * xm / ym;
    if (2.0 * a).abs() < MIN_CURVATURE {
        return None;
    }
    let slope = 2.0 * a * y_px * ym + b;
    Some((1.0 + slope * slope).powf(1.5) / (2.0 * a).abs())
}
