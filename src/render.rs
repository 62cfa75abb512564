//! Lane overlay rendering.
//!
//! The lane area between the two boundaries is filled row by row in the
//! bird's-eye view, carried back into the camera view with the inverse
//! homography and added onto the rectified frame:
//! `out = clamp(frame + alpha · overlay)`.
use crate::image::{ImageViewMut, RgbImage};
use crate::lane::LaneModel;
use crate::perspective::{PerspectiveMapper, WarpDirection};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub fill_rgb: [u8; 3],
    /// Weight of the overlay when added to the frame.
    pub alpha: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            fill_rgb: [0, 255, 0],
            alpha: 0.3,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct OverlayRenderer {
    style: OverlayStyle,
}

impl OverlayRenderer {
    pub fn new(style: OverlayStyle) -> Self {
        Self { style }
    }

    /// Bird's-eye canvas of size `w × h` with the lane polygon filled.
    pub fn lane_canvas(&self, model: &LaneModel, w: usize, h: usize) -> RgbImage {
        let mut canvas = RgbImage::new(w, h);
        if w == 0 {
            return canvas;
        }
        for y in model.ploty.iter() {
            let row = y.round();
            if row < 0.0 || row >= h as f64 {
                continue;
            }
            let xl = model.left.eval(y).round();
            let xr = model.right.eval(y).round();
            let (lo, hi) = if xl <= xr { (xl, xr) } else { (xr, xl) };
            if hi < 0.0 || lo >= w as f64 || !lo.is_finite() || !hi.is_finite() {
                continue;
            }
            let lo = lo.max(0.0) as usize;
            let hi = hi.min((w - 1) as f64) as usize;
            canvas.row_mut(row as usize)[lo..=hi].fill(self.style.fill_rgb);
        }
        canvas
    }

    /// Composite the lane area of `model` onto the rectified `frame`.
    pub fn render(&self, frame: &RgbImage, model: &LaneModel, mapper: &PerspectiveMapper) -> RgbImage {
        let canvas = self.lane_canvas(model, frame.w, frame.h);
        let overlay = mapper.warp_rgb(&canvas, WarpDirection::ToCamera);
        blend(frame, &overlay, self.style.alpha)
    }
}

/// Saturating `base + alpha · overlay`, per channel.
///
/// Both images must have the same size.
pub fn blend(base: &RgbImage, overlay: &RgbImage, alpha: f32) -> RgbImage {
    debug_assert_eq!((base.w, base.h), (overlay.w, overlay.h));
    let data = base
        .data
        .iter()
        .zip(&overlay.data)
        .map(|(b, o)| {
            let mut out = [0u8; 3];
            for c in 0..3 {
                let v = f32::from(b[c]) + alpha * f32::from(o[c]);
                out[c] = v.round().clamp(0.0, 255.0) as u8;
            }
            out
        })
        .collect();
    RgbImage {
        w: base.w,
        h: base.h,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::{LanePolynomial, PlotRange};

    fn straight_model(left: f64, right: f64, h: usize) -> LaneModel {
        LaneModel {
            left: LanePolynomial::vertical(left),
            right: LanePolynomial::vertical(right),
            ploty: PlotRange::for_height(h),
            support: [h, h],
        }
    }

    #[test]
    fn canvas_fills_between_boundaries_inclusive() {
        let renderer = OverlayRenderer::default();
        let canvas = renderer.lane_canvas(&straight_model(2.0, 5.0, 4), 8, 4);
        for y in 0..4 {
            for x in 0..8 {
                let expected = if (2..=5).contains(&x) { [0, 255, 0] } else { [0, 0, 0] };
                assert_eq!(canvas.get(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn canvas_clips_boundaries_outside_the_frame() {
        let renderer = OverlayRenderer::default();
        let canvas = renderer.lane_canvas(&straight_model(-10.0, 30.0, 2), 6, 2);
        assert!(canvas.data.iter().all(|&px| px == [0, 255, 0]));
    }

    #[test]
    fn blend_adds_weighted_overlay_and_saturates() {
        let base = RgbImage::filled(1, 1, [100, 250, 0]);
        let overlay = RgbImage::filled(1, 1, [0, 255, 255]);
        let out = blend(&base, &overlay, 0.3);
        assert_eq!(out.get(0, 0), [100, 255, 77]);
    }
}
