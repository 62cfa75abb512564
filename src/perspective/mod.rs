//! Bidirectional camera ↔ bird's-eye mapping.
//!
//! The mapper derives the forward homography (camera → top-down) once from
//! four fixed point pairs, together with its inverse. Both directions are
//! exposed as pure resampling operations:
//!
//! - [`PerspectiveMapper::warp_mask`] brings the lane mask into the bird's-eye
//!   view before lane search. The 0/1 mask is interpolated bilinearly and
//!   re-binarised at one half, which keeps thin markings from smearing.
//! - [`PerspectiveMapper::warp_rgb`] carries the rendered lane polygon back
//!   into the camera view for compositing.
//!
//! Every destination pixel is pulled from the source through the opposite
//! homography (inverse mapping), so the output has no holes. Pixels whose
//! source lies outside the input are zero. With the `parallel` feature, rows
//! are resampled on the rayon thread pool.

mod options;
mod sampling;

pub use options::PerspectiveOptions;

use crate::error::LaneError;
use crate::homography::{apply_homography_point, homography_from_quad, invert_homography};
use crate::image::{BinaryMask, RgbImage};
use log::debug;
use nalgebra::Matrix3;
use sampling::bilinear;
use serde::{Deserialize, Serialize};

/// Which way a warp goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarpDirection {
    /// Camera view → top-down view.
    ToBirdsEye,
    /// Top-down view → camera view.
    ToCamera,
}

impl WarpDirection {
    pub fn reversed(self) -> Self {
        match self {
            WarpDirection::ToBirdsEye => WarpDirection::ToCamera,
            WarpDirection::ToCamera => WarpDirection::ToBirdsEye,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PerspectiveMapper {
    forward: Matrix3<f64>,
    inverse: Matrix3<f64>,
}

impl PerspectiveMapper {
    pub fn new(options: &PerspectiveOptions) -> Result<Self, LaneError> {
        Self::from_points(&options.src, &options.dst)
    }

    /// Build the mapper from camera-space `src` and bird's-eye `dst` points.
    pub fn from_points(src: &[[f64; 2]; 4], dst: &[[f64; 2]; 4]) -> Result<Self, LaneError> {
        let forward = homography_from_quad(src, dst).ok_or(LaneError::DegenerateHomography)?;
        let inverse = invert_homography(&forward).ok_or(LaneError::DegenerateHomography)?;
        debug!("PerspectiveMapper: forward homography {forward:?}");
        Ok(Self { forward, inverse })
    }

    /// Homography applied to points travelling in `direction`.
    pub fn matrix(&self, direction: WarpDirection) -> &Matrix3<f64> {
        match direction {
            WarpDirection::ToBirdsEye => &self.forward,
            WarpDirection::ToCamera => &self.inverse,
        }
    }

    /// Map a single point; `None` if it lands on the line at infinity.
    pub fn map_point(&self, p: [f64; 2], direction: WarpDirection) -> Option<[f64; 2]> {
        apply_homography_point(self.matrix(direction), p)
    }

    pub fn warp_mask(&self, mask: &BinaryMask, direction: WarpDirection) -> BinaryMask {
        let (w, h) = (mask.w, mask.h);
        let data = self.resample(w, h, direction, |sx, sy| {
            let [v] = bilinear(sx, sy, w, h, |x, y| [f32::from(mask.data[y * w + x])]);
            u8::from(v >= 0.5)
        });
        BinaryMask { w, h, data }
    }

    pub fn warp_rgb(&self, image: &RgbImage, direction: WarpDirection) -> RgbImage {
        let (w, h) = (image.w, image.h);
        let data = self.resample(w, h, direction, |sx, sy| {
            let v = bilinear(sx, sy, w, h, |x, y| image.data[y * w + x].map(f32::from));
            v.map(|c| c.round().clamp(0.0, 255.0) as u8)
        });
        RgbImage { w, h, data }
    }

    /// Pull every output pixel from the source through the reverse mapping.
    fn resample<P, F>(&self, width: usize, height: usize, direction: WarpDirection, sample: F) -> Vec<P>
    where
        P: Copy + Default + Send,
        F: Fn(f64, f64) -> P + Sync,
    {
        let back = *self.matrix(direction.reversed());
        let mut out = vec![P::default(); width * height];
        let fill_row = |(y, row): (usize, &mut [P])| {
            for (x, px) in row.iter_mut().enumerate() {
                if let Some([sx, sy]) = apply_homography_point(&back, [x as f64, y as f64]) {
                    *px = sample(sx, sy);
                }
            }
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            out.par_chunks_mut(width.max(1))
                .enumerate()
                .for_each(fill_row);
        }
        #[cfg(not(feature = "parallel"))]
        out.chunks_mut(width.max(1)).enumerate().for_each(fill_row);

        out
    }
}
