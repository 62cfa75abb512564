//! Seams for the stages that live outside the tracker.
//!
//! Lens correction and lane-pixel masking are pure frame-to-frame functions
//! supplied by the caller. Closures implement both traits, so ad-hoc stages
//! need no wrapper type.
use crate::image::{BinaryMask, RgbImage};

/// Maps a raw camera frame to a lens-corrected frame.
pub trait Rectifier {
    fn rectify(&self, raw: &RgbImage) -> RgbImage;
}

/// Maps a rectified frame to a mask of candidate lane-marking pixels of the
/// same size.
pub trait MaskExtractor {
    fn extract(&self, rectified: &RgbImage) -> BinaryMask;
}

/// Rectifier for inputs that are already lens-corrected.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughRectifier;

impl Rectifier for PassthroughRectifier {
    fn rectify(&self, raw: &RgbImage) -> RgbImage {
        raw.clone()
    }
}

impl<F> Rectifier for F
where
    F: Fn(&RgbImage) -> RgbImage,
{
    fn rectify(&self, raw: &RgbImage) -> RgbImage {
        self(raw)
    }
}

impl<F> MaskExtractor for F
where
    F: Fn(&RgbImage) -> BinaryMask,
{
    fn extract(&self, rectified: &RgbImage) -> BinaryMask {
        self(rectified)
    }
}
