//! Owned 8-bit RGB frame, one `[r, g, b]` triple per pixel, row-major.
use super::{ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    pub w: usize,
    pub h: usize,
    pub data: Vec<[u8; 3]>,
}

impl RgbImage {
    /// Black frame of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, [0, 0, 0])
    }

    pub fn filled(w: usize, h: usize, rgb: [u8; 3]) -> Self {
        Self {
            w,
            h,
            data: vec![rgb; w * h],
        }
    }

    /// Wrap interleaved `RGBRGB...` bytes; `None` if the length does not match.
    pub fn from_interleaved(w: usize, h: usize, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != w * h * 3 {
            return None;
        }
        let data = bytes.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();
        Some(Self { w, h, data })
    }

    pub fn to_interleaved(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.iter().copied()).collect()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        self.data[y * self.w + x] = rgb;
    }
}

impl ImageView for RgbImage {
    type Pixel = [u8; 3];

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[[u8; 3]] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for RgbImage {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [[u8; 3]] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}
