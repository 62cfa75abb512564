//! Owned binary lane-pixel mask in row-major layout.
//!
//! Pixels are stored as `0` / `1` bytes. A mask is produced once per frame by
//! the mask extractor (or by warping such a mask into the bird's-eye view) and
//! is not modified afterwards.
use super::ImageView;
use crate::types::PixelCoord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMask {
    /// Mask width in pixels
    pub w: usize,
    /// Mask height in pixels
    pub h: usize,
    /// Backing storage, one `0`/`1` byte per pixel
    pub data: Vec<u8>,
}

impl BinaryMask {
    /// Construct an all-zero mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Build a mask by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(u8::from(f(x, y)));
            }
        }
        Self { w, h, data }
    }

    /// Binarise row-major 8-bit luma: pixels strictly above `threshold` are
    /// set. `None` if the buffer length does not match `w × h`.
    pub fn from_luma(w: usize, h: usize, luma: &[u8], threshold: u8) -> Option<Self> {
        if luma.len() != w * h {
            return None;
        }
        let data = luma.iter().map(|&v| u8::from(v > threshold)).collect();
        Some(Self { w, h, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.data[y * self.w + x] = u8::from(on);
    }

    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Iterate the coordinates of all set pixels in row-major order.
    pub fn nonzero(&self) -> impl Iterator<Item = PixelCoord> + '_ {
        let w = self.w.max(1);
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(move |(i, _)| (i % w, i / w))
    }

    /// Expand to a 0/255 grayscale buffer for visualisation.
    pub fn to_luma_bytes(&self) -> Vec<u8> {
        self.data.iter().map(|&v| if v != 0 { 255 } else { 0 }).collect()
    }
}

impl ImageView for BinaryMask {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}
