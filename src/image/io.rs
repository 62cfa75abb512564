//! I/O helpers for frames, masks and JSON reports.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned [`RgbImage`].
//! - `load_mask_image`: read a mask image as luma and binarise it.
//! - `save_rgb_image` / `save_mask_image`: write frames and masks to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{BinaryMask, RgbImage};
use image::{GrayImage, RgbImage as RgbBuffer};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    RgbImage::from_interleaved(w, h, img.as_raw())
        .ok_or_else(|| format!("Unexpected RGB buffer size in {}", path.display()))
}

/// Load a mask image; pixels whose luma is above `threshold` are lane pixels.
pub fn load_mask_image(path: &Path, threshold: u8) -> Result<BinaryMask, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    BinaryMask::from_luma(w, h, img.as_raw(), threshold)
        .ok_or_else(|| format!("Unexpected mask buffer size in {}", path.display()))
}

/// Save an RGB frame to any format supported by the `image` crate.
pub fn save_rgb_image(frame: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let buffer = RgbBuffer::from_raw(frame.w as u32, frame.h as u32, frame.to_interleaved())
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    buffer
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a binary mask as a 0/255 grayscale image.
pub fn save_mask_image(mask: &BinaryMask, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let buffer = GrayImage::from_raw(mask.w as u32, mask.h as u32, mask.to_luma_bytes())
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    buffer
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
