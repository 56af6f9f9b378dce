//! I/O helpers for grayscale images, overlays and JSON reports.
//!
//! - `load_grayscale_image`: read a PNG/JPEG into an owned 8-bit gray buffer.
//! - `save_grayscale_u8`: write an owned 8-bit gray buffer (e.g. an edge map) to a PNG.
//! - `save_rgb_image`: write a rendered overlay to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageU8;
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw, tightly packed bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert!(
            data.len() >= width * height,
            "buffer of {} bytes cannot hold {width}x{height}",
            data.len()
        );
        Self {
            width,
            height,
            stride: width,
            data,
        }
    }

    /// Zero-filled buffer.
    pub fn blank(width: usize, height: usize) -> Self {
        Self::new(width, height, vec![0u8; width * height])
    }

    /// Copy a (possibly strided) view into an owned, packed buffer.
    pub fn from_view(view: &ImageU8<'_>) -> Self {
        let mut data = Vec::with_capacity(view.w * view.h);
        for y in 0..view.h {
            let start = y * view.stride;
            data.extend_from_slice(&view.data[start..start + view.w]);
        }
        Self::new(view.w, view.h, data)
    }

    pub fn from_luma(img: GrayImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        Self::new(width, height, img.into_raw())
    }

    pub fn to_luma(&self) -> Option<GrayImage> {
        GrayImage::from_raw(self.width as u32, self.height as u32, self.data.clone())
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.stride + x] = v;
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    Ok(GrayImageU8::from_luma(img))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = buffer
        .to_luma()
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an RGB image (typically a line overlay) to a PNG.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_view_packs_strided_rows() {
        let data: Vec<u8> = (0..12).collect();
        let view = ImageU8 {
            w: 3,
            h: 3,
            stride: 4,
            data: &data,
        };
        let owned = GrayImageU8::from_view(&view);
        assert_eq!(owned.as_view().stride, 3);
        assert_eq!(owned.as_view().get(2, 2), 10);
        assert_eq!(owned.as_view().get(0, 1), 4);
    }

    #[test]
    fn luma_round_trip_preserves_dimensions() {
        let mut img = GrayImageU8::blank(5, 2);
        img.set(4, 1, 255);
        let luma = img.to_luma().expect("packed buffer converts");
        assert_eq!((luma.width(), luma.height()), (5, 2));
        assert_eq!(GrayImageU8::from_luma(luma), img);
    }
}
