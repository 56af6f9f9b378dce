//! Working-resolution ("worksheet") sizing.
//!
//! The search runs on a copy of the input whose shorter side is brought down
//! to the worksheet length, keeping the aspect ratio. Inputs that are already
//! small enough are used as they are; nothing is ever upscaled.
use crate::image::io::GrayImageU8;
use crate::image::ImageU8;
use image::imageops::{self, FilterType};
use log::debug;

/// Worksheet dimensions `(width, height)` for an input of `width × height`.
pub fn worksheet_size(width: usize, height: usize, worksheet_length: usize) -> (usize, usize) {
    let (w, h) = (width as f64, height as f64);
    let target = worksheet_length as f64;
    let (w, h) = if height > width {
        if width > worksheet_length {
            (target, h / w * target)
        } else {
            (w, h)
        }
    } else if height < width {
        if height > worksheet_length {
            (w / h * target, target)
        } else {
            (w, h)
        }
    } else if width > worksheet_length {
        (target, target)
    } else {
        (w, h)
    };
    (w as usize, h as usize)
}

/// Resize `gray` to its worksheet size. Returns an owned copy either way.
pub fn to_worksheet(gray: &ImageU8<'_>, worksheet_length: usize) -> Option<GrayImageU8> {
    let (ww, wh) = worksheet_size(gray.w, gray.h, worksheet_length);
    let owned = GrayImageU8::from_view(gray);
    if (ww, wh) == (gray.w, gray.h) {
        return Some(owned);
    }
    debug!(
        "to_worksheet resizing {}x{} -> {}x{}",
        gray.w, gray.h, ww, wh
    );
    let luma = owned.to_luma()?;
    let resized = imageops::resize(&luma, ww as u32, wh as u32, FilterType::Triangle);
    Some(GrayImageU8::from_luma(resized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_side_is_brought_to_worksheet_length() {
        assert_eq!(worksheet_size(1200, 600, 300), (600, 300));
        assert_eq!(worksheet_size(600, 1200, 300), (300, 600));
        assert_eq!(worksheet_size(1000, 1000, 300), (300, 300));
    }

    #[test]
    fn small_inputs_are_left_alone() {
        assert_eq!(worksheet_size(400, 250, 300), (400, 250));
        assert_eq!(worksheet_size(200, 200, 300), (200, 200));
        assert_eq!(worksheet_size(100, 50, 300), (100, 50));
    }

    #[test]
    fn to_worksheet_resizes_large_views() {
        let data = vec![128u8; 40 * 20];
        let view = ImageU8::packed(40, 20, &data);
        let sheet = to_worksheet(&view, 10).expect("resized");
        assert_eq!((sheet.width(), sheet.height()), (20, 10));
        assert_eq!(sheet.as_view().get(5, 5), 128);

        let same = to_worksheet(&view, 300).expect("copied");
        assert_eq!((same.width(), same.height()), (40, 20));
    }
}
