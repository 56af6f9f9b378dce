//! Tolerant on-line test for walked pixels.
//!
//! A rounded walk can pass one cell beside the edge pixel that actually lies on
//! the line. Besides the pixel itself, the classifier therefore accepts an
//! edge in the column just behind it (rows `y−1..=y+1`), which absorbs that
//! single-cell discretization error without dilating the whole edge map.
use super::walker::PixelCoord;
use crate::image::ImageU8;

/// Decides whether a walked pixel counts as lying on the line.
pub trait PixelClassifier {
    fn is_on_line(&self, pixel: PixelCoord) -> bool;
}

impl<F> PixelClassifier for F
where
    F: Fn(PixelCoord) -> bool,
{
    #[inline]
    fn is_on_line(&self, pixel: PixelCoord) -> bool {
        self(pixel)
    }
}

/// Offsets consulted around a pixel in addition to the pixel itself.
const TRAILING_COLUMN: [(isize, isize); 3] = [(-1, -1), (-1, 0), (-1, 1)];

/// Edge-map classifier with a one-column trailing window.
///
/// Pixels on the outermost frame are never on the line, which keeps every
/// window lookup inside the image.
#[derive(Clone, Copy, Debug)]
pub struct NeighborhoodClassifier<'a> {
    image: ImageU8<'a>,
}

impl<'a> NeighborhoodClassifier<'a> {
    pub fn new(image: ImageU8<'a>) -> Self {
        Self { image }
    }

    #[inline]
    fn is_border(&self, pixel: PixelCoord) -> bool {
        pixel.x == 0 || pixel.y == 0 || pixel.x + 1 >= self.image.w || pixel.y + 1 >= self.image.h
    }
}

impl PixelClassifier for NeighborhoodClassifier<'_> {
    #[inline]
    fn is_on_line(&self, pixel: PixelCoord) -> bool {
        if self.is_border(pixel) {
            return false;
        }
        if self.image.is_set(pixel.x, pixel.y) {
            return true;
        }
        TRAILING_COLUMN.iter().any(|&(dx, dy)| {
            let x = pixel.x.wrapping_add_signed(dx);
            let y = pixel.y.wrapping_add_signed(dy);
            self.image.is_set(x, y)
        })
    }
}
