//! Overlay rendering of detected lines for visual inspection.
use crate::hough::{Angle, ImageGeometry, Line, LineWalker};
use crate::image::{ImageU8, ImageView};
use image::{Rgb, RgbImage};

pub const LINE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// RGB copy of `gray`.
pub fn gray_to_rgb(gray: &ImageU8<'_>) -> RgbImage {
    let mut out = RgbImage::new(gray.w as u32, gray.h as u32);
    for y in 0..gray.h {
        for (x, &v) in gray.row(y).iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Rgb([v, v, v]));
        }
    }
    out
}

/// Paint every line across `canvas`. Lines must be expressed in the canvas
/// coordinate frame (rescale worksheet lines first).
pub fn draw_lines(canvas: &mut RgbImage, lines: &[Line], color: Rgb<u8>) {
    let geometry = ImageGeometry::new(canvas.width() as usize, canvas.height() as usize);
    for line in lines {
        let angle = Angle::from_theta(line.theta);
        for pixel in LineWalker::new(&geometry, line.rho, &angle) {
            canvas.put_pixel(pixel.x as u32, pixel.y as u32, color);
        }
    }
}

/// Grayscale input with the lines drawn on top in [`LINE_COLOR`].
pub fn render_overlay(gray: &ImageU8<'_>, lines: &[Line]) -> RgbImage {
    let mut canvas = gray_to_rgb(gray);
    draw_lines(&mut canvas, lines, LINE_COLOR);
    canvas
}
