//! Separable smoothing applied before gradient computation.
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to be
    /// centred on its middle tap.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

/// Convolve `src` with `filter` along rows then columns, clamping at borders.
pub fn blur<F: SeparableFilter + ?Sized>(src: &ImageF32, filter: &F) -> ImageF32 {
    let taps = filter.taps();
    if taps.is_empty() || src.w == 0 || src.h == 0 {
        return src.clone();
    }
    let radius = taps.len() / 2;

    let mut horizontal = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        let src_row = src.row(y);
        let dst_row = horizontal.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius as isize, src.w);
                acc += tap * src_row[sx];
            }
            *dst_px = acc;
        }
    }

    let mut out = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        for (k, &tap) in taps.iter().enumerate() {
            let sy = clamp_index(y as isize + k as isize - radius as isize, src.h);
            let src_row = &horizontal.data[sy * horizontal.stride..sy * horizontal.stride + src.w];
            let dst_row = out.row_mut(y);
            for (dst_px, &v) in dst_row.iter_mut().zip(src_row) {
                *dst_px += tap * v;
            }
        }
    }
    out
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
