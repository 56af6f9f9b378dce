use crate::error::SearchError;

/// Borrowed 8-bit single-channel image. Zero is background, anything else is
/// an edge sample.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view (`stride == w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.get(x, y) != 0
    }

    /// Checks the layout invariants the search relies on for unchecked-free
    /// indexing: non-empty, stride covers a row, buffer covers every row.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.w == 0 || self.h == 0 {
            return Err(SearchError::EmptyImage {
                width: self.w,
                height: self.h,
            });
        }
        if self.stride < self.w {
            return Err(SearchError::InvalidStride {
                stride: self.stride,
                width: self.w,
            });
        }
        let expected = (self.h - 1) * self.stride + self.w;
        if self.data.len() < expected {
            return Err(SearchError::BufferTooSmall {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Number of non-zero samples.
    pub fn count_set(&self) -> usize {
        (0..self.h)
            .map(|y| {
                let start = y * self.stride;
                self.data[start..start + self.w]
                    .iter()
                    .filter(|&&v| v != 0)
                    .count()
            })
            .sum()
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
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
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
