use thiserror::Error;

/// Precondition violations reported before a line search visits any cell.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("edge image is empty ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    #[error("edge image buffer too small: expected at least {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("edge image stride {stride} is smaller than its width {width}")]
    InvalidStride { stride: usize, width: usize },

    #[error("theta resolution must be positive, got {0}")]
    InvalidThetaResolution(usize),

    #[error("rho resolution must be a positive finite number, got {0}")]
    InvalidRhoResolution(f32),

    #[error(
        "edge image is {actual_width}x{actual_height} but the search was prepared for {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },
}
