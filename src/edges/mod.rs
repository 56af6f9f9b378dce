//! Edge extraction for the preprocessing stage: image gradients and a
//! Canny-style non-maximum suppression that yields the binary edge map the
//! line search consumes.
//!
//! - Gradient computation (Sobel/Scharr) returning `gx`, `gy` and magnitude.
//! - Non-maximum suppression along the quantized gradient direction, emitting
//!   sparse edge elements and a 0/255 edge mask.
//!
//! Borders are handled by clamping in the gradient pass; NMS ignores the
//! outermost 1-pixel frame, which the line search never counts anyway.

pub mod grad;
pub mod nms;

pub use grad::{image_gradients, scharr_gradients, sobel_gradients, Grad, GradientKernel};
pub use nms::{detect_edges_nms, edge_mask, EdgeElement, NmsEdgesResult};
