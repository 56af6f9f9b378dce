//! O(1) rejection of (ρ, θ) cells whose line misses the image.
//!
//! A line `ρ = x·cosθ + y·sinθ` meets the rectangle `[0, W] × [0, H]` iff ρ
//! lies between the smallest and largest projection of the four corners onto
//! the normal `(cosθ, sinθ)`. With θ in [0, π) the sign of cosθ and the
//! diagonal angle `atan2(H, W)` pick the extremal corners:
//!
//! - ρ ≥ 0, θ ≤ π/2: the far corner `(W, H)` bounds ρ from above.
//! - ρ ≥ 0, θ > π/2: the corner `(0, H)` bounds ρ by `H·sinθ`.
//! - ρ < 0, θ ≤ π/2: every projection is non-negative, nothing to walk.
//! - ρ < 0, π/2 < θ < π/2 + diagonal: accept down to `−H·sinθ`, which is never
//!   above the exact bound `W·cosθ` in this range.
//! - ρ < 0, θ ≥ π/2 + diagonal: the corner `(W, 0)` bounds ρ by `W·cosθ`.
//!
//! The filter may accept cells that turn out empty; it never rejects a line
//! that crosses a pixel centre of the image.
use super::table::Angle;
use serde::Serialize;

/// Size-derived constants of the working image, computed once per search.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGeometry {
    pub width: usize,
    pub height: usize,
    /// `atan2(height, width)`
    pub diagonal_angle: f32,
    /// `hypot(width, height)`
    pub diagonal_length: f32,
}

impl ImageGeometry {
    pub fn new(width: usize, height: usize) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self {
            width,
            height,
            diagonal_angle: h.atan2(w),
            diagonal_length: w.hypot(h),
        }
    }

    /// Whether any part of the line `(rho, angle)` can fall inside the image.
    #[inline]
    pub fn is_feasible(&self, rho: f32, angle: &Angle) -> bool {
        let w = self.width as f32;
        let h = self.height as f32;
        if rho >= 0.0 {
            if angle.cos >= 0.0 {
                rho <= w * angle.cos + h * angle.sin
            } else {
                rho <= h * angle.sin
            }
        } else if angle.cos >= 0.0 {
            false
        } else if angle.theta < std::f32::consts::FRAC_PI_2 + self.diagonal_angle {
            rho >= -h * angle.sin
        } else {
            rho >= w * angle.cos
        }
    }
}
