//! Angle utilities shared by the search core and the presentation helpers.

use std::f32::consts::{FRAC_PI_2, PI};

/// Normalizes an angle into the range [0, π).
#[inline]
pub fn normalize_half_pi(angle: f32) -> f32 {
    let mut norm = angle.rem_euclid(PI);
    if norm >= PI {
        norm -= PI;
    }
    if norm >= PI - 1e-6 {
        0.0
    } else {
        norm
    }
}

/// Computes the smallest unsigned angular difference between two line
/// orientations, treating antipodal directions as equivalent (i.e. π apart → 0).
#[inline]
pub fn angular_difference(a: f32, b: f32) -> f32 {
    let mut diff = (a - b).abs();
    if diff > PI {
        diff = diff.rem_euclid(PI);
    }
    if diff > FRAC_PI_2 {
        PI - diff
    } else {
        diff
    }
}

/// Folds an angle in degrees into [-45°, 45°] by quarter turns.
///
/// Lines that differ by 90° describe the same axis-aligned structure (rows vs
/// columns), so skew estimation only needs the residual tilt.
#[inline]
pub fn fold_quarter_turn_deg(deg: f32) -> f32 {
    if deg < -45.0 {
        deg + 90.0
    } else if deg > 45.0 {
        deg - 90.0
    } else {
        deg
    }
}
