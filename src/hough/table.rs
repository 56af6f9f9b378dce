//! Discretized parameter axes of the (θ, ρ) search grid.
//!
//! The angle table spans [0, π) with `N` buckets. When `N` is a multiple of
//! four only the first octant-and-a-bit `[0, π/4]` is evaluated with
//! `sin_cos`; every other entry is a reflection of an earlier one:
//!
//! - `(π/4, π/2]`: entry `i` mirrors `N/2 − i` with cos and sin swapped,
//!   since `cos(π/2 − a) = sin a`.
//! - `(π/2, π)`: entry `i` rotates `i − N/2` by a quarter turn, so
//!   `cos = −sin` and `sin = cos` of the earlier entry.
//!
//! Entries at θ = 0 and θ = π/2 therefore carry exact zeros, which the walker
//! relies on to take its axis-aligned branches.
use crate::angle::normalize_half_pi;
use log::warn;
use serde::Serialize;
use std::f32::consts::PI;

/// One angle bucket with its precomputed trigonometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Angle {
    pub theta: f32,
    pub cos: f32,
    pub sin: f32,
}

impl Angle {
    pub fn from_theta(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { theta, cos, sin }
    }
}

#[derive(Clone, Debug)]
pub struct AngleTable {
    entries: Vec<Angle>,
    step: f32,
    trig_evaluations: usize,
}

impl AngleTable {
    pub fn new(resolution: usize) -> Self {
        if resolution == 0 {
            return Self {
                entries: Vec::new(),
                step: 0.0,
                trig_evaluations: 0,
            };
        }
        let step = PI / resolution as f32;
        if resolution % 4 == 0 {
            Self::build_symmetric(resolution, step)
        } else {
            warn!(
                "AngleTable::new resolution {resolution} is not a multiple of 4, evaluating every entry"
            );
            Self::build_direct(resolution, step)
        }
    }

    fn build_symmetric(resolution: usize, step: f32) -> Self {
        let quarter = resolution / 4;
        let half = resolution / 2;
        let mut entries: Vec<Angle> = Vec::with_capacity(resolution);
        let mut trig_evaluations = 0;
        for i in 0..resolution {
            let theta = i as f32 * step;
            let (cos, sin) = if i <= quarter {
                trig_evaluations += 1;
                let (sin, cos) = theta.sin_cos();
                (cos, sin)
            } else if i <= half {
                let mirror = entries[half - i];
                (mirror.sin, mirror.cos)
            } else {
                let base = entries[i - half];
                (-base.sin, base.cos)
            };
            entries.push(Angle { theta, cos, sin });
        }
        Self {
            entries,
            step,
            trig_evaluations,
        }
    }

    fn build_direct(resolution: usize, step: f32) -> Self {
        let entries = (0..resolution)
            .map(|i| {
                let theta = i as f32 * step;
                if 2 * i == resolution {
                    Angle {
                        theta,
                        cos: 0.0,
                        sin: 1.0,
                    }
                } else {
                    let (sin, cos) = theta.sin_cos();
                    Angle { theta, cos, sin }
                }
            })
            .collect();
        Self {
            entries,
            step,
            trig_evaluations: resolution,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Angle> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Angle> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Angle] {
        &self.entries
    }

    /// Angular width of one bucket in radians.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// How many entries were computed with `sin_cos` rather than reflected.
    pub fn trig_evaluations(&self) -> usize {
        self.trig_evaluations
    }

    /// Bucket closest to `theta` after folding it into [0, π).
    pub fn nearest_index(&self, theta: f32) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let folded = normalize_half_pi(theta);
        let idx = (folded / self.step).round() as usize;
        Some(idx % self.entries.len())
    }
}

/// Symmetric rho buckets `k · resolution` for `k ∈ [−K, K]`, where `K` is the
/// largest integer with `K · resolution ≤ ceil(diagonal)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RhoAxis {
    resolution: f32,
    half_count: usize,
    max_rho: f32,
}

impl RhoAxis {
    pub fn new(diagonal_length: f32, resolution: f32) -> Self {
        let max_rho = diagonal_length.ceil().max(0.0);
        let half_count = if resolution > 0.0 && resolution.is_finite() {
            (max_rho / resolution).floor() as usize
        } else {
            0
        };
        Self {
            resolution,
            half_count,
            max_rho,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        2 * self.half_count + 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// `ceil` of the diagonal the axis was built from.
    pub fn max_rho(&self) -> f32 {
        self.max_rho
    }

    #[inline]
    pub fn value(&self, index: usize) -> f32 {
        (index as f32 - self.half_count as f32) * self.resolution
    }

    /// Rho values in ascending order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        (0..self.len()).map(move |i| self.value(i))
    }

    /// Index of the bucket nearest to `rho`, if it falls on the axis.
    pub fn nearest_index(&self, rho: f32) -> Option<usize> {
        let k = (rho / self.resolution).round() + self.half_count as f32;
        if k < 0.0 || k >= self.len() as f32 {
            None
        } else {
            Some(k as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn symmetric_table_matches_direct_trig() {
        for &n in &[4usize, 8, 36, 180, 360, 1024] {
            let table = AngleTable::new(n);
            assert_eq!(table.len(), n);
            assert_eq!(table.trig_evaluations(), n / 4 + 1);
            for (i, angle) in table.iter().enumerate() {
                let theta = i as f64 * std::f64::consts::PI / n as f64;
                assert_abs_diff_eq!(angle.theta as f64, theta, epsilon = 1e-5);
                assert_abs_diff_eq!(angle.cos as f64, theta.cos(), epsilon = 1e-5);
                assert_abs_diff_eq!(angle.sin as f64, theta.sin(), epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn axis_aligned_entries_are_exact() {
        let table = AngleTable::new(360);
        let zero = table.get(0).copied().expect("entry 0");
        assert_eq!((zero.cos, zero.sin), (1.0, 0.0));
        let right = table.get(180).copied().expect("entry 180");
        assert_eq!((right.cos, right.sin), (0.0, 1.0));
    }

    #[test]
    fn non_multiple_of_four_falls_back_to_direct() {
        let table = AngleTable::new(6);
        assert_eq!(table.trig_evaluations(), 6);
        let right = table.get(3).copied().expect("entry 3");
        assert_eq!(right.cos, 0.0);
        for (i, angle) in table.iter().enumerate() {
            let theta = i as f32 * PI / 6.0;
            assert_abs_diff_eq!(angle.cos, theta.cos(), epsilon = 1e-5);
            assert_abs_diff_eq!(angle.sin, theta.sin(), epsilon = 1e-5);
        }
    }

    #[test]
    fn nearest_index_folds_theta() {
        let table = AngleTable::new(180);
        assert_eq!(table.nearest_index(0.0), Some(0));
        assert_eq!(table.nearest_index(PI / 2.0), Some(90));
        assert_eq!(table.nearest_index(PI + PI / 2.0), Some(90));
        assert_eq!(table.nearest_index(-PI / 180.0), Some(179));
        assert_eq!(AngleTable::new(0).nearest_index(1.0), None);
    }

    #[test]
    fn rho_axis_is_symmetric() {
        let axis = RhoAxis::new(111.8, 1.0);
        assert_eq!(axis.max_rho(), 112.0);
        assert_eq!(axis.len(), 225);
        let values: Vec<f32> = axis.iter().collect();
        assert_eq!(values[0], -112.0);
        assert_eq!(values[112], 0.0);
        assert_eq!(values[224], 112.0);
        assert!(values.windows(2).all(|w| w[0] < w[1]));

        let coarse = RhoAxis::new(10.0, 3.0);
        let coarse_values: Vec<f32> = coarse.iter().collect();
        assert_eq!(coarse_values, vec![-9.0, -6.0, -3.0, 0.0, 3.0, 6.0, 9.0]);
        assert_eq!(coarse.nearest_index(4.0), Some(4));
        assert_eq!(coarse.nearest_index(-20.0), None);
    }
}
