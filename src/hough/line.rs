use crate::angle::{fold_quarter_turn_deg, normalize_half_pi};
use serde::{Deserialize, Serialize};

/// Detected line in normal form `rho = x·cos(theta) + y·sin(theta)`.
///
/// `theta` is in radians within [0, π); `rho` is in pixels of the image the
/// search ran on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub rho: f32,
    pub theta: f32,
    pub votes: u32,
}

impl Line {
    /// Build a line, folding `theta` into [0, π) and flipping the sign of
    /// `rho` when the fold crosses a half turn.
    pub fn new(rho: f32, theta: f32, votes: u32) -> Self {
        let folded = normalize_half_pi(theta);
        let half_turns = ((theta - folded) / std::f32::consts::PI).round() as i64;
        let rho = if half_turns % 2 == 0 { rho } else { -rho };
        Self {
            rho,
            theta: folded,
            votes,
        }
    }

    #[inline]
    pub fn is_confirmed(&self, vote_threshold: u32) -> bool {
        self.votes > vote_threshold
    }

    /// Same line expressed in an image scaled by `scale` (e.g. worksheet to
    /// input coordinates).
    pub fn rescaled(&self, scale: f32) -> Self {
        Self {
            rho: self.rho * scale,
            ..*self
        }
    }

    /// Signed distance of `(x, y)` from the line.
    #[inline]
    pub fn distance(&self, x: f32, y: f32) -> f32 {
        let (sin, cos) = self.theta.sin_cos();
        x * cos + y * sin - self.rho
    }

    pub fn to_display(&self) -> DisplayLine {
        to_display_angle(self)
    }
}

/// Presentation form of a [`Line`]: `theta_deg = 90 − theta·180/π`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLine {
    pub rho: f32,
    pub theta_deg: f32,
    pub votes: u32,
}

impl DisplayLine {
    /// Residual tilt folded into [−45°, 45°].
    pub fn skew_deg(&self) -> f32 {
        fold_quarter_turn_deg(self.theta_deg)
    }
}

/// Reinterpret a line's angle for rendering; detection is unaffected.
pub fn to_display_angle(line: &Line) -> DisplayLine {
    DisplayLine {
        rho: line.rho,
        theta_deg: 90.0 - line.theta.to_degrees(),
        votes: line.votes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn new_folds_theta_and_flips_rho() {
        let line = Line::new(10.0, PI + 0.25, 7);
        assert_abs_diff_eq!(line.theta, 0.25, epsilon = 1e-5);
        assert_eq!(line.rho, -10.0);
        let same = Line::new(10.0, 0.25, 7);
        assert_eq!(same.rho, 10.0);
        let (sin, cos) = (PI + 0.25).sin_cos();
        let unfolded = 3.0 * cos + 4.0 * sin - 10.0;
        assert_abs_diff_eq!(line.distance(3.0, 4.0), -unfolded, epsilon = 1e-4);
    }

    #[test]
    fn confirmation_is_strict() {
        let line = Line::new(5.0, 0.0, 30);
        assert!(!line.is_confirmed(30));
        assert!(line.is_confirmed(29));
    }

    #[test]
    fn display_angle_offsets_by_ninety_degrees() {
        let horizontal = Line::new(25.0, FRAC_PI_2, 80).to_display();
        assert_abs_diff_eq!(horizontal.theta_deg, 0.0, epsilon = 1e-4);
        assert_eq!(horizontal.votes, 80);
        assert_eq!(horizontal.rho, 25.0);

        let vertical = to_display_angle(&Line::new(10.0, 0.0, 40));
        assert_abs_diff_eq!(vertical.theta_deg, 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(vertical.skew_deg(), 0.0, epsilon = 1e-4);

        let tilted = Line::new(0.0, 100f32.to_radians(), 1).to_display();
        assert_abs_diff_eq!(tilted.theta_deg, -10.0, epsilon = 1e-3);
        assert_abs_diff_eq!(tilted.skew_deg(), -10.0, epsilon = 1e-3);
    }

    #[test]
    fn rescaled_keeps_angle_and_votes() {
        let line = Line::new(12.0, 1.0, 9).rescaled(2.5);
        assert_eq!(line.rho, 30.0);
        assert_eq!(line.votes, 9);
        assert_abs_diff_eq!(line.theta, 1.0, epsilon = 1e-6);
    }
}
