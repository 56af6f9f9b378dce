//! Conventional global-accumulator Hough transform, kept as a baseline.
//!
//! Every edge pixel votes once per angle into the nearest rho bucket; buckets
//! above the vote threshold that are also maxima of their 4-neighbourhood in
//! (θ, ρ) are reported. Shares the angle table, rho axis and [`Line`] type
//! with the pruned search so the two can be compared directly.
use super::feasibility::ImageGeometry;
use super::line::Line;
use super::params::SearchParameters;
use super::table::{AngleTable, RhoAxis};
use crate::error::SearchError;
use crate::image::{ImageU8, ImageView};
use log::debug;

/// Dense vote grid, `theta`-major.
#[derive(Clone, Debug)]
pub struct HoughAccumulator {
    angles: AngleTable,
    rhos: RhoAxis,
    data: Vec<u32>,
}

impl HoughAccumulator {
    pub fn new(geometry: &ImageGeometry, params: &SearchParameters) -> Self {
        let angles = AngleTable::new(params.theta_resolution);
        let rhos = RhoAxis::new(geometry.diagonal_length, params.rho_resolution);
        let data = vec![0u32; angles.len() * rhos.len()];
        Self { angles, rhos, data }
    }

    #[inline]
    pub fn votes(&self, theta_idx: usize, rho_idx: usize) -> u32 {
        self.data[theta_idx * self.rhos.len() + rho_idx]
    }

    fn accumulate(&mut self, image: &ImageU8<'_>) {
        let rho_bins = self.rhos.len();
        for y in 0..image.h {
            for (x, &v) in image.row(y).iter().enumerate() {
                if v == 0 {
                    continue;
                }
                let (fx, fy) = (x as f32, y as f32);
                for (t, angle) in self.angles.iter().enumerate() {
                    let rho = fx * angle.cos + fy * angle.sin;
                    if let Some(r) = self.rhos.nearest_index(rho) {
                        let idx = t * rho_bins + r;
                        self.data[idx] = self.data[idx].saturating_add(1);
                    }
                }
            }
        }
    }

    fn is_local_max(&self, t: usize, r: usize) -> bool {
        let v = self.votes(t, r);
        let rho_bins = self.rhos.len();
        let left = r.checked_sub(1).map(|r| self.votes(t, r));
        let right = (r + 1 < rho_bins).then(|| self.votes(t, r + 1));
        let up = t.checked_sub(1).map(|t| self.votes(t, r));
        let down = (t + 1 < self.angles.len()).then(|| self.votes(t + 1, r));
        // Ties resolve towards the lower index so a plateau reports once.
        left.map_or(true, |n| v > n)
            && up.map_or(true, |n| v > n)
            && right.map_or(true, |n| v >= n)
            && down.map_or(true, |n| v >= n)
    }

    fn peaks(&self, vote_threshold: u32) -> Vec<Line> {
        let mut lines = Vec::new();
        for (t, angle) in self.angles.iter().enumerate() {
            for r in 0..self.rhos.len() {
                let votes = self.votes(t, r);
                if votes > vote_threshold && self.is_local_max(t, r) {
                    lines.push(Line {
                        rho: self.rhos.value(r),
                        theta: angle.theta,
                        votes,
                    });
                }
            }
        }
        lines
    }
}

/// Run the baseline transform over `image` and return its peaks in
/// theta-major, rho-minor order.
pub fn standard_hough(image: &ImageU8<'_>, params: &SearchParameters) -> Result<Vec<Line>, SearchError> {
    params.validate()?;
    image.validate()?;
    let geometry = ImageGeometry::new(image.w, image.h);
    let mut accumulator = HoughAccumulator::new(&geometry, params);
    accumulator.accumulate(image);
    let lines = accumulator.peaks(params.vote_threshold);
    debug!(
        "standard_hough {}x{} bins={} peaks={}",
        image.w,
        image.h,
        accumulator.data.len(),
        lines.len()
    );
    Ok(lines)
}
