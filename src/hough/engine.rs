//! Grid search over (θ, ρ) with feasibility pruning and walk-based voting.
//!
//! For every angle of the table (in order) and every rho of the axis
//! (ascending), cells whose line cannot meet the image are skipped; the rest
//! are rasterized by [`LineWalker`] and scored by [`VoteAccumulator`] with a
//! [`NeighborhoodClassifier`] over the edge map. Lines whose votes exceed the
//! vote threshold are collected in that same theta-major, rho-minor order.
//!
//! Angle rows are independent. With the `parallel` feature each row is scored
//! on the rayon pool into its own vector and rows are concatenated in table
//! order, so the output is identical to the serial run.
use super::feasibility::ImageGeometry;
use super::line::Line;
use super::neighborhood::NeighborhoodClassifier;
use super::params::SearchParameters;
use super::table::{Angle, AngleTable, RhoAxis};
use super::votes::VoteAccumulator;
use super::walker::LineWalker;
use crate::error::SearchError;
use crate::image::ImageU8;
use log::debug;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Counters describing how the grid was traversed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub cells_total: usize,
    pub cells_pruned: usize,
    pub cells_walked: usize,
    pub confirmed: usize,
    pub cancelled: bool,
    pub elapsed_ms: f64,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct SearchResult {
    pub lines: Vec<Line>,
    pub stats: SearchStats,
}

#[derive(Default)]
struct RowScan {
    lines: Vec<Line>,
    pruned: usize,
    walked: usize,
    cancelled: bool,
}

/// Per-image search state: geometry, angle table and rho axis are built once
/// and shared by every cell.
#[derive(Clone, Debug)]
pub struct LineSearchEngine {
    params: SearchParameters,
    geometry: ImageGeometry,
    angles: AngleTable,
    rhos: RhoAxis,
    accumulator: VoteAccumulator,
}

impl LineSearchEngine {
    pub fn new(width: usize, height: usize, params: SearchParameters) -> Result<Self, SearchError> {
        params.validate()?;
        if width == 0 || height == 0 {
            return Err(SearchError::EmptyImage { width, height });
        }
        let geometry = ImageGeometry::new(width, height);
        Ok(Self {
            params,
            geometry,
            angles: AngleTable::new(params.theta_resolution),
            rhos: RhoAxis::new(geometry.diagonal_length, params.rho_resolution),
            accumulator: VoteAccumulator::new(params.local_vote_threshold, params.run_policy),
        })
    }

    /// Engine sized for `image`.
    pub fn for_image(image: &ImageU8<'_>, params: SearchParameters) -> Result<Self, SearchError> {
        Self::new(image.w, image.h, params)
    }

    pub fn params(&self) -> &SearchParameters {
        &self.params
    }

    pub fn geometry(&self) -> &ImageGeometry {
        &self.geometry
    }

    pub fn angles(&self) -> &AngleTable {
        &self.angles
    }

    pub fn rho_axis(&self) -> &RhoAxis {
        &self.rhos
    }

    pub fn search(&self, image: ImageU8<'_>) -> Result<SearchResult, SearchError> {
        self.run(image, None)
    }

    /// Like [`search`](Self::search), but stops visiting cells once `cancel`
    /// is set. Lines confirmed before that point are returned and
    /// `stats.cancelled` is raised; a cell that was already being scored is
    /// always scored to completion.
    pub fn search_with_cancel(
        &self,
        image: ImageU8<'_>,
        cancel: &AtomicBool,
    ) -> Result<SearchResult, SearchError> {
        self.run(image, Some(cancel))
    }

    /// Votes of a single cell, without feasibility pruning.
    pub fn score_cell(&self, classifier: &NeighborhoodClassifier<'_>, rho: f32, angle: &Angle) -> u32 {
        let walker = LineWalker::new(&self.geometry, rho, angle);
        self.accumulator.score(walker, classifier)
    }

    fn run(&self, image: ImageU8<'_>, cancel: Option<&AtomicBool>) -> Result<SearchResult, SearchError> {
        image.validate()?;
        if image.w != self.geometry.width || image.h != self.geometry.height {
            return Err(SearchError::DimensionMismatch {
                expected_width: self.geometry.width,
                expected_height: self.geometry.height,
                actual_width: image.w,
                actual_height: image.h,
            });
        }

        let start = Instant::now();
        let classifier = NeighborhoodClassifier::new(image);
        let rows = self.scan_rows(&classifier, cancel);

        let mut stats = SearchStats {
            cells_total: self.angles.len() * self.rhos.len(),
            ..SearchStats::default()
        };
        let mut lines = Vec::new();
        for row in rows {
            stats.cells_pruned += row.pruned;
            stats.cells_walked += row.walked;
            stats.cancelled |= row.cancelled;
            lines.extend(row.lines);
        }
        stats.confirmed = lines.len();
        stats.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "LineSearchEngine::search {}x{} cells={} pruned={} walked={} confirmed={} cancelled={} elapsed_ms={:.3}",
            self.geometry.width,
            self.geometry.height,
            stats.cells_total,
            stats.cells_pruned,
            stats.cells_walked,
            stats.confirmed,
            stats.cancelled,
            stats.elapsed_ms
        );
        Ok(SearchResult { lines, stats })
    }

    #[cfg(feature = "parallel")]
    fn scan_rows(
        &self,
        classifier: &NeighborhoodClassifier<'_>,
        cancel: Option<&AtomicBool>,
    ) -> Vec<RowScan> {
        use rayon::prelude::*;

        self.angles
            .as_slice()
            .par_iter()
            .map(|angle| self.scan_angle(classifier, angle, cancel))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn scan_rows(
        &self,
        classifier: &NeighborhoodClassifier<'_>,
        cancel: Option<&AtomicBool>,
    ) -> Vec<RowScan> {
        self.angles
            .iter()
            .map(|angle| self.scan_angle(classifier, angle, cancel))
            .collect()
    }

    fn scan_angle(
        &self,
        classifier: &NeighborhoodClassifier<'_>,
        angle: &Angle,
        cancel: Option<&AtomicBool>,
    ) -> RowScan {
        let mut row = RowScan::default();
        for rho in self.rhos.iter() {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                row.cancelled = true;
                break;
            }
            if !self.geometry.is_feasible(rho, angle) {
                row.pruned += 1;
                continue;
            }
            row.walked += 1;
            let votes = self.score_cell(classifier, rho, angle);
            if votes > self.params.vote_threshold {
                row.lines.push(Line {
                    rho,
                    theta: angle.theta,
                    votes,
                });
            }
        }
        row
    }
}

/// Find all confirmed lines of `image`.
pub fn find_lines(image: &ImageU8<'_>, params: &SearchParameters) -> Result<Vec<Line>, SearchError> {
    let engine = LineSearchEngine::for_image(image, *params)?;
    Ok(engine.search(*image)?.lines)
}
