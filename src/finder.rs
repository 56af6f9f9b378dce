//! End-to-end line finding: preprocess a grayscale image into a worksheet
//! edge map, then run either the pruned walk-and-vote search or the standard
//! accumulator baseline on it.
use crate::diagnostics::{InputDescriptor, TimingBreakdown};
use crate::error::SearchError;
use crate::hough::{standard_hough, DisplayLine, Line, LineSearchEngine, SearchParameters, SearchStats};
use crate::image::ImageU8;
use crate::preprocess::{build_edge_map, EdgeMap, EdgeMapOptions};
use log::info;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineFinderParams {
    pub search: SearchParameters,
    pub edges: EdgeMapOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinderMethod {
    FasterHough,
    StandardHough,
}

/// Outcome of one run. Lines are in worksheet coordinates; scale them with
/// `input.scale` (see [`FinderReport::lines_in_input`]).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinderReport {
    pub input: InputDescriptor,
    pub method: FinderMethod,
    pub edge_count: usize,
    pub lines: Vec<Line>,
    pub display_lines: Vec<DisplayLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
    pub timing: TimingBreakdown,
}

impl FinderReport {
    pub fn lines_in_input(&self) -> Vec<Line> {
        self.lines
            .iter()
            .map(|line| line.rescaled(self.input.scale))
            .collect()
    }
}

pub struct LineFinder {
    params: LineFinderParams,
    last_edges: Option<EdgeMap>,
}

impl LineFinder {
    pub fn new(params: LineFinderParams) -> Self {
        Self {
            params,
            last_edges: None,
        }
    }

    pub fn params(&self) -> &LineFinderParams {
        &self.params
    }

    /// Edge map of the most recent run.
    pub fn last_edge_map(&self) -> Option<&EdgeMap> {
        self.last_edges.as_ref()
    }

    pub fn run_faster_hough(&mut self, gray: ImageU8<'_>) -> Result<FinderReport, SearchError> {
        self.run(gray, FinderMethod::FasterHough)
    }

    pub fn run_standard_hough(&mut self, gray: ImageU8<'_>) -> Result<FinderReport, SearchError> {
        self.run(gray, FinderMethod::StandardHough)
    }

    fn run(&mut self, gray: ImageU8<'_>, method: FinderMethod) -> Result<FinderReport, SearchError> {
        let search = self.params.search;
        search.validate()?;
        let edge_map = build_edge_map(&gray, search.worksheet_length, &self.params.edges)?;
        let worksheet = edge_map.view();

        let mut timing = TimingBreakdown::default();
        timing.extend_prefixed("preprocess", &edge_map.timing);

        let start = Instant::now();
        let (lines, stats) = match method {
            FinderMethod::FasterHough => {
                let engine = LineSearchEngine::for_image(&worksheet, search)?;
                let result = engine.search(worksheet)?;
                (result.lines, Some(result.stats))
            }
            FinderMethod::StandardHough => (standard_hough(&worksheet, &search)?, None),
        };
        timing.push("search", start.elapsed().as_secs_f64() * 1000.0);
        timing.close();

        info!(
            "LineFinder::{:?} input={}x{} worksheet={}x{} edges={} lines={} total_ms={:.3}",
            method,
            gray.w,
            gray.h,
            worksheet.w,
            worksheet.h,
            edge_map.edge_count,
            lines.len(),
            timing.total_ms
        );
        for stage in &timing.stages {
            info!("  {}: {:.3} ms", stage.label, stage.elapsed_ms);
        }

        let report = FinderReport {
            input: InputDescriptor {
                width: gray.w,
                height: gray.h,
                worksheet_width: worksheet.w,
                worksheet_height: worksheet.h,
                scale: edge_map.scale,
            },
            method,
            edge_count: edge_map.edge_count,
            display_lines: lines.iter().map(Line::to_display).collect(),
            lines,
            stats,
            timing,
        };
        self.last_edges = Some(edge_map);
        Ok(report)
    }
}

impl Default for LineFinder {
    fn default() -> Self {
        Self::new(LineFinderParams::default())
    }
}
