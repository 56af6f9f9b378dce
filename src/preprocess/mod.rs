//! Preprocessing that turns a grayscale input into the binary edge map the
//! line search consumes: worksheet resize, Gaussian smoothing, gradients and
//! non-maximum suppression.

pub mod filters;
pub mod worksheet;

pub use filters::{blur, SeparableFilter, StaticSeparableFilter, GAUSSIAN_5TAP};
pub use worksheet::{to_worksheet, worksheet_size};

use crate::diagnostics::TimingBreakdown;
use crate::edges::{detect_edges_nms, edge_mask, GradientKernel};
use crate::error::SearchError;
use crate::image::io::GrayImageU8;
use crate::image::{ImageF32, ImageU8};
use log::debug;
use serde::{Deserialize, Serialize};

/// Options of the edge-map stage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeMapOptions {
    /// Number of 5-tap Gaussian passes before gradients.
    pub smoothing_passes: usize,
    pub gradient: GradientKernel,
    /// Minimum gradient magnitude of an edge (kernel units on a `[0, 1]` image).
    pub magnitude_threshold: f32,
}

impl Default for EdgeMapOptions {
    fn default() -> Self {
        Self {
            smoothing_passes: 1,
            gradient: GradientKernel::Scharr,
            magnitude_threshold: 2.0,
        }
    }
}

/// Binary edge map at worksheet resolution.
#[derive(Clone, Debug)]
pub struct EdgeMap {
    pub edges: GrayImageU8,
    pub edge_count: usize,
    /// Input pixels per worksheet pixel.
    pub scale: f32,
    pub timing: TimingBreakdown,
}

impl EdgeMap {
    pub fn view(&self) -> ImageU8<'_> {
        self.edges.as_view()
    }
}

/// Build the worksheet edge map of `gray`.
pub fn build_edge_map(
    gray: &ImageU8<'_>,
    worksheet_length: usize,
    options: &EdgeMapOptions,
) -> Result<EdgeMap, SearchError> {
    gray.validate()?;
    let mut timing = TimingBreakdown::default();

    let sheet = timing
        .measure("worksheet", || to_worksheet(gray, worksheet_length))
        .ok_or(SearchError::BufferTooSmall {
            expected: gray.w * gray.h,
            actual: gray.data.len(),
        })?;
    let view = sheet.as_view();
    view.validate()?;

    let smoothed = timing.measure("smoothing", || {
        let mut level = ImageF32::from_u8(&view);
        for _ in 0..options.smoothing_passes {
            level = blur(&level, &GAUSSIAN_5TAP);
        }
        level
    });

    let nms = detect_edges_nms(&smoothed, options.gradient, options.magnitude_threshold);
    timing.push("gradients", nms.gradient_ms);
    timing.push("nms", nms.nms_ms);

    let edges = edge_mask(view.w, view.h, &nms.edges);
    timing.close();

    debug!(
        "build_edge_map {}x{} -> {}x{} edges={} total_ms={:.3}",
        gray.w,
        gray.h,
        view.w,
        view.h,
        nms.edges.len(),
        timing.total_ms
    );

    Ok(EdgeMap {
        edge_count: nms.edges.len(),
        scale: gray.w as f32 / view.w as f32,
        edges,
        timing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_bar_yields_two_edge_rows() {
        let (w, h) = (80usize, 60usize);
        let mut data = vec![200u8; w * h];
        for y in 28..32 {
            for x in 0..w {
                data[y * w + x] = 20;
            }
        }
        let map = build_edge_map(&ImageU8::packed(w, h, &data), 300, &EdgeMapOptions::default())
            .expect("edge map");
        assert_eq!(map.scale, 1.0);
        assert!(map.edge_count > 0);
        let view = map.view();
        let mid_column: Vec<usize> = (0..h).filter(|&y| view.is_set(w / 2, y)).collect();
        assert_eq!(mid_column.len(), 2, "edge rows: {mid_column:?}");
        assert!(mid_column.iter().all(|&y| (26..=33).contains(&y)));
    }

    #[test]
    fn empty_input_is_rejected() {
        let data: Vec<u8> = Vec::new();
        let result = build_edge_map(&ImageU8::packed(0, 0, &data), 300, &EdgeMapOptions::default());
        assert!(matches!(result, Err(SearchError::EmptyImage { .. })));
    }
}
