#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod error;
pub mod finder;
pub mod hough;
pub mod image;

// Supporting stages and tooling.
pub mod angle;
pub mod config;
pub mod diagnostics;
pub mod edges;
pub mod preprocess;
pub mod render;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::SearchError;
pub use crate::finder::{FinderMethod, FinderReport, LineFinder, LineFinderParams};
pub use crate::hough::{
    find_lines, standard_hough, to_display_angle, DisplayLine, Line, LineSearchEngine, RunPolicy,
    SearchParameters, SearchResult, SearchStats,
};
pub use crate::preprocess::{build_edge_map, worksheet_size, EdgeMapOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use faster_hough::prelude::*;
///
/// # fn main() -> Result<(), SearchError> {
/// let (w, h) = (100usize, 50usize);
/// let mut edges = vec![0u8; w * h];
/// for x in 10..90 {
///     edges[25 * w + x] = 255;
/// }
/// let img = ImageU8::packed(w, h, &edges);
///
/// let params = SearchParameters::default().with_vote_threshold(30);
/// let lines = find_lines(&img, &params)?;
/// for line in &lines {
///     println!("rho={} theta={} votes={}", line.rho, line.theta, line.votes);
/// }
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{
        find_lines, Line, LineFinder, LineFinderParams, LineSearchEngine, SearchError,
        SearchParameters,
    };
}
