//! Pruned, walk-and-vote Hough line search over a binary edge map.
//!
//! Instead of filling a global (θ, ρ) accumulator from every edge pixel, the
//! search visits the parameter grid directly and confirms each candidate line
//! by walking it pixel by pixel:
//!
//! - [`table`]: angle table with symmetric trig reuse, and the symmetric rho
//!   axis spanning the image diagonal.
//! - [`feasibility`]: constant-time rejection of cells whose line misses the
//!   image rectangle.
//! - [`walker`]: Bresenham rasterization of the surviving line across the
//!   image.
//! - [`neighborhood`]: on-line test that tolerates one-cell rounding error.
//! - [`votes`]: run-length voting that discards short runs as noise.
//! - [`engine`]: orchestration, optional rayon parallelism and cancellation.
//!
//! [`standard`] holds the conventional accumulator transform used as a
//! comparison baseline.

pub mod engine;
pub mod feasibility;
pub mod line;
pub mod neighborhood;
pub mod params;
pub mod standard;
pub mod table;
pub mod votes;
pub mod walker;

pub use engine::{find_lines, LineSearchEngine, SearchResult, SearchStats};
pub use feasibility::ImageGeometry;
pub use line::{to_display_angle, DisplayLine, Line};
pub use neighborhood::{NeighborhoodClassifier, PixelClassifier};
pub use params::{RunPolicy, SearchParameters};
pub use standard::standard_hough;
pub use table::{Angle, AngleTable, RhoAxis};
pub use votes::VoteAccumulator;
pub use walker::{LineWalker, PixelCoord};
