//! Serializable run reports: input description and per-stage timings.
//!
//! `FinderReport` (see `crate::finder`) bundles these with the detected lines
//! and the search counters so tooling can dump a single JSON document per run.

pub mod input;
pub mod timing;

pub use input::InputDescriptor;
pub use timing::{StageTiming, TimingBreakdown};
pub use crate::hough::SearchStats;
