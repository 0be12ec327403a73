//! Diagnostics data model exposed by the finder and the demo binaries.
//!
//! `FinderReport` is the entry point returned by
//! [`PuzzleFinder::find_with_diagnostics`](crate::PuzzleFinder): the located
//! corners (if any) plus a `FinderTrace` with per-stage counts, the stage that
//! stopped the run and the timings.

pub mod pipeline;
pub mod timing;

pub use pipeline::{FindFailure, FinderReport, FinderTrace, InputDescriptor};
pub use timing::{FinderStage, StageTiming, TimingBreakdown};
