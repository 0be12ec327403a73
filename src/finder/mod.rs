//! Puzzle finder locating a 9×9 grid in a Hough accumulator.
//!
//! Overview
//! - Extracts local maxima above a floor of ¾ of the strongest cell and
//!   converts them to `(θ, ρ)` lines in target-image coordinates.
//! - Groups the lines into parallel families with a single greedy pass over
//!   a drifting circular mean.
//! - Searches each family for the widest four evenly spaced lines: the outer
//!   border and the two inner block borders of the puzzle along one axis.
//! - Pairs two such quads that are ~π/2 apart and intersects their outer
//!   lines to obtain the four corners.
//!
//! Modules
//! - [`params`] – tolerances used by the stages.
//! - [`peaks`] – peak extraction.
//! - [`clustering`] – greedy angle clustering.
//! - [`spacing`] – evenly spaced quad search.
//! - [`pairing`] – perpendicular pairing and corner resolution.
//! - `pipeline` – the [`PuzzleFinder`] driving the stages.
//! - `workspace` – reusable buffers that amortise allocations across frames.
//!
//! Failing to find a puzzle is the common case on video frames and is
//! reported as `None`, never as an error.

pub mod clustering;
pub mod pairing;
pub mod params;
pub mod peaks;
mod pipeline;
pub mod spacing;
mod workspace;

pub use params::FinderParams;
pub use pipeline::PuzzleFinder;
pub use workspace::FinderWorkspace;
