#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod finder;
pub mod image;
pub mod solver;
pub mod types;

// Helpers shared by the stages and the demo binaries.
pub mod angle;
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: finder + results.
pub use crate::finder::{FinderParams, PuzzleFinder};
pub use crate::types::{Line, Point, PuzzleCorners, PuzzleLines};

// Diagnostics returned by the finder.
pub use crate::diagnostics::{FindFailure, FinderReport};

// Downstream consumer of the recognised digits.
pub use crate::solver::{CachedPuzzleSolver, SolveError};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use puzzle_finder::prelude::*;
///
/// # fn main() {
/// let (w, h) = (180usize, 200usize);
/// let packed = vec![0u8; w * h * 3];
/// let acc = AccumulatorImage::new(w, h, &packed).expect("buffer size");
///
/// let mut finder = PuzzleFinder::new(FinderParams::default());
/// let corners = finder.find(1280, 720, &acc);
/// println!("found={}", corners.is_some());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{AccumulatorImage, AccumulatorView};
    pub use crate::{FinderParams, PuzzleCorners, PuzzleFinder};
}
