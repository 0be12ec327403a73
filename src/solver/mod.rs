//! Solving and memoizing the 81 recognised digits of a located puzzle.
//!
//! - [`grid`]: the 9×9 digit grid and its consistency check.
//! - [`backtrack`]: the default depth-first solve routine.
//! - [`cache`]: [`CachedPuzzleSolver`], validating input and caching
//!   solutions by the exact digit sequence.

pub mod backtrack;
pub mod cache;
pub mod grid;

pub use backtrack::BacktrackingSolver;
pub use cache::CachedPuzzleSolver;
pub use grid::{Grid, CELL_COUNT, EMPTY, MAX_DIGIT};

use std::fmt;

/// Puzzles with fewer given digits are rejected before any search.
pub const MIN_GIVENS: usize = 21;

/// Search strategy used by [`CachedPuzzleSolver`].
pub trait SolveRoutine {
    /// Cheap pre-check run before the cache lookup.
    fn is_solvable(&self, grid: &Grid) -> bool {
        grid.is_consistent()
    }

    /// Fills every empty cell of `grid`; returns `false` and leaves the grid
    /// unchanged if no solution exists.
    fn solve(&mut self, grid: &mut Grid) -> bool;
}

/// Reasons why a digit sequence is not solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveError {
    InvalidLength { found: usize },
    DigitOutOfRange { index: usize, digit: u8 },
    TooFewGivens { found: usize, minimum: usize },
    Inconsistent,
    Unsolvable,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidLength { found } => {
                write!(f, "expected {CELL_COUNT} digits, got {found}")
            }
            SolveError::DigitOutOfRange { index, digit } => {
                write!(f, "digit {digit} at cell {index} exceeds {MAX_DIGIT}")
            }
            SolveError::TooFewGivens { found, minimum } => {
                write!(f, "too few given digits ({found} < {minimum})")
            }
            SolveError::Inconsistent => write!(f, "given digits conflict"),
            SolveError::Unsolvable => write!(f, "puzzle has no solution"),
        }
    }
}

impl std::error::Error for SolveError {}
