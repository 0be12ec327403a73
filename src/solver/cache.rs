//! Memoizing front end for the solve routine.
//!
//! The classifier re-reads the same puzzle on every video frame, so solved
//! grids are cached by their exact input digits and served again without
//! re-running the search.
use super::grid::{Grid, CELL_COUNT, MAX_DIGIT};
use super::{BacktrackingSolver, SolveError, SolveRoutine, MIN_GIVENS};
use log::debug;
use std::collections::HashMap;

pub struct CachedPuzzleSolver<S = BacktrackingSolver> {
    routine: S,
    solved: HashMap<Vec<u8>, Vec<u8>>,
    last_used: Option<Vec<u8>>,
}

impl Default for CachedPuzzleSolver<BacktrackingSolver> {
    fn default() -> Self {
        Self::new(BacktrackingSolver)
    }
}

impl<S: SolveRoutine> CachedPuzzleSolver<S> {
    pub fn new(routine: S) -> Self {
        Self {
            routine,
            solved: HashMap::new(),
            last_used: None,
        }
    }

    pub fn routine(&self) -> &S {
        &self.routine
    }

    /// Validates `digits` and returns the solved grid, from the cache when
    /// the same digits were solved before.
    pub fn solve(&mut self, digits: &[u8]) -> Result<Vec<u8>, SolveError> {
        if digits.len() != CELL_COUNT {
            return Err(SolveError::InvalidLength {
                found: digits.len(),
            });
        }
        if let Some(index) = digits.iter().position(|&d| d > MAX_DIGIT) {
            return Err(SolveError::DigitOutOfRange {
                index,
                digit: digits[index],
            });
        }
        let givens = digits.iter().filter(|&&d| d > 0).count();
        if givens < MIN_GIVENS {
            return Err(SolveError::TooFewGivens {
                found: givens,
                minimum: MIN_GIVENS,
            });
        }
        let mut grid = Grid::from_digits(digits).ok_or(SolveError::InvalidLength {
            found: digits.len(),
        })?;
        if !self.routine.is_solvable(&grid) {
            return Err(SolveError::Inconsistent);
        }

        if let Some(solution) = self.solved.get(digits) {
            debug!("CachedPuzzleSolver: cache hit ({} entries)", self.solved.len());
            let solution = solution.clone();
            self.last_used = Some(digits.to_vec());
            return Ok(solution);
        }

        if !self.routine.solve(&mut grid) {
            debug!("CachedPuzzleSolver: no solution for {} givens", givens);
            return Err(SolveError::Unsolvable);
        }
        let solution = grid.to_digits();
        debug!(
            "CachedPuzzleSolver: solved and cached ({} entries)",
            self.solved.len() + 1
        );
        self.solved.insert(digits.to_vec(), solution.clone());
        self.last_used = Some(digits.to_vec());
        Ok(solution)
    }

    /// Solution most recently returned by [`solve`](Self::solve).
    pub fn last_used_solution(&self) -> Option<&[u8]> {
        self.last_used
            .as_ref()
            .and_then(|key| self.solved.get(key))
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.solved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solved.is_empty()
    }
}
