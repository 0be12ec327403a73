//! 9×9 digit grid produced by the digit classifier.
use std::fmt;

pub const GRID_WIDTH: usize = 9;
pub const GRID_HEIGHT: usize = 9;
pub const BLOCK_WIDTH: usize = GRID_WIDTH / 3;
pub const BLOCK_HEIGHT: usize = GRID_HEIGHT / 3;
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;
pub const MAX_DIGIT: u8 = 9;
pub const EMPTY: u8 = 0;

#[inline]
fn index(x: usize, y: usize) -> usize {
    y * GRID_WIDTH + x
}

#[inline]
pub(crate) fn block_of(x: usize, y: usize) -> usize {
    (y / BLOCK_HEIGHT) * (GRID_WIDTH / BLOCK_WIDTH) + x / BLOCK_WIDTH
}

/// Row-major puzzle grid; `0` marks an empty cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [u8; CELL_COUNT],
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cells: [EMPTY; CELL_COUNT],
        }
    }
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from 81 row-major digits; `None` on a wrong length or
    /// a digit above 9.
    pub fn from_digits(digits: &[u8]) -> Option<Self> {
        if digits.len() != CELL_COUNT || digits.iter().any(|&d| d > MAX_DIGIT) {
            return None;
        }
        let mut cells = [EMPTY; CELL_COUNT];
        cells.copy_from_slice(digits);
        Some(Self { cells })
    }

    /// Reads up to nine text rows of up to nine characters each. `1`–`9`
    /// are digits; any other character and any missing cell is empty.
    pub fn from_text(text: &str) -> Self {
        let mut grid = Self::new();
        for (y, row) in text.lines().take(GRID_HEIGHT).enumerate() {
            for (x, c) in row.chars().take(GRID_WIDTH).enumerate() {
                let digit = match c {
                    '1'..='9' => c as u8 - b'0',
                    _ => EMPTY,
                };
                grid.set(x, y, digit);
            }
        }
        grid
    }

    pub fn to_digits(&self) -> Vec<u8> {
        self.cells.to_vec()
    }

    /// Digit at `(x, y)`, `EMPTY` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return EMPTY;
        }
        self.cells[index(x, y)]
    }

    /// Writes a digit; returns `false` and leaves the grid untouched for
    /// out-of-range coordinates or digits.
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> bool {
        if x >= GRID_WIDTH || y >= GRID_HEIGHT || value > MAX_DIGIT {
            return false;
        }
        self.cells[index(x, y)] = value;
        true
    }

    /// Number of non-empty cells.
    pub fn givens(&self) -> usize {
        self.cells.iter().filter(|&&d| d != EMPTY).count()
    }

    pub fn is_complete(&self) -> bool {
        self.givens() == CELL_COUNT
    }

    /// No digit repeats within a row, column or block.
    pub fn is_consistent(&self) -> bool {
        let mut rows = [0u16; GRID_HEIGHT];
        let mut cols = [0u16; GRID_WIDTH];
        let mut blocks = [0u16; 9];
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let d = self.get(x, y);
                if d == EMPTY {
                    continue;
                }
                let bit = 1u16 << d;
                let b = block_of(x, y);
                if (rows[y] | cols[x] | blocks[b]) & bit != 0 {
                    return false;
                }
                rows[y] |= bit;
                cols[x] |= bit;
                blocks[b] |= bit;
            }
        }
        true
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = self.cells.iter().map(|d| char::from(b'0' + d)).collect();
        f.debug_tuple("Grid").field(&digits).finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divider = "-".repeat(GRID_WIDTH + GRID_WIDTH / BLOCK_WIDTH + 1);
        for y in 0..GRID_HEIGHT {
            if y % BLOCK_HEIGHT == 0 {
                writeln!(f, "{divider}")?;
            }
            for x in 0..GRID_WIDTH {
                if x % BLOCK_WIDTH == 0 {
                    write!(f, "|")?;
                }
                match self.get(x, y) {
                    EMPTY => write!(f, " ")?,
                    d => write!(f, "{d}")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{divider}")
    }
}
