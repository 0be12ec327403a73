//! Depth-first solver over candidate bitmasks.
//!
//! Each row, column and block keeps a mask of used digits (bit `d` for digit
//! `d`). The search always branches on the empty cell with the fewest
//! candidates.
use super::grid::{block_of, Grid, CELL_COUNT, EMPTY, GRID_WIDTH};
use super::SolveRoutine;
use log::trace;

const ALL_DIGITS: u16 = 0b11_1111_1110;

#[derive(Clone, Copy, Debug, Default)]
pub struct BacktrackingSolver;

impl SolveRoutine for BacktrackingSolver {
    fn solve(&mut self, grid: &mut Grid) -> bool {
        let Some(mut search) = Search::from_grid(grid) else {
            return false;
        };
        if !search.run() {
            return false;
        }
        trace!("backtracking solved grid in {} nodes", search.nodes);
        for (i, &d) in search.cells.iter().enumerate() {
            grid.set(i % GRID_WIDTH, i / GRID_WIDTH, d);
        }
        true
    }
}

struct Search {
    cells: [u8; CELL_COUNT],
    rows: [u16; 9],
    cols: [u16; 9],
    blocks: [u16; 9],
    nodes: usize,
}

impl Search {
    fn from_grid(grid: &Grid) -> Option<Self> {
        let mut search = Search {
            cells: [EMPTY; CELL_COUNT],
            rows: [0; 9],
            cols: [0; 9],
            blocks: [0; 9],
            nodes: 0,
        };
        for i in 0..CELL_COUNT {
            let (x, y) = (i % GRID_WIDTH, i / GRID_WIDTH);
            let d = grid.get(x, y);
            if d == EMPTY {
                continue;
            }
            if search.candidates(x, y) & (1 << d) == 0 {
                return None;
            }
            search.place(i, d);
        }
        Some(search)
    }

    #[inline]
    fn candidates(&self, x: usize, y: usize) -> u16 {
        !(self.rows[y] | self.cols[x] | self.blocks[block_of(x, y)]) & ALL_DIGITS
    }

    fn place(&mut self, i: usize, d: u8) {
        let (x, y) = (i % GRID_WIDTH, i / GRID_WIDTH);
        let bit = 1u16 << d;
        self.cells[i] = d;
        self.rows[y] |= bit;
        self.cols[x] |= bit;
        self.blocks[block_of(x, y)] |= bit;
    }

    fn remove(&mut self, i: usize, d: u8) {
        let (x, y) = (i % GRID_WIDTH, i / GRID_WIDTH);
        let bit = !(1u16 << d);
        self.cells[i] = EMPTY;
        self.rows[y] &= bit;
        self.cols[x] &= bit;
        self.blocks[block_of(x, y)] &= bit;
    }

    /// Empty cell with the fewest candidates, `None` when the grid is full.
    fn most_constrained(&self) -> Option<(usize, u16)> {
        let mut best: Option<(usize, u16)> = None;
        for i in 0..CELL_COUNT {
            if self.cells[i] != EMPTY {
                continue;
            }
            let mask = self.candidates(i % GRID_WIDTH, i / GRID_WIDTH);
            let count = mask.count_ones();
            if best.map_or(true, |(_, m)| count < m.count_ones()) {
                best = Some((i, mask));
                if count <= 1 {
                    break;
                }
            }
        }
        best
    }

    fn run(&mut self) -> bool {
        self.nodes += 1;
        let Some((i, mask)) = self.most_constrained() else {
            return true;
        };
        for d in 1..=9u8 {
            if mask & (1 << d) == 0 {
                continue;
            }
            self.place(i, d);
            if self.run() {
                return true;
            }
            self.remove(i, d);
        }
        false
    }
}
