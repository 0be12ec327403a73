use puzzle_finder::solver::Grid;
use puzzle_finder::CachedPuzzleSolver;
use std::env;
use std::fs;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let grid_path = env::args().nth(1).ok_or_else(usage)?;
    let text = fs::read_to_string(&grid_path)
        .map_err(|e| format!("Failed to read {grid_path}: {e}"))?;
    let puzzle = Grid::from_text(&text);
    println!("Puzzle ({} givens):\n{puzzle}", puzzle.givens());

    let mut solver = CachedPuzzleSolver::default();
    let solution = solver
        .solve(&puzzle.to_digits())
        .map_err(|e| format!("Cannot solve {grid_path}: {e}"))?;
    let solved = Grid::from_digits(&solution).ok_or("Solver returned a malformed grid")?;
    println!("Solution:\n{solved}");

    Ok(())
}

fn usage() -> String {
    "Usage: solve_puzzle <grid.txt>".to_string()
}
