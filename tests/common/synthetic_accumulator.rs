use puzzle_finder::image::{AccumulatorView, OwnedAccumulator};

/// Rows holding evenly spaced peaks; with a 200-row accumulator and a
/// 400×300 target (diagonal 500) they map to ρ = 50, 100, 150, 200.
pub const GRID_ROWS: [usize; 4] = [110, 120, 130, 140];

/// Accumulator with two perpendicular families of four evenly spaced peaks:
/// θ = 0 at column 0 and θ = π/2 at column `width / 2`.
pub fn perpendicular_families(width: usize, height: usize, count: u16) -> OwnedAccumulator {
    let mut acc = OwnedAccumulator::new(width, height);
    for &y in &GRID_ROWS {
        acc.set_count(0, y, count);
        acc.set_count(width / 2, y, count);
    }
    acc
}

/// Adds isolated weak votes that stay below the peak floor.
pub fn add_background_noise(acc: &mut OwnedAccumulator, count: u16) {
    let (w, h) = (acc.width(), acc.height());
    for y in (5..h).step_by(23) {
        for x in (7..w).step_by(31) {
            acc.set_count(x, y, count);
        }
    }
}

/// Tilted grid whose first family straddles θ = 0: column 178 (θ = 178°) on
/// rows above the centre, so the raw offsets are negative and the canonical
/// lines sit at θ = 358°. The second family is column 88 (θ = 88°) below the
/// centre. Both map to ρ = 50, 100, 150, 200 for a 200-row accumulator and a
/// target with diagonal 500.
pub fn tilted_families(count: u16) -> OwnedAccumulator {
    let mut acc = OwnedAccumulator::new(180, 200);
    for &y in &GRID_ROWS {
        acc.set_count(178, 200 - y, count);
        acc.set_count(88, y, count);
    }
    acc
}
