//! Peak extraction on the Hough accumulator.
//!
//! A cell is a peak when it clears a floor derived from the strongest cell
//! and no neighbour inside a square window reaches its count. Each peak is
//! converted to a [`Line`] in target-image coordinates: the accumulator's x
//! axis spans θ ∈ [0, π) and its y axis spans ρ ∈ [−diag, diag) around the
//! centre row, where `diag` is the target image diagonal.
//!
//! The window radius is `min(1, round(max(w, h) / divisor))`, so every
//! accumulator longer than ~48 px uses a 3×3 window. Equal-valued neighbours
//! suppress each other and no de-duplication of adjacent peaks is attempted.
use super::params::FinderParams;
use crate::image::AccumulatorView;
use crate::types::Line;
use log::{debug, trace};
use std::f32::consts::PI;

/// Neighbourhood radius used for the local-maximum test.
pub fn peak_radius(width: usize, height: usize, divisor: f32) -> usize {
    let longest = width.max(height) as f32;
    let raw = (longest / divisor).round();
    if raw.is_finite() && raw > 0.0 {
        (raw as usize).min(1)
    } else {
        0
    }
}

/// Minimum count a cell needs to be considered, or `None` if the
/// accumulator is too weak to hold any line.
pub fn peak_floor(max_count: u16, ratio: (u32, u32)) -> Option<u16> {
    let (num, den) = ratio;
    let floor = max_count as u32 * num / den.max(1);
    (floor > 0).then(|| floor.min(u16::MAX as u32) as u16)
}

/// Returns `true` if no neighbour within `radius` has a count ≥ `value`.
fn is_local_maximum<A: AccumulatorView>(acc: &A, x: usize, y: usize, radius: isize) -> bool {
    let value = acc.count(x, y);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx == 0 && dy == 0 {
                continue;
            }
            if acc.count_at(x as isize + dx, y as isize + dy) >= value {
                return false;
            }
        }
    }
    true
}

/// Converts accumulator cell `(x, y)` into a canonical line (`ρ ≥ 0`).
pub fn cell_to_line(
    x: usize,
    y: usize,
    acc_width: usize,
    acc_height: usize,
    target_width: u32,
    target_height: u32,
) -> Line {
    let theta = x as f32 / acc_width as f32 * PI;
    let half_height = acc_height as f32 / 2.0;
    let diag = (target_width as f32).hypot(target_height as f32);
    let rho = (y as f32 - half_height) * diag / half_height;
    Line::canonical(theta, rho)
}

/// Scans the accumulator for peaks and writes their lines into `lines`.
///
/// `lines` is cleared first. An empty result is a normal outcome.
pub fn find_lines<A: AccumulatorView>(
    target_width: u32,
    target_height: u32,
    acc: &A,
    params: &FinderParams,
    lines: &mut Vec<Line>,
) {
    lines.clear();
    if acc.is_empty() {
        return;
    }
    let (w, h) = (acc.width(), acc.height());
    let radius = peak_radius(w, h, params.radius_divisor) as isize;

    let max_count = acc.max_count();
    let Some(floor) = peak_floor(max_count, params.peak_floor_ratio) else {
        debug!("PuzzleFinder: accumulator {}x{} too weak (max={})", w, h, max_count);
        return;
    };

    for y in 0..h {
        for x in 0..w {
            if acc.count(x, y) < floor {
                continue;
            }
            if !is_local_maximum(acc, x, y, radius) {
                continue;
            }
            let line = cell_to_line(x, y, w, h, target_width, target_height);
            trace!(
                "peak at ({}, {}) count={} -> theta={:.4} rho={:.2}",
                x,
                y,
                acc.count(x, y),
                line.theta,
                line.rho
            );
            lines.push(line);
        }
    }
    debug!(
        "PuzzleFinder: {} peaks on {}x{} accumulator (radius={} floor={} max={})",
        lines.len(),
        w,
        h,
        radius,
        floor,
        max_count
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::OwnedAccumulator;
    use std::f32::consts::TAU;

    fn run(acc: &OwnedAccumulator, tw: u32, th: u32) -> Vec<Line> {
        let mut lines = Vec::new();
        find_lines(tw, th, acc, &FinderParams::default(), &mut lines);
        lines
    }

    #[test]
    fn radius_is_clamped_to_one() {
        assert_eq!(peak_radius(640, 480, 96.0), 1);
        assert_eq!(peak_radius(180, 2000, 96.0), 1);
        assert_eq!(peak_radius(48, 20, 96.0), 1);
        assert_eq!(peak_radius(47, 20, 96.0), 0);
        assert_eq!(peak_radius(0, 0, 96.0), 0);
    }

    #[test]
    fn floor_uses_integer_three_quarters() {
        assert_eq!(peak_floor(100, (3, 4)), Some(75));
        assert_eq!(peak_floor(u16::MAX, (3, 4)), Some(49151));
        assert_eq!(peak_floor(1, (3, 4)), None);
        assert_eq!(peak_floor(0, (3, 4)), None);
    }

    #[test]
    fn zero_and_uniform_accumulators_have_no_lines() {
        assert!(run(&OwnedAccumulator::new(120, 100), 640, 480).is_empty());
        assert!(run(&OwnedAccumulator::filled(120, 100, 40), 640, 480).is_empty());
    }

    #[test]
    fn isolated_peak_maps_to_line() {
        let mut acc = OwnedAccumulator::new(180, 200);
        acc.set_count(45, 150, 90);
        let lines = run(&acc, 300, 400); // diag = 500
        assert_eq!(lines.len(), 1);
        let line = lines[0];
        assert!((line.theta - PI / 4.0).abs() < 1e-5, "theta={}", line.theta);
        assert!((line.rho - 250.0).abs() < 1e-3, "rho={}", line.rho);
    }

    #[test]
    fn negative_offsets_are_canonicalized() {
        let mut acc = OwnedAccumulator::new(180, 200);
        acc.set_count(45, 50, 90);
        acc.set_count(170, 10, 80);
        acc.set_count(0, 0, 85);
        let lines = run(&acc, 300, 400);
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert!(line.rho >= 0.0, "rho={}", line.rho);
            assert!((0.0..TAU).contains(&line.theta), "theta={}", line.theta);
        }
        let flipped = lines
            .iter()
            .find(|l| (l.theta - 5.0 * PI / 4.0).abs() < 1e-5)
            .expect("flipped line");
        assert!((flipped.rho - 250.0).abs() < 1e-3);
    }

    #[test]
    fn weaker_cells_below_floor_are_ignored() {
        let mut acc = OwnedAccumulator::new(100, 100);
        acc.set_count(10, 10, 100);
        acc.set_count(50, 50, 74);
        acc.set_count(80, 80, 75);
        assert_eq!(run(&acc, 100, 100).len(), 2);
    }

    #[test]
    fn equal_neighbours_suppress_each_other() {
        let mut acc = OwnedAccumulator::new(100, 100);
        acc.set_count(20, 20, 50);
        acc.set_count(21, 20, 50);
        acc.set_count(70, 70, 50);
        let lines = run(&acc, 100, 100);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn tiny_accumulator_uses_zero_radius() {
        // Radius 0: every cell above the floor is a peak, even adjacent ones.
        let mut acc = OwnedAccumulator::new(20, 20);
        acc.set_count(5, 5, 50);
        acc.set_count(6, 5, 50);
        assert_eq!(run(&acc, 100, 100).len(), 2);
    }

    #[test]
    fn output_buffer_is_cleared() {
        let acc = OwnedAccumulator::new(100, 100);
        let mut lines = vec![Line::new(1.0, 1.0)];
        find_lines(10, 10, &acc, &FinderParams::default(), &mut lines);
        assert!(lines.is_empty());
    }
}
