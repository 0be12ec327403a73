//! Perpendicular pairing of line quads and corner resolution.
use crate::angle::circular_difference;
use crate::types::{LineQuad, Point, PuzzleLines};
use std::f32::consts::FRAC_PI_2;

/// First pair of quads whose representative angles are ~π/2 apart.
///
/// Pairs are visited as `(i, j)` with `i < j`, both ascending. Only one
/// puzzle per frame is supported, so the first match is returned. The quad
/// whose first line has the larger `cos θ` becomes `horizontal`.
pub fn find_perpendicular_pair(quads: &[LineQuad], tolerance: f32) -> Option<PuzzleLines> {
    for (i, first) in quads.iter().enumerate() {
        let theta0 = first[0].theta;
        for second in &quads[i + 1..] {
            let theta1 = second[0].theta;
            if (FRAC_PI_2 - circular_difference(theta0, theta1)).abs() >= tolerance {
                continue;
            }
            let (horizontal, vertical) = if theta0.cos() > theta1.cos() {
                (*first, *second)
            } else {
                (*second, *first)
            };
            return Some(PuzzleLines {
                horizontal,
                vertical,
            });
        }
    }
    None
}

/// Intersects the outer lines of both quads.
///
/// Returns `[H0∩V0, H0∩V3, H3∩V0, H3∩V3]`, or `None` if any pair of lines
/// fails to intersect.
pub fn resolve_corners(lines: &PuzzleLines) -> Option<[Point; 4]> {
    let h = &lines.horizontal;
    let v = &lines.vertical;
    Some([
        h[0].intersect(&v[0])?,
        h[0].intersect(&v[3])?,
        h[3].intersect(&v[0])?,
        h[3].intersect(&v[3])?,
    ])
}
