//! Angle utilities used across the finder pipeline.
//!
//! Lines coming out of the accumulator carry a normal angle on the full
//! circle `[0, 2π)`; `(θ, ρ)` and `(θ + π, −ρ)` describe the same line, so
//! the helpers here never fold antipodal angles together on their own.

use std::f32::consts::{PI, TAU};

/// Normalizes an angle into the range [0, 2π).
#[inline]
pub fn normalize_two_pi(angle: f32) -> f32 {
    let norm = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly 2π for tiny negative inputs.
    if norm >= TAU {
        0.0
    } else {
        norm
    }
}

/// Rotates an angle by π and normalizes the result into [0, 2π).
#[inline]
pub fn opposite(angle: f32) -> f32 {
    normalize_two_pi(angle + PI)
}

/// Shortest unsigned distance between two angles on the circle, in [0, π].
#[inline]
pub fn circular_difference(a: f32, b: f32) -> f32 {
    let diff = (a - b).rem_euclid(TAU);
    diff.min(TAU - diff).max(0.0)
}

/// Circular mean of a set of angles, normalized into [0, 2π).
///
/// Returns `None` for an empty input. When the unit vectors cancel out the
/// direction is undefined and `atan2(0, 0) = 0` is reported.
pub fn circular_mean<I>(angles: I) -> Option<f32>
where
    I: IntoIterator<Item = f32>,
{
    let mut sx = 0.0f32;
    let mut sy = 0.0f32;
    let mut n = 0usize;
    for a in angles {
        sx += a.cos();
        sy += a.sin();
        n += 1;
    }
    if n == 0 {
        return None;
    }
    Some(normalize_two_pi(sy.atan2(sx)))
}
