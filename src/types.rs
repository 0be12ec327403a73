use crate::angle::opposite;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

/// Line in Hesse normal form: `x·cos θ + y·sin θ = ρ`, in target-image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub theta: f32,
    pub rho: f32,
}

impl Line {
    pub fn new(theta: f32, rho: f32) -> Self {
        Self { theta, rho }
    }

    /// Builds a line with `ρ ≥ 0`, flipping θ by π when the raw offset is negative.
    pub fn canonical(theta: f32, rho: f32) -> Self {
        if rho < 0.0 {
            Self {
                theta: opposite(theta),
                rho: -rho,
            }
        } else {
            Self { theta, rho }
        }
    }

    /// The same geometric line expressed as `(θ + π, −ρ)`.
    #[inline]
    pub fn alternate(&self) -> Self {
        Self {
            theta: opposite(self.theta),
            rho: -self.rho,
        }
    }

    /// Intersection point of two lines, `None` when they are (nearly) parallel.
    pub fn intersect(&self, other: &Line) -> Option<Point> {
        let a = Matrix2::new(
            self.theta.cos(),
            self.theta.sin(),
            other.theta.cos(),
            other.theta.sin(),
        );
        let inv = a.try_inverse()?;
        let p = inv * Vector2::new(self.rho, other.rho);
        (p.x.is_finite() && p.y.is_finite()).then_some(Point { x: p.x, y: p.y })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Four evenly spaced lines of one family sorted by ascending |ρ|.
pub type LineQuad = [Line; 4];

/// Two perpendicular line quads; `horizontal` has the larger `cos θ`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleLines {
    pub horizontal: LineQuad,
    pub vertical: LineQuad,
}

/// Outer corners of a located puzzle.
///
/// `points` are ordered `[H0∩V0, H0∩V3, H3∩V0, H3∩V3]` where `H`/`V` are the
/// horizontal and vertical quads of `lines`. Rectification relies on this order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleCorners {
    pub points: [Point; 4],
    pub lines: PuzzleLines,
}
