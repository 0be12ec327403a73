use crate::diagnostics::TimingBreakdown;
use crate::types::{LineQuad, PuzzleCorners};
use serde::Serialize;
use std::fmt;

/// Result produced by [`PuzzleFinder::find_with_diagnostics`](crate::PuzzleFinder).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinderReport {
    pub corners: Option<PuzzleCorners>,
    pub trace: FinderTrace,
}

impl FinderReport {
    pub fn found(&self) -> bool {
        self.corners.is_some()
    }
}

/// Stage at which a run stopped without a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FindFailure {
    NoLines,
    NoEvenlySpacedFamily,
    NoPerpendicularPair,
    DegenerateIntersection,
}

impl fmt::Display for FindFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindFailure::NoLines => write!(f, "no peaks above the noise floor"),
            FindFailure::NoEvenlySpacedFamily => {
                write!(f, "no angle cluster holds four evenly spaced lines")
            }
            FindFailure::NoPerpendicularPair => {
                write!(f, "no two line families are perpendicular")
            }
            FindFailure::DegenerateIntersection => {
                write!(f, "outer lines do not intersect")
            }
        }
    }
}

/// End-to-end trace of one finder run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinderTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub lines_found: usize,
    pub cluster_sizes: Vec<usize>,
    pub candidate_quads: Vec<LineQuad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FindFailure>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub accumulator_width: usize,
    pub accumulator_height: usize,
    pub target_width: u32,
    pub target_height: u32,
}
