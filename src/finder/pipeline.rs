//! Finder pipeline driving puzzle localisation end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use puzzle_finder::image::AccumulatorImage;
//! use puzzle_finder::{FinderParams, PuzzleFinder};
//!
//! # fn example(acc: AccumulatorImage) {
//! let mut finder = PuzzleFinder::new(FinderParams::default());
//! if let Some(corners) = finder.find(1280, 720, &acc) {
//!     println!("corners: {:?}", corners.points);
//! }
//! # }
//! ```
use super::clustering::cluster_lines_by_theta;
use super::pairing::{find_perpendicular_pair, resolve_corners};
use super::params::FinderParams;
use super::peaks::find_lines;
use super::spacing::find_evenly_spaced;
use super::workspace::FinderWorkspace;
use crate::diagnostics::{
    FindFailure, FinderReport, FinderStage, FinderTrace, InputDescriptor, TimingBreakdown,
};
use crate::image::AccumulatorView;
use crate::types::PuzzleCorners;
use log::debug;
use std::time::Instant;

/// Locates one puzzle grid per accumulator.
///
/// The finder owns its scratch buffers, so a single instance serves one
/// caller at a time; give each thread its own finder.
#[derive(Debug, Default)]
pub struct PuzzleFinder {
    params: FinderParams,
    workspace: FinderWorkspace,
}

impl PuzzleFinder {
    pub fn new(params: FinderParams) -> Self {
        Self {
            params,
            workspace: FinderWorkspace::new(),
        }
    }

    pub fn params(&self) -> &FinderParams {
        &self.params
    }

    pub fn set_params(&mut self, params: FinderParams) {
        self.params = params;
    }

    /// Scratch state left by the last run, for inspection.
    pub fn workspace(&self) -> &FinderWorkspace {
        &self.workspace
    }

    /// Returns the four outer corners of the puzzle, or `None` if the frame
    /// holds no recognisable grid.
    pub fn find<A: AccumulatorView>(
        &mut self,
        target_width: u32,
        target_height: u32,
        acc: &A,
    ) -> Option<PuzzleCorners> {
        self.find_with_diagnostics(target_width, target_height, acc)
            .corners
    }

    /// Runs the finder and returns the result together with a stage trace.
    pub fn find_with_diagnostics<A: AccumulatorView>(
        &mut self,
        target_width: u32,
        target_height: u32,
        acc: &A,
    ) -> FinderReport {
        debug!(
            "PuzzleFinder::find start acc={}x{} target={}x{}",
            acc.width(),
            acc.height(),
            target_width,
            target_height
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        self.workspace.reset();
        let ws = &mut self.workspace;
        let params = &self.params;

        timings.measure(FinderStage::Peaks, || {
            find_lines(target_width, target_height, acc, params, &mut ws.lines)
        });
        timings.measure(FinderStage::Clustering, || {
            cluster_lines_by_theta(&ws.lines, params.angle_tolerance_rad, &mut ws.clusters)
        });
        timings.measure(FinderStage::Spacing, || {
            find_evenly_spaced(&mut ws.clusters, params, &mut ws.quads)
        });
        let (pair, corners) = timings.measure(FinderStage::Pairing, || {
            let pair = find_perpendicular_pair(&ws.quads, params.angle_tolerance_rad);
            let corners = pair.and_then(|lines| {
                resolve_corners(&lines).map(|points| PuzzleCorners { points, lines })
            });
            (pair, corners)
        });

        let failure = if ws.lines.is_empty() {
            Some(FindFailure::NoLines)
        } else if ws.quads.is_empty() {
            Some(FindFailure::NoEvenlySpacedFamily)
        } else if pair.is_none() {
            Some(FindFailure::NoPerpendicularPair)
        } else if corners.is_none() {
            Some(FindFailure::DegenerateIntersection)
        } else {
            None
        };

        timings.total_ms = elapsed_ms(total_start);
        match failure {
            Some(reason) => debug!(
                "PuzzleFinder::find no puzzle: {} (lines={} clusters={} quads={})",
                reason,
                ws.lines.len(),
                ws.clusters.len(),
                ws.quads.len()
            ),
            None => debug!(
                "PuzzleFinder::find found puzzle lines={} clusters={} quads={} elapsed_ms={:.3}",
                ws.lines.len(),
                ws.clusters.len(),
                ws.quads.len(),
                timings.total_ms
            ),
        }

        FinderReport {
            corners,
            trace: FinderTrace {
                input: InputDescriptor {
                    accumulator_width: acc.width(),
                    accumulator_height: acc.height(),
                    target_width,
                    target_height,
                },
                timings,
                lines_found: ws.lines.len(),
                cluster_sizes: ws.clusters.iter().map(Vec::len).collect(),
                candidate_quads: ws.quads.clone(),
                failure,
            },
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
