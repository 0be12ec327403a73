//! Parameter types configuring the finder stages.
//!
//! Defaults reproduce the tolerances the detector was tuned with on
//! phone-camera frames. They are exposed for experiments; the pipeline does
//! not adapt them to the input size.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Finder-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderParams {
    /// Angular tolerance (radians) for cluster membership and for the
    /// perpendicularity test between two families.
    pub angle_tolerance_rad: f32,
    /// Maximum deviation of each gap from the mean gap in an evenly spaced
    /// quad, in target-image pixels.
    pub spacing_tolerance: f32,
    /// Peak floor as a fraction `num / den` of the strongest cell.
    pub peak_floor_ratio: (u32, u32),
    /// Divisor applied to the longer accumulator side to derive the
    /// neighbourhood radius (which is then clamped to at most 1).
    pub radius_divisor: f32,
    /// Clusters with fewer members are skipped by the spacing search.
    pub min_cluster_size: usize,
    /// Clusters with more members are skipped to bound the combinatorics.
    pub max_cluster_size: usize,
}

impl Default for FinderParams {
    fn default() -> Self {
        Self {
            angle_tolerance_rad: PI / 12.0,
            spacing_tolerance: 15.0,
            peak_floor_ratio: (3, 4),
            radius_divisor: 96.0,
            min_cluster_size: 4,
            max_cluster_size: 32,
        }
    }
}
