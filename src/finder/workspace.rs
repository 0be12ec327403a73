//! Scratch buffers reused across frames.
//!
//! Each stage writes into one of these containers; they are cleared at the
//! start of every run and only their capacity survives between frames.
use crate::types::{Line, LineQuad};

#[derive(Debug, Default)]
pub struct FinderWorkspace {
    pub(crate) lines: Vec<Line>,
    pub(crate) clusters: Vec<Vec<Line>>,
    pub(crate) quads: Vec<LineQuad>,
}

impl FinderWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every buffer while keeping the allocations.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.clusters.clear();
        self.quads.clear();
    }

    /// Lines extracted on the last run.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Angle clusters built on the last run, sorted by |ρ| where the spacing
    /// search visited them.
    pub fn clusters(&self) -> &[Vec<Line>] {
        &self.clusters
    }

    /// Evenly spaced quads found on the last run.
    pub fn quads(&self) -> &[LineQuad] {
        &self.quads
    }
}
