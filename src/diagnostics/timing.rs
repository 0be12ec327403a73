use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Finder stages in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FinderStage {
    Peaks,
    Clustering,
    Spacing,
    Pairing,
}

impl FinderStage {
    pub const ALL: [FinderStage; 4] = [
        FinderStage::Peaks,
        FinderStage::Clustering,
        FinderStage::Spacing,
        FinderStage::Pairing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FinderStage::Peaks => "peaks",
            FinderStage::Clustering => "clustering",
            FinderStage::Spacing => "spacing",
            FinderStage::Pairing => "pairing",
        }
    }
}

impl fmt::Display for FinderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: FinderStage,
    pub elapsed_ms: f64,
}

/// Per-stage wall-clock times of one finder run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Runs `f` and records its elapsed time under `stage`.
    pub fn measure<T>(&mut self, stage: FinderStage, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.stages.push(StageTiming {
            stage,
            elapsed_ms: elapsed_ms(start),
        });
        out
    }

    /// Elapsed time recorded for `stage`, if it ran.
    pub fn stage_ms(&self, stage: FinderStage) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.elapsed_ms)
    }

    /// Sum of the recorded stage times.
    pub fn stages_ms(&self) -> f64 {
        self.stages.iter().map(|s| s.elapsed_ms).sum()
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_records_stage_and_returns_value() {
        let mut timings = TimingBreakdown::default();
        let n = timings.measure(FinderStage::Spacing, || 21 * 2);
        assert_eq!(n, 42);
        assert_eq!(timings.stages.len(), 1);
        assert!(timings.stage_ms(FinderStage::Spacing).is_some_and(|ms| ms >= 0.0));
        assert!(timings.stage_ms(FinderStage::Pairing).is_none());
    }

    #[test]
    fn stages_serialize_as_lowercase_labels() {
        let mut timings = TimingBreakdown::default();
        for stage in FinderStage::ALL {
            timings.measure(stage, || ());
        }
        let json = serde_json::to_value(&timings).expect("serialize");
        let names: Vec<&str> = json["stages"]
            .as_array()
            .expect("stages")
            .iter()
            .filter_map(|s| s["stage"].as_str())
            .collect();
        assert_eq!(names, ["peaks", "clustering", "spacing", "pairing"]);
        assert!(timings.stages_ms() >= 0.0);
    }
}
