use crate::finder::FinderParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct FinderDemoConfig {
    /// PNG holding the packed accumulator (RGB8).
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Resolution of the photo the accumulator was computed from.
    pub target: TargetConfig,
    #[serde(default)]
    pub finder: FinderParams,
    pub output: FinderOutputConfig,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct TargetConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct FinderOutputConfig {
    #[serde(rename = "result_json")]
    pub result_json: PathBuf,
    /// Optional grayscale rendering of the accumulator counts.
    #[serde(default)]
    pub accumulator_preview: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<FinderDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<FinderDemoConfig, serde_json::Error> {
    serde_json::from_str(data)
}
