//! I/O helpers for accumulator images and JSON.
//!
//! - `load_accumulator_image`: read a PNG holding a packed accumulator (RGB8,
//!   count in the red/green bytes) into an owned buffer.
//! - `save_accumulator_preview`: write the counts as an 8-bit grayscale PNG,
//!   scaled so the strongest cell is white.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{AccumulatorView, OwnedAccumulator};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an RGB8 image from disk and reinterpret it as a packed accumulator.
pub fn load_accumulator_image(path: &Path) -> Result<OwnedAccumulator, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    OwnedAccumulator::from_raw(width, height, img.into_raw())
        .ok_or_else(|| format!("Unexpected buffer size for {}", path.display()))
}

/// Save the accumulator counts to a grayscale PNG normalized by the maximum.
pub fn save_accumulator_preview<A: AccumulatorView>(acc: &A, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let max = acc.max_count().max(1) as f32;
    let mut out = GrayImage::new(acc.width() as u32, acc.height() as u32);
    for y in 0..acc.height() {
        for x in 0..acc.width() {
            let v = (acc.count(x, y) as f32 / max * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
