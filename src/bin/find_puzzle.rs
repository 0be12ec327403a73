use puzzle_finder::config::finder_demo;
use puzzle_finder::image::io::{load_accumulator_image, save_accumulator_preview, write_json_file};
use puzzle_finder::PuzzleFinder;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = finder_demo::load_config(Path::new(&config_path))?;

    let acc = load_accumulator_image(&config.input)?;
    if let Some(preview) = &config.output.accumulator_preview {
        save_accumulator_preview(&acc, preview)?;
        println!("Saved accumulator preview to {}", preview.display());
    }

    let mut finder = PuzzleFinder::new(config.finder);
    let report = finder.find_with_diagnostics(config.target.width, config.target.height, &acc);
    write_json_file(&config.output.result_json, &report)?;

    match (&report.corners, report.trace.failure) {
        (Some(corners), _) => {
            for (i, p) in corners.points.iter().enumerate() {
                println!("corner[{i}] = ({:.1}, {:.1})", p.x, p.y);
            }
        }
        (None, Some(reason)) => println!("No puzzle found: {reason}"),
        (None, None) => println!("No puzzle found"),
    }
    println!(
        "lines={} clusters={} quads={} total_ms={:.3}",
        report.trace.lines_found,
        report.trace.cluster_sizes.len(),
        report.trace.candidate_quads.len(),
        report.trace.timings.total_ms
    );
    println!("Saved report to {}", config.output.result_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: find_puzzle <config.json>".to_string()
}
