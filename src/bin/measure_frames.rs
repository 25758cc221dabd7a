use log::warn;
use serde::Serialize;
use std::env;
use std::path::Path;
use tube_measure::config::load_config;
use tube_measure::diagnostics::FrameReport;
use tube_measure::io::{load_frames, write_json_file};
use tube_measure::MeasurementPipeline;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let params = config.pipeline_params().map_err(|e| e.to_string())?;
    let mut pipeline = MeasurementPipeline::new(params).map_err(|e| e.to_string())?;
    if let Some(transform) = config.transform().map_err(|e| e.to_string())? {
        pipeline
            .set_transform(Some(*transform.matrix()))
            .map_err(|e| e.to_string())?;
    }

    let frames = load_frames(&config.input).map_err(|e| e.to_string())?;
    if frames.is_empty() {
        warn!("{} contains no frames", config.input.display());
    }
    let mut reports: Vec<FrameReport> = Vec::with_capacity(frames.len());
    for raw in &frames {
        reports.push(pipeline.process_with_diagnostics(config.frame, raw));
    }
    if config.output.last_frame_only && reports.len() > 1 {
        reports.drain(..reports.len() - 1);
    }

    let summary = MeasureFramesReport {
        frame_count: frames.len(),
        aligned: pipeline.is_aligned(),
        frames: reports,
    };
    write_json_file(&config.output.report_json, &summary).map_err(|e| e.to_string())?;

    if let Some(last) = summary.frames.last() {
        let m = &last.measurements;
        println!(
            "Frame {}: {} tracked lines, {} centerlines, {} intersections, {} segments",
            last.frame_index,
            m.tracked_lines.len(),
            m.centerlines.len(),
            m.intersections.len(),
            m.segments.len()
        );
        let unit = if m.aligned { "world units" } else { "px" };
        for s in &m.lengths {
            println!("  segment length {:.3} {unit}", s.length);
        }
        for a in &m.angles {
            println!("  angle {:.2} deg", a.angle_deg());
        }
    }
    println!(
        "Saved reports for {} frames to {}",
        summary.frame_count,
        config.output.report_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: measure_frames <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MeasureFramesReport {
    frame_count: usize,
    aligned: bool,
    frames: Vec<FrameReport>,
}
