//! Structured per-frame report returned by
//! [`MeasurementPipeline::process_with_diagnostics`](crate::MeasurementPipeline::process_with_diagnostics).
//!
//! Everything here is `Serialize` so the demo tooling can dump frames to JSON
//! for offline inspection.

mod timing;

pub use timing::{StageTiming, TimingBreakdown};

pub(crate) use timing::elapsed_ms;

use crate::detector::FrameMeasurements;
use serde::{Deserialize, Serialize};

/// How many elements survived each stage of one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCounts {
    pub raw_segments: usize,
    pub kept_segments: usize,
    pub buffered_frames: usize,
    pub tracked_lines: usize,
    pub centerlines: usize,
    pub intersections: usize,
    pub segments: usize,
}

/// Full result of one frame: measurements, stage counts and timings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub frame_index: u64,
    pub measurements: FrameMeasurements,
    pub counts: StageCounts,
    pub timing: TimingBreakdown,
}
