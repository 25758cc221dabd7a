#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod homography;
pub mod io;
pub mod line;

// Stage modules – public so tools can run a single stage in isolation.
pub mod angle;
pub mod centerline;
pub mod intersection;
pub mod measure;
pub mod tracker;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + results.
pub use crate::detector::{FrameMeasurements, MeasurementPipeline, PipelineParams};
pub use crate::error::{Error, Result};
pub use crate::line::{Axis, Line, Point};

// Stage building blocks.
pub use crate::centerline::{find_centerlines, Centerline, CenterlineParams, PairingStrategy};
pub use crate::intersection::{intersect, Intersection, IntersectionGraph};
pub use crate::measure::{AngleMeasurement, SegmentMeasurement};
pub use crate::tracker::{FrameSize, LineTracker, TrackerParams};

// Per-frame diagnostics returned by the pipeline.
pub use crate::diagnostics::{FrameReport, StageCounts};

pub use crate::homography::{apply_homography_points, WorldTransform};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use tube_measure::prelude::*;
///
/// # fn main() -> tube_measure::Result<()> {
/// let mut pipeline = MeasurementPipeline::new(PipelineParams::default())?;
/// let raw = vec![
///     Line::from_coords(100.0, 290.0, 700.0, 290.0),
///     Line::from_coords(100.0, 310.0, 700.0, 310.0),
/// ];
/// let out = pipeline.process(FrameSize::new(800.0, 600.0), &raw);
/// println!("centerlines={}", out.centerlines.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{FrameSize, Line, MeasurementPipeline, PipelineParams, Point};
}
