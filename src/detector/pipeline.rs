//! Per-frame measurement pipeline.
//!
//! [`MeasurementPipeline`] takes one frame of raw segments at a time and runs
//! tracker → centerlines → intersections → world-space measurements. Only
//! the tracker's frame history survives between calls; everything else is
//! rebuilt per frame.
//!
//! Typical usage:
//! ```no_run
//! use tube_measure::{FrameSize, Line, MeasurementPipeline, PipelineParams};
//!
//! # fn example(frames: Vec<Vec<Line>>) -> tube_measure::Result<()> {
//! let mut pipeline = MeasurementPipeline::new(PipelineParams::default())?;
//! for raw in &frames {
//!     let out = pipeline.process(FrameSize::new(1280.0, 720.0), raw);
//!     for m in &out.lengths {
//!         println!("segment length {:.2}", m.length);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use super::params::PipelineParams;
use crate::centerline::centerline_lines;
use crate::diagnostics::{elapsed_ms, FrameReport, StageCounts, TimingBreakdown};
use crate::error::Result;
use crate::homography::WorldTransform;
use crate::intersection::{intersect, Intersection};
use crate::line::Line;
use crate::measure::{measure_intersections, measure_segments, AngleMeasurement, SegmentMeasurement};
use crate::tracker::{FrameSize, LineTracker};
use log::debug;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Everything derived from one frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMeasurements {
    pub tracked_lines: Vec<Line>,
    /// Sorted by angle, largest first.
    pub centerlines: Vec<Line>,
    pub intersections: Vec<Intersection>,
    pub segments: Vec<Line>,
    pub angles: Vec<AngleMeasurement>,
    pub lengths: Vec<SegmentMeasurement>,
    /// True when an alignment transform was applied, i.e. lengths are in
    /// world units rather than pixels.
    pub aligned: bool,
}

/// Stateful pipeline; feed frames in order, one call at a time.
pub struct MeasurementPipeline {
    params: PipelineParams,
    tracker: LineTracker,
    transform: WorldTransform,
    frame_index: u64,
}

impl MeasurementPipeline {
    pub fn new(params: PipelineParams) -> Result<Self> {
        params.validate()?;
        let tracker = LineTracker::new(params.tracker.clone())?;
        Ok(Self {
            params,
            tracker,
            transform: WorldTransform::identity(),
            frame_index: 0,
        })
    }

    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    /// Replaces all parameters between frames. Tracker history is kept.
    pub fn set_params(&mut self, params: PipelineParams) -> Result<()> {
        params.validate()?;
        self.tracker.set_params(params.tracker.clone())?;
        self.params = params;
        Ok(())
    }

    /// Sets the image→world homography; `None` reverts to pixel units.
    pub fn set_transform(&mut self, hmtx: Option<Matrix3<f64>>) -> Result<()> {
        self.transform = match hmtx {
            Some(h) => WorldTransform::from_matrix(h)?,
            None => WorldTransform::identity(),
        };
        debug!(
            "MeasurementPipeline::set_transform aligned={}",
            self.is_aligned()
        );
        Ok(())
    }

    pub fn transform(&self) -> &WorldTransform {
        &self.transform
    }

    pub fn is_aligned(&self) -> bool {
        !self.transform.is_identity()
    }

    /// Number of frames held by the tracker.
    pub fn buffered_frames(&self) -> usize {
        self.tracker.history_len()
    }

    /// Drops tracker history, e.g. after the camera or scene changed.
    pub fn reset(&mut self) {
        self.tracker.clear();
        self.frame_index = 0;
    }

    /// Processes one frame and returns its measurements.
    pub fn process(&mut self, frame: FrameSize, raw: &[Line]) -> FrameMeasurements {
        self.process_with_diagnostics(frame, raw).measurements
    }

    /// Processes one frame and returns measurements with counts and timings.
    pub fn process_with_diagnostics(&mut self, frame: FrameSize, raw: &[Line]) -> FrameReport {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let (tracked_lines, kept_segments) =
            timing.time("track", || self.tracker.process_frame_counted(frame, raw));

        let centerline_params = &self.params.centerline;
        let mut centerlines = timing.time("centerlines", || {
            centerline_lines(&tracked_lines, centerline_params)
        });
        centerlines.sort_by(|a, b| b.angle().total_cmp(&a.angle()));

        let graph = timing.time("intersect", || intersect(&centerlines));

        let transform = &self.transform;
        let (angles, lengths) = timing.time("measure", || {
            (
                measure_intersections(&graph.intersections, transform),
                measure_segments(&graph.segments, transform),
            )
        });

        let counts = StageCounts {
            raw_segments: raw.len(),
            kept_segments,
            buffered_frames: self.tracker.history_len(),
            tracked_lines: tracked_lines.len(),
            centerlines: centerlines.len(),
            intersections: graph.intersections.len(),
            segments: graph.segments.len(),
        };
        timing.total_ms = elapsed_ms(total_start);

        debug!(
            "MeasurementPipeline::process frame={} tracked={} centerlines={} intersections={} segments={} total_ms={:.3}",
            self.frame_index,
            counts.tracked_lines,
            counts.centerlines,
            counts.intersections,
            counts.segments,
            timing.total_ms
        );

        let report = FrameReport {
            frame_index: self.frame_index,
            measurements: FrameMeasurements {
                tracked_lines,
                centerlines,
                intersections: graph.intersections,
                segments: graph.segments,
                angles,
                lengths,
                aligned: self.is_aligned(),
            },
            counts,
            timing,
        };
        self.frame_index += 1;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> FrameSize {
        FrameSize::new(800.0, 600.0)
    }

    /// Two edges 20px apart around a horizontal tube at y = 300.
    fn horizontal_tube() -> [Line; 2] {
        [
            Line::from_coords(100.0, 290.0, 700.0, 290.0),
            Line::from_coords(100.0, 310.0, 700.0, 310.0),
        ]
    }

    #[test]
    fn single_tube_gives_one_centerline_and_no_segments() {
        let mut p = MeasurementPipeline::new(PipelineParams::default()).unwrap();
        let report = p.process_with_diagnostics(frame(), &horizontal_tube());
        assert_eq!(report.counts.tracked_lines, 2);
        assert_eq!(report.counts.centerlines, 1);
        assert!(report.measurements.intersections.is_empty());
        assert!(report.measurements.lengths.is_empty());
        assert!(!report.measurements.aligned);
        assert_eq!(report.frame_index, 0);
        assert!(report.timing.stage_ms("track").is_some());
    }

    #[test]
    fn transform_and_reset() {
        let mut p = MeasurementPipeline::new(PipelineParams::default()).unwrap();
        assert!(p.set_transform(Some(Matrix3::zeros())).is_err());
        p.set_transform(Some(Matrix3::new(0.1, 0.0, 0.0, 0.0, 0.1, 0.0, 0.0, 0.0, 1.0)))
            .unwrap();
        assert!(p.is_aligned());
        p.process(frame(), &horizontal_tube());
        assert_eq!(p.buffered_frames(), 1);
        p.reset();
        assert_eq!(p.buffered_frames(), 0);
        p.set_transform(None).unwrap();
        assert!(!p.is_aligned());
    }

    #[test]
    fn set_params_rejects_invalid_and_keeps_old() {
        let mut p = MeasurementPipeline::new(PipelineParams::default()).unwrap();
        let mut bad = PipelineParams::default();
        bad.tracker.window = 0;
        assert!(p.set_params(bad).is_err());
        assert_eq!(p.params(), &PipelineParams::default());
    }
}
