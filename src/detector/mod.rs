//! Frame-synchronous measurement pipeline.
//!
//! Overview
//! - [`LineTracker`](crate::tracker::LineTracker) stabilizes raw segments over
//!   a sliding window of frames.
//! - [`find_centerlines`](crate::centerline::find_centerlines) pairs tracked
//!   edges and bisects each pair.
//! - Centerlines are sorted by angle (largest first) and intersected
//!   pairwise; segments between consecutive crossings are collected.
//! - Segments and intersections are mapped through the image→world transform
//!   and measured.
//!
//! Modules
//! - [`params`] – configuration grouping the stage parameters.
//! - `pipeline` – the [`MeasurementPipeline`] driver.

pub mod params;
mod pipeline;

pub use params::PipelineParams;
pub use pipeline::{FrameMeasurements, MeasurementPipeline};
