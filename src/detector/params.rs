//! Parameter types configuring the per-frame pipeline.
//!
//! Thresholds depend on resolution and lighting, so every value is
//! late-bindable: build a new [`PipelineParams`] and hand it to
//! [`MeasurementPipeline::set_params`](super::MeasurementPipeline::set_params)
//! between frames.

use crate::centerline::CenterlineParams;
use crate::error::Result;
use crate::tracker::TrackerParams;
use serde::{Deserialize, Serialize};

/// Pipeline-wide parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Temporal tracking of raw segments.
    pub tracker: TrackerParams,
    /// Pairing of tracked edges into centerlines.
    pub centerline: CenterlineParams,
}

impl PipelineParams {
    pub fn validate(&self) -> Result<()> {
        self.tracker.validate()?;
        self.centerline.validate()
    }
}
