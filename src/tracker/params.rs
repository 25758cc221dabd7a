use crate::error::{ensure_non_negative, Error, Result};
use serde::{Deserialize, Serialize};

/// Knobs for the temporal line tracker.
///
/// - `window`: number of frames kept for the fuzzy moving average. Higher
///   values give steadier lines but react more slowly to movement.
/// - `angle_threshold`: lines closer than this acute angle (radians) are
///   considered parallel.
/// - `distance_threshold`: parallel lines whose midpoint lies closer than
///   this many pixels to the reference are considered coincident.
/// - `border`: segments with both endpoints within this many pixels of the
///   same frame edge are discarded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackerParams {
    pub window: usize,
    pub angle_threshold: f64,
    pub distance_threshold: f64,
    pub border: f64,
}

impl Default for TrackerParams {
    fn default() -> Self {
        Self {
            window: 5,
            angle_threshold: 10f64.to_radians(),
            distance_threshold: 10.0,
            border: 20.0,
        }
    }
}

impl TrackerParams {
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(Error::invalid(
                "tracker.window",
                0.0,
                "at least one frame is required",
            ));
        }
        ensure_non_negative("tracker.angle_threshold", self.angle_threshold)?;
        ensure_non_negative("tracker.distance_threshold", self.distance_threshold)?;
        ensure_non_negative("tracker.border", self.border)?;
        Ok(())
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_angle_threshold_deg(mut self, degrees: f64) -> Self {
        self.angle_threshold = degrees.to_radians();
        self
    }

    pub fn with_distance_threshold(mut self, pixels: f64) -> Self {
        self.distance_threshold = pixels;
        self
    }

    pub fn with_border(mut self, pixels: f64) -> Self {
        self.border = pixels;
        self
    }
}
