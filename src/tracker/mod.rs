//! Temporal line tracker.
//!
//! Raw segments from a line detector flicker from frame to frame: edges drop
//! out, split into pieces, or appear twice. [`LineTracker`] keeps the raw
//! segments of the last `window` frames and, every frame, merges everything in
//! that window with a fuzzy average (see [`fuzzy_average_lines`]). The result
//! suppresses single-frame noise and collapses duplicate detections of one
//! physical edge into a single line that keeps the edge's true extent.
//!
//! Per frame:
//! 1. Border rejection – segments hugging one frame edge are dropped.
//! 2. Sanitization – non-finite and zero-length segments are dropped.
//! 3. History update – the frame's segments (angle-sorted) are appended and
//!    the oldest frame is discarded once the window is exceeded.
//! 4. Flatten – all buffered segments, most recent frame first.
//! 5. Fuzzy averaging – one output line per cluster.
//!
//! The tracker carries no identity across frames; clusters are rebuilt from
//! scratch every time. Calls must be serialized by the owner (one frame at a
//! time); discarding history is done with [`LineTracker::clear`] or by
//! building a new tracker.

mod border;
mod fuzzy;
mod history;
mod params;

pub use border::{reject_border_lines, FrameSize};
pub use fuzzy::fuzzy_average_lines;
pub use history::FrameHistory;
pub use params::TrackerParams;

use crate::error::Result;
use crate::line::Line;
use log::debug;

/// Fuzzy moving-average tracker over a sliding window of frames.
#[derive(Clone, Debug)]
pub struct LineTracker {
    params: TrackerParams,
    history: FrameHistory,
}

impl LineTracker {
    pub fn new(params: TrackerParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            history: FrameHistory::new(),
        })
    }

    pub fn params(&self) -> &TrackerParams {
        &self.params
    }

    /// Replaces the parameters between frames. History is kept; a smaller
    /// window prunes it on the next frame.
    pub fn set_params(&mut self, params: TrackerParams) -> Result<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Number of frames currently buffered.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Adds one frame of raw segments and returns the tracked lines.
    pub fn process_frame(&mut self, frame: FrameSize, raw: &[Line]) -> Vec<Line> {
        self.process_frame_counted(frame, raw).0
    }

    /// Same as [`LineTracker::process_frame`], also returning how many raw
    /// segments survived border rejection and sanitization.
    pub(crate) fn process_frame_counted(
        &mut self,
        frame: FrameSize,
        raw: &[Line],
    ) -> (Vec<Line>, usize) {
        let mut kept = reject_border_lines(raw, frame, self.params.border);
        kept.retain(|l| l.is_finite() && !l.is_degenerate());
        kept.sort_by(|a, b| a.angle().total_cmp(&b.angle()));
        let kept_count = kept.len();

        self.history.push(kept, self.params.window);
        let buffered = self.history.flatten_recent_first();
        let tracked = fuzzy_average_lines(
            &buffered,
            self.params.distance_threshold,
            self.params.angle_threshold,
        );

        debug!(
            "LineTracker::process_frame raw={} kept={} buffered={} frames={} tracked={}",
            raw.len(),
            kept_count,
            buffered.len(),
            self.history.len(),
            tracked.len()
        );
        (tracked, kept_count)
    }
}
