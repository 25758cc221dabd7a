use crate::error::{Error, Result};
use crate::line::Line;
use serde::{Deserialize, Serialize};

/// Dimensions of the (undistorted) frame the raw segments were detected in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: f64,
    pub height: f64,
}

impl FrameSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Rejects empty, negative and non-finite dimensions.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("frame.width", self.width), ("frame.height", self.height)] {
            if !value.is_finite() {
                return Err(Error::invalid(name, value, "must be finite"));
            }
            if value <= 0.0 {
                return Err(Error::invalid(name, value, "must be positive"));
            }
        }
        Ok(())
    }

    /// True when both endpoints hug the same edge of the frame.
    pub fn hugs_edge(&self, line: &Line, border: f64) -> bool {
        let [x1, y1] = line.start();
        let [x2, y2] = line.end();
        (x1 < border && x2 < border)
            || (x1 > self.width - border && x2 > self.width - border)
            || (y1 < border && y2 < border)
            || (y1 > self.height - border && y2 > self.height - border)
    }
}

/// Drops segments lying along a frame edge; those come from the frame
/// boundary rather than the photographed object.
pub fn reject_border_lines(lines: &[Line], frame: FrameSize, border: f64) -> Vec<Line> {
    lines
        .iter()
        .filter(|l| !frame.hugs_edge(l, border))
        .copied()
        .collect()
}
