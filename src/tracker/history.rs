use crate::line::Line;
use std::collections::VecDeque;

/// Bounded FIFO of per-frame line lists, oldest at the front.
#[derive(Clone, Debug, Default)]
pub struct FrameHistory {
    frames: VecDeque<Vec<Line>>,
}

impl FrameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a frame, then drops the oldest frames until at most `window`
    /// remain. A window that shrank between frames takes effect here.
    pub fn push(&mut self, lines: Vec<Line>, window: usize) {
        self.frames.push_back(lines);
        while self.frames.len() > window.max(1) {
            self.frames.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Total number of buffered segments across all frames.
    pub fn line_count(&self) -> usize {
        self.frames.iter().map(Vec::len).sum()
    }

    /// All buffered segments, newest frame first and each frame reversed.
    pub fn flatten_recent_first(&self) -> Vec<Line> {
        let mut out = Vec::with_capacity(self.line_count());
        for frame in self.frames.iter().rev() {
            out.extend(frame.iter().rev().copied());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(tag: f64, n: usize) -> Vec<Line> {
        (0..n)
            .map(|i| Line::from_coords(tag, i as f64, tag + 10.0, i as f64))
            .collect()
    }

    #[test]
    fn never_exceeds_window() {
        let mut h = FrameHistory::new();
        for i in 0..12 {
            h.push(frame(i as f64, 2), 5);
            assert!(h.len() <= 5);
        }
        assert_eq!(h.len(), 5);
        assert_eq!(h.line_count(), 10);
    }

    #[test]
    fn shrinking_window_prunes_on_next_push() {
        let mut h = FrameHistory::new();
        for i in 0..5 {
            h.push(frame(i as f64, 1), 5);
        }
        h.push(frame(5.0, 1), 2);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn flatten_puts_newest_frame_first() {
        let mut h = FrameHistory::new();
        h.push(frame(0.0, 2), 3);
        h.push(frame(100.0, 2), 3);
        let flat = h.flatten_recent_first();
        assert_eq!(flat.len(), 4);
        assert_eq!(flat[0].start()[0], 100.0);
        assert_eq!(flat[3].start()[0], 0.0);
    }
}
