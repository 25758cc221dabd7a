//! JSON configuration for the command-line tools.

pub mod measure_frames;

pub use measure_frames::{load_config, MeasureFramesConfig};
