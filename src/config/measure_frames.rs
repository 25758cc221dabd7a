use crate::centerline::{CenterlineParams, PairingStrategy};
use crate::detector::PipelineParams;
use crate::error::{Error, Result};
use crate::homography::WorldTransform;
use crate::tracker::{FrameSize, TrackerParams};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `measure_frames` tool.
#[derive(Debug, Deserialize)]
pub struct MeasureFramesConfig {
    /// JSON file with recorded raw segments, one array per frame.
    pub input: PathBuf,
    pub frame: FrameSize,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub centerline: CenterlineConfig,
    /// Row-major image→world homography. Absent means pixel units.
    #[serde(default)]
    pub alignment: Option<[[f64; 3]; 3]>,
    pub output: MeasureFramesOutputConfig,
}

/// Tracker knobs as written in config files (angles in degrees).
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub window: usize,
    pub angle_threshold_deg: f64,
    pub distance_threshold_px: f64,
    pub border_px: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let p = TrackerParams::default();
        Self {
            window: p.window,
            angle_threshold_deg: p.angle_threshold.to_degrees(),
            distance_threshold_px: p.distance_threshold,
            border_px: p.border,
        }
    }
}

impl TrackerConfig {
    pub fn resolve(&self) -> TrackerParams {
        TrackerParams {
            window: self.window,
            angle_threshold: self.angle_threshold_deg.to_radians(),
            distance_threshold: self.distance_threshold_px,
            border: self.border_px,
        }
    }
}

/// Centerline knobs as written in config files (angles in degrees).
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CenterlineConfig {
    pub angle_threshold_deg: f64,
    pub width_threshold_px: f64,
    pub extension: f64,
    pub pairing: PairingStrategy,
}

impl Default for CenterlineConfig {
    fn default() -> Self {
        let p = CenterlineParams::default();
        Self {
            angle_threshold_deg: p.angle_threshold.to_degrees(),
            width_threshold_px: p.width_threshold,
            extension: p.extension,
            pairing: p.pairing,
        }
    }
}

impl CenterlineConfig {
    pub fn resolve(&self) -> CenterlineParams {
        CenterlineParams {
            angle_threshold: self.angle_threshold_deg.to_radians(),
            width_threshold: self.width_threshold_px,
            extension: self.extension,
            pairing: self.pairing,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MeasureFramesOutputConfig {
    /// Where the per-frame reports are written.
    pub report_json: PathBuf,
    /// Keep only the report of the last frame.
    #[serde(default)]
    pub last_frame_only: bool,
}

impl MeasureFramesConfig {
    /// Validated pipeline parameters. Also checks the frame size, which the
    /// pipeline receives per call rather than as a parameter.
    pub fn pipeline_params(&self) -> Result<PipelineParams> {
        self.frame.validate()?;
        let params = PipelineParams {
            tracker: self.tracker.resolve(),
            centerline: self.centerline.resolve(),
        };
        params.validate()?;
        Ok(params)
    }

    /// Validated alignment, if one is configured.
    pub fn transform(&self) -> Result<Option<WorldTransform>> {
        self.alignment.map(WorldTransform::from_rows).transpose()
    }
}

pub fn load_config(path: &Path) -> Result<MeasureFramesConfig> {
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}
