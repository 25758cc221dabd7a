use crate::error::{ensure_non_negative, Result};
use serde::{Deserialize, Serialize};

/// How tracked lines are paired into the two edges of one object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingStrategy {
    /// After sorting by angle, pair each line with the next one (wrapping
    /// around). Assumes every edge has exactly one angular neighbour that is
    /// its partner; mis-pairs when three or more near-parallel lines exist.
    Adjacent,
    /// After sorting by angle, pair each unpaired line with the closest
    /// unpaired near-parallel line. Both lines of a pair are consumed.
    #[default]
    Nearest,
}

/// Knobs for centerline derivation.
///
/// - `angle_threshold`: maximum acute angle (radians) between two edges.
/// - `width_threshold`: maximum distance (pixels) from one edge to the
///   other's midpoint; excludes unrelated parallel lines.
/// - `extension`: fractional growth applied to each centerline so that later
///   intersection tests can reach the true corners.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CenterlineParams {
    pub angle_threshold: f64,
    pub width_threshold: f64,
    pub extension: f64,
    pub pairing: PairingStrategy,
}

impl Default for CenterlineParams {
    fn default() -> Self {
        Self {
            angle_threshold: 5f64.to_radians(),
            width_threshold: 50.0,
            extension: 0.2,
            pairing: PairingStrategy::default(),
        }
    }
}

impl CenterlineParams {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("centerline.angle_threshold", self.angle_threshold)?;
        ensure_non_negative("centerline.width_threshold", self.width_threshold)?;
        ensure_non_negative("centerline.extension", self.extension)?;
        Ok(())
    }
}
