//! Angle utilities shared by the line primitive and the deriving stages.

use std::f64::consts::PI;

/// Unsigned difference between two directed angles, folded into [0, π].
///
/// Opposite directions are π apart; this is the directed comparison used
/// when projecting a point onto a line.
#[inline]
pub fn angle_between(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs().rem_euclid(2.0 * PI);
    diff.min(2.0 * PI - diff)
}

/// Folds a [0, π] difference into its acute representative in [0, π/2].
#[inline]
pub fn acute_angle(diff: f64) -> f64 {
    diff.min(PI - diff)
}

/// Folds a [0, π] difference into its obtuse representative in [π/2, π].
#[inline]
pub fn obtuse_angle(diff: f64) -> f64 {
    diff.max(PI - diff)
}
