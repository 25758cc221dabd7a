//! Image→world transform applied before measuring.
//!
//! The matrix is supplied by an external alignment step (e.g. checkerboard
//! pose estimation). Without one the identity is used and measurements stay
//! in pixels.

use crate::error::{Error, Result};
use crate::line::{Line, Point};
use nalgebra::{Matrix3, Vector3};

const EPS: f64 = 1e-12;

/// Applies `h` to each point with a projective divide. Returns `None` when
/// any point maps to infinity or to a non-finite coordinate.
pub fn apply_homography_points(h: &Matrix3<f64>, pts: &[Point]) -> Option<Vec<Point>> {
    let mut out = Vec::with_capacity(pts.len());
    for &p in pts {
        let v = h * Vector3::new(p[0], p[1], 1.0);
        let w = v[2];
        if !w.is_finite() || w.abs() <= EPS || !v[0].is_finite() || !v[1].is_finite() {
            return None;
        }
        out.push([v[0] / w, v[1] / w]);
    }
    Some(out)
}

/// Validated image→world homography.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldTransform {
    hmtx: Matrix3<f64>,
    identity: bool,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl WorldTransform {
    pub fn identity() -> Self {
        Self {
            hmtx: Matrix3::identity(),
            identity: true,
        }
    }

    /// Wraps `hmtx`, rejecting non-finite or singular matrices.
    pub fn from_matrix(hmtx: Matrix3<f64>) -> Result<Self> {
        if hmtx.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidTransform(
                "matrix has non-finite entries".to_string(),
            ));
        }
        let det = hmtx.determinant();
        if det.abs() <= EPS {
            return Err(Error::InvalidTransform(format!(
                "matrix is singular (det={det:e})"
            )));
        }
        Ok(Self {
            identity: hmtx == Matrix3::identity(),
            hmtx,
        })
    }

    /// Builds a transform from row-major rows, as stored in config files.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Result<Self> {
        Self::from_matrix(Matrix3::from_row_slice(&[
            rows[0][0], rows[0][1], rows[0][2], rows[1][0], rows[1][1], rows[1][2], rows[2][0],
            rows[2][1], rows[2][2],
        ]))
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.hmtx
    }

    /// True when no alignment is applied and results are in pixels.
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    pub fn transform_point(&self, p: Point) -> Option<Point> {
        if self.identity {
            return Some(p);
        }
        apply_homography_points(&self.hmtx, &[p]).map(|v| v[0])
    }

    pub fn transform_line(&self, line: &Line) -> Option<Line> {
        if self.identity {
            return Some(*line);
        }
        let pts = apply_homography_points(&self.hmtx, &[line.start(), line.end()])?;
        Some(Line::new(pts[0], pts[1]))
    }
}
