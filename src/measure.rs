//! World-space measurements of segments and crossing angles.
//!
//! Geometry is derived in image space, where there are fewer pixels to worry
//! about and where accuracy is bounded by camera resolution anyway. Only the
//! final segments and intersections are mapped through the image→world
//! transform: lengths are measured on the transformed segment, and angles are
//! re-derived between the transformed lines (a perspective transform does not
//! preserve angles).

use crate::homography::WorldTransform;
use crate::intersection::Intersection;
use crate::line::{Line, Point};
use log::debug;
use serde::{Deserialize, Serialize};

/// Length of one segment in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentMeasurement {
    /// Segment in image space, for annotation.
    pub segment: Line,
    /// Same segment in world space.
    pub world: Line,
    pub length: f64,
}

/// Crossing angle at one intersection, measured in world space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleMeasurement {
    /// Intersection in image space, for annotation.
    pub intersection: Intersection,
    pub world_point: Point,
    /// Acute angle between the two transformed lines, radians.
    pub angle: f64,
}

impl AngleMeasurement {
    pub fn angle_deg(&self) -> f64 {
        self.angle.to_degrees()
    }
}

pub fn measure_segments(segments: &[Line], transform: &WorldTransform) -> Vec<SegmentMeasurement> {
    segments
        .iter()
        .filter_map(|segment| match transform.transform_line(segment) {
            Some(world) => Some(SegmentMeasurement {
                segment: *segment,
                world,
                length: world.length(),
            }),
            None => {
                debug!("measure_segments: segment {segment:?} has no world image, skipped");
                None
            }
        })
        .collect()
}

pub fn measure_intersections(
    intersections: &[Intersection],
    transform: &WorldTransform,
) -> Vec<AngleMeasurement> {
    intersections
        .iter()
        .filter_map(|x| match x.transformed(transform) {
            Some(world) => Some(AngleMeasurement {
                intersection: *x,
                world_point: world.point(),
                angle: world.acute_angle(),
            }),
            None => {
                debug!(
                    "measure_intersections: intersection at {:?} has no world image, skipped",
                    x.point()
                );
                None
            }
        })
        .collect()
}
