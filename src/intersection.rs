//! Intersections between centerlines and the segments they delimit.
//!
//! Every centerline is tested against every other one. Each unordered pair
//! that crosses is recorded once as an [`Intersection`]; independently, every
//! crossing point lying on a centerline is collected for that line, sorted
//! along its dominant axis, and consecutive points are joined into segments.
//! Segments are what gets measured for length; intersections carry both lines
//! so the crossing angle can be re-derived after transforming to world space.

use crate::homography::WorldTransform;
use crate::line::{Line, Point};
use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Crossing point of two centerlines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    point: Point,
    line_a: Line,
    line_b: Line,
}

impl Intersection {
    pub fn new(point: Point, line_a: Line, line_b: Line) -> Self {
        Self {
            point,
            line_a,
            line_b,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn line_a(&self) -> Line {
        self.line_a
    }

    pub fn line_b(&self) -> Line {
        self.line_b
    }

    /// Acute angle between the two crossing lines in their current space.
    pub fn acute_angle(&self) -> f64 {
        Line::acute_angle_between(&self.line_a, &self.line_b)
    }

    /// Maps the point and both lines through `transform`.
    pub fn transformed(&self, transform: &WorldTransform) -> Option<Intersection> {
        Some(Intersection::new(
            transform.transform_point(self.point)?,
            transform.transform_line(&self.line_a)?,
            transform.transform_line(&self.line_b)?,
        ))
    }
}

/// All intersections and segments found among one frame's centerlines.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IntersectionGraph {
    pub intersections: Vec<Intersection>,
    pub segments: Vec<Line>,
}

/// Finds pairwise intersections and the segments between them.
pub fn intersect(lines: &[Line]) -> IntersectionGraph {
    #[cfg(feature = "parallel")]
    let per_line: Vec<(Vec<Intersection>, Vec<Line>)> = (0..lines.len())
        .into_par_iter()
        .map(|i| intersect_line(lines, i))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let per_line: Vec<(Vec<Intersection>, Vec<Line>)> =
        (0..lines.len()).map(|i| intersect_line(lines, i)).collect();

    let mut graph = IntersectionGraph::default();
    for (intersections, segments) in per_line {
        graph.intersections.extend(intersections);
        graph.segments.extend(segments);
    }
    debug!(
        "intersect lines={} intersections={} segments={}",
        lines.len(),
        graph.intersections.len(),
        graph.segments.len()
    );
    graph
}

/// Work for line `i`: intersections it owns (partners with a higher index)
/// and the segments along it.
fn intersect_line(lines: &[Line], i: usize) -> (Vec<Intersection>, Vec<Line>) {
    let line_a = lines[i];
    let mut owned = Vec::new();
    let mut on_line: Vec<Point> = Vec::new();

    for (j, line_b) in lines.iter().enumerate() {
        if j == i {
            continue;
        }
        if let Some(point) = Line::intersection(&line_a, line_b) {
            on_line.push(point);
            if j > i {
                owned.push(Intersection::new(point, line_a, *line_b));
            }
        }
    }

    (owned, segments_along(&line_a, on_line))
}

/// Sorts points along `line`'s dominant axis and joins consecutive ones.
fn segments_along(line: &Line, mut points: Vec<Point>) -> Vec<Line> {
    if points.len() < 2 {
        return Vec::new();
    }
    let axis = line.dominant_axis();
    points.sort_by(|a, b| axis.coord(a).total_cmp(&axis.coord(b)));
    points.windows(2).map(|w| Line::new(w[0], w[1])).collect()
}
