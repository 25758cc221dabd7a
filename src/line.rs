//! Immutable 2D line segment and the geometry every later stage builds on.
//!
//! A [`Line`] is an ordered pair of points. Direction matters for the signed
//! [`Line::angle`] but not for length or midpoint. There are no mutating
//! methods: every transformation (`reversed`, `x_rectified`, `extended`, ...)
//! returns a new value, and since `Line` is `Copy` callers can never alias the
//! points of another line.
//!
//! Orientation-sensitive comparisons first rectify lines along an axis so that
//! the start point has the smaller coordinate. The axis is picked from the
//! gradient (`|gradient| > 1` ⇒ Y) which keeps near-vertical lines away from
//! the infinite-gradient singularity.

use crate::angle;
use serde::{Deserialize, Serialize};

/// 2D point in image (or world) coordinates.
pub type Point = [f64; 2];

/// Coordinate axis used for rectification and ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Coordinate of `p` along this axis.
    #[inline]
    pub fn coord(self, p: &Point) -> f64 {
        match self {
            Axis::X => p[0],
            Axis::Y => p[1],
        }
    }
}

/// Straight line segment from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new([x1, y1], [x2, y2])
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Point halfway between start and end.
    pub fn midpoint(&self) -> Point {
        [
            (self.start[0] + self.end[0]) * 0.5,
            (self.start[1] + self.end[1]) * 0.5,
        ]
    }

    /// Vector from start to end.
    pub fn direction(&self) -> Point {
        [self.end[0] - self.start[0], self.end[1] - self.start[1]]
    }

    pub fn length(&self) -> f64 {
        let [dx, dy] = self.direction();
        dx.hypot(dy)
    }

    /// Angle to the positive x axis in (−π, π], anticlockwise positive.
    pub fn angle(&self) -> f64 {
        let [dx, dy] = self.direction();
        dy.atan2(dx)
    }

    /// dy/dx. Infinite for vertical lines and NaN for zero-length ones.
    pub fn gradient(&self) -> f64 {
        let [dx, dy] = self.direction();
        dy / dx
    }

    /// Axis along which this line is best compared: Y when `|gradient| > 1`.
    pub fn dominant_axis(&self) -> Axis {
        if self.gradient().abs() > 1.0 {
            Axis::Y
        } else {
            Axis::X
        }
    }

    pub fn is_finite(&self) -> bool {
        self.start.iter().chain(self.end.iter()).all(|v| v.is_finite())
    }

    /// True when start and end coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Perpendicular distance from the infinite extension of this line to `point`.
    pub fn distance_to(&self, point: Point) -> f64 {
        let hypot = Line::new(self.start, point);
        hypot.length() * Line::acute_angle_between(self, &hypot).sin()
    }

    /// Position of the nearest point on the infinite extension of this line,
    /// as a fraction of the way from start to end. Values outside [0, 1] lie
    /// beyond the segment's ends.
    pub fn projection_fraction(&self, point: Point) -> f64 {
        let len = self.length();
        if len == 0.0 {
            return 0.0;
        }
        let hypot = Line::new(self.start, point);
        // Directed angle here: a point behind the start must project negative.
        hypot.length() * Line::angle_between(self, &hypot).cos() / len
    }

    /// Nearest point to `point` on the infinite extension of this line.
    pub fn nearest_point_to(&self, point: Point) -> Point {
        self.point_at(self.projection_fraction(point))
    }

    /// Point at parameter `t` (0 = start, 1 = end).
    pub fn point_at(&self, t: f64) -> Point {
        let [dx, dy] = self.direction();
        [self.start[0] + dx * t, self.start[1] + dy * t]
    }

    pub fn reversed(&self) -> Line {
        Line::new(self.end, self.start)
    }

    /// Copy whose start has the smaller x coordinate.
    pub fn x_rectified(&self) -> Line {
        self.rectified(Axis::X)
    }

    /// Copy whose start has the smaller y coordinate.
    pub fn y_rectified(&self) -> Line {
        self.rectified(Axis::Y)
    }

    pub fn rectified(&self, axis: Axis) -> Line {
        if axis.coord(&self.start) > axis.coord(&self.end) {
            self.reversed()
        } else {
            *self
        }
    }

    /// Extends both ends equally so the length grows by `fraction` of the
    /// original. Negative values shorten; `extended(-2.0)` equals `reversed()`.
    pub fn extended(&self, fraction: f64) -> Line {
        self.extended_ends(fraction * 0.5, fraction * 0.5)
    }

    /// Extends the start and end independently by fractions of the original
    /// length. A fraction of `-1` moves that end onto the opposite endpoint.
    pub fn extended_ends(&self, start_fraction: f64, end_fraction: f64) -> Line {
        let [dx, dy] = self.direction();
        Line::new(
            [
                self.start[0] - dx * start_fraction,
                self.start[1] - dy * start_fraction,
            ],
            [
                self.end[0] + dx * end_fraction,
                self.end[1] + dy * end_fraction,
            ],
        )
    }

    /// Line midway between `l` and `m`: the bimedian of the quadrilateral
    /// formed by their endpoints.
    ///
    /// Both inputs are rectified along one shared axis (Y when either is
    /// steeper than 45°) so that corresponding endpoints are averaged.
    pub fn equidistant(l: &Line, m: &Line) -> Line {
        let axis = if l.dominant_axis() == Axis::Y || m.dominant_axis() == Axis::Y {
            Axis::Y
        } else {
            Axis::X
        };
        let l = l.rectified(axis);
        let m = m.rectified(axis);
        Line::new(
            [
                (l.start[0] + m.start[0]) * 0.5,
                (l.start[1] + m.start[1]) * 0.5,
            ],
            [(l.end[0] + m.end[0]) * 0.5, (l.end[1] + m.end[1]) * 0.5],
        )
    }

    /// Directed angle between two lines, in [0, π].
    pub fn angle_between(l: &Line, m: &Line) -> f64 {
        angle::angle_between(l.angle(), m.angle())
    }

    /// Acute angle between two lines, in [0, π/2].
    pub fn acute_angle_between(l: &Line, m: &Line) -> f64 {
        angle::acute_angle(Line::angle_between(l, m))
    }

    /// Obtuse angle between two lines, in [π/2, π].
    pub fn obtuse_angle_between(l: &Line, m: &Line) -> f64 {
        angle::obtuse_angle(Line::angle_between(l, m))
    }

    /// Crossing point of two segments.
    ///
    /// Parametric test on the determinant of the two direction vectors:
    /// `None` when the lines are parallel or coincident (determinant exactly
    /// zero) or when the crossing lies beyond either segment (t or u outside
    /// [0, 1]). No tolerance is applied; widen the inputs with
    /// [`Line::extended`] first when one is needed.
    pub fn intersection(l: &Line, m: &Line) -> Option<Point> {
        let [dx1, dy1] = l.direction();
        let [dx2, dy2] = m.direction();
        let dx3 = m.start[0] - l.start[0];
        let dy3 = m.start[1] - l.start[1];

        let det = dy2 * dx1 - dy1 * dx2;
        if det == 0.0 {
            return None;
        }

        // t runs along l, u along m
        let t = (dx3 * dy2 - dy3 * dx2) / det;
        let u = (dx3 * dy1 - dy3 * dx1) / det;
        if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
            return None;
        }

        Some(l.point_at(t))
    }
}
