//! Fuzzy averaging: merge coincident segments into one representative line.
//!
//! Each pass pops a reference segment, rectifies the working list along the
//! reference's dominant axis, and partitions it into segments coincident with
//! the reference (midpoint within `distance_threshold` of the reference line
//! and acute angle below `angle_threshold`) and the rest. The coincident
//! group is averaged endpoint-wise, then stretched so it spans the most
//! extreme member endpoints. The loop continues on the remainder, so every
//! iteration yields exactly one output line.
//!
//! An averaged line can drift within reach of a cluster formed later in the
//! same pass, so passes are repeated on their own output until the line count
//! stops shrinking. Output lines are then pairwise non-coincident.

use crate::line::{Axis, Line, Point};
use log::trace;
use std::cmp::Ordering;

/// Merges coincident lines. The input is not modified; the output holds one
/// line per cluster, in the order clusters were formed.
pub fn fuzzy_average_lines(
    lines: &[Line],
    distance_threshold: f64,
    angle_threshold: f64,
) -> Vec<Line> {
    let mut averaged = merge_pass(lines, distance_threshold, angle_threshold);
    loop {
        let next = merge_pass(&averaged, distance_threshold, angle_threshold);
        if next.len() == averaged.len() {
            return averaged;
        }
        trace!(
            "fuzzy_average_lines: re-merge {} -> {} lines",
            averaged.len(),
            next.len()
        );
        averaged = next;
    }
}

/// One pop-reference/partition sweep over `lines`.
fn merge_pass(lines: &[Line], distance_threshold: f64, angle_threshold: f64) -> Vec<Line> {
    let mut averaged = Vec::new();
    let mut remaining: Vec<Line> = lines.to_vec();

    while !remaining.is_empty() {
        let reference = remaining.remove(0);
        let axis = reference.dominant_axis();
        let reference = reference.rectified(axis);

        let (mut cluster, rest): (Vec<Line>, Vec<Line>) = remaining
            .into_iter()
            .map(|l| l.rectified(axis))
            .partition(|l| is_coincident(&reference, l, distance_threshold, angle_threshold));
        cluster.push(reference);
        remaining = rest;

        trace!(
            "merge_pass: cluster of {} around angle={:.4} ({} left)",
            cluster.len(),
            reference.angle(),
            remaining.len()
        );
        averaged.push(merge_cluster(&cluster, axis));
    }

    averaged
}

fn is_coincident(reference: &Line, line: &Line, distance_threshold: f64, angle_threshold: f64) -> bool {
    reference.distance_to(line.midpoint()) < distance_threshold
        && Line::acute_angle_between(reference, line) < angle_threshold
}

/// Averages a non-empty, consistently rectified cluster and extends the
/// result to the extreme endpoints of its members.
fn merge_cluster(cluster: &[Line], axis: Axis) -> Line {
    let n = cluster.len() as f64;
    let mut start = [0.0, 0.0];
    let mut end = [0.0, 0.0];
    for l in cluster {
        let (s, e) = (l.start(), l.end());
        start[0] += s[0];
        start[1] += s[1];
        end[0] += e[0];
        end[1] += e[1];
    }
    let average = Line::new([start[0] / n, start[1] / n], [end[0] / n, end[1] / n]);
    if average.is_degenerate() {
        return average;
    }

    let by_axis = |a: &Point, b: &Point| -> Ordering { axis.coord(a).total_cmp(&axis.coord(b)) };
    let first = cluster.iter().map(Line::start).min_by(by_axis);
    let last = cluster.iter().map(Line::end).max_by(by_axis);
    match (first, last) {
        (Some(first), Some(last)) => Line::new(
            average.nearest_point_to(first),
            average.nearest_point_to(last),
        ),
        _ => average,
    }
}
