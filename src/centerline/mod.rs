//! Centerline derivation from pairs of tracked edges.
//!
//! A tube seen from above shows up as two near-parallel tracked lines a tube
//! width apart. Lines are sorted by angle so such pairs become neighbours,
//! paired according to [`PairingStrategy`], and each qualifying pair yields
//! its bimedian, over-extended so that intersection tests reach the corners.

mod params;

pub use params::{CenterlineParams, PairingStrategy};

use crate::line::Line;
use log::debug;
use serde::{Deserialize, Serialize};

/// A derived centerline together with the two edges it bisects.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Centerline {
    pub line: Line,
    pub edges: (Line, Line),
}

/// Derives centerlines from one frame's tracked lines.
pub fn find_centerlines(lines: &[Line], params: &CenterlineParams) -> Vec<Centerline> {
    let mut sorted = lines.to_vec();
    // Stable: ties keep input order.
    sorted.sort_by(|a, b| a.angle().total_cmp(&b.angle()));

    let pairs = match params.pairing {
        PairingStrategy::Adjacent => adjacent_pairs(&sorted, params),
        PairingStrategy::Nearest => nearest_pairs(&sorted, params),
    };

    let centerlines: Vec<Centerline> = pairs
        .into_iter()
        .map(|(i, j)| {
            let (a, b) = (sorted[i], sorted[j]);
            Centerline {
                line: Line::equidistant(&a, &b).extended(params.extension),
                edges: (a, b),
            }
        })
        .collect();

    debug!(
        "find_centerlines lines={} pairing={:?} centerlines={}",
        lines.len(),
        params.pairing,
        centerlines.len()
    );
    centerlines
}

/// Convenience wrapper returning only the centerline geometry.
pub fn centerline_lines(lines: &[Line], params: &CenterlineParams) -> Vec<Line> {
    find_centerlines(lines, params)
        .into_iter()
        .map(|c| c.line)
        .collect()
}

/// True when `a` and `b` look like the two edges of one object.
pub fn is_edge_pair(a: &Line, b: &Line, params: &CenterlineParams) -> bool {
    Line::acute_angle_between(a, b) < params.angle_threshold
        && a.distance_to(b.midpoint()) < params.width_threshold
}

fn adjacent_pairs(sorted: &[Line], params: &CenterlineParams) -> Vec<(usize, usize)> {
    let n = sorted.len();
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    for i in 0..n {
        let j = (i + 1) % n;
        if j == i {
            continue;
        }
        let key = (i.min(j), i.max(j));
        if pairs.contains(&key) {
            continue;
        }
        if is_edge_pair(&sorted[i], &sorted[j], params) {
            pairs.push(key);
        }
    }
    pairs
}

fn nearest_pairs(sorted: &[Line], params: &CenterlineParams) -> Vec<(usize, usize)> {
    let mut paired = vec![false; sorted.len()];
    let mut pairs = Vec::new();
    for i in 0..sorted.len() {
        if paired[i] {
            continue;
        }
        let reference = &sorted[i];
        let closest = sorted
            .iter()
            .enumerate()
            .filter(|&(j, l)| {
                j != i
                    && !paired[j]
                    && Line::acute_angle_between(reference, l) < params.angle_threshold
            })
            .map(|(j, l)| (j, reference.distance_to(l.midpoint())))
            .min_by(|a, b| a.1.total_cmp(&b.1));

        paired[i] = true;
        if let Some((j, dist)) = closest {
            if dist < params.width_threshold {
                paired[j] = true;
                pairs.push((i, j));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parallel_pair_gives_one_extended_centerline() {
        let a = Line::from_coords(0.0, 100.0, 400.0, 100.0);
        let b = Line::from_coords(0.0, 130.0, 400.0, 130.0);
        for pairing in [PairingStrategy::Adjacent, PairingStrategy::Nearest] {
            let params = CenterlineParams {
                pairing,
                ..Default::default()
            };
            let out = find_centerlines(&[a, b], &params);
            assert_eq!(out.len(), 1, "{pairing:?}");
            let c = out[0].line;
            assert!(approx_eq(c.start()[1], 115.0) && approx_eq(c.end()[1], 115.0));
            assert!(approx_eq(c.length(), 400.0 * 1.2));
            assert!(approx_eq(c.midpoint()[0], 200.0));
        }
    }

    #[test]
    fn too_wide_or_skewed_pairs_are_ignored() {
        let params = CenterlineParams::default();
        let a = Line::from_coords(0.0, 100.0, 400.0, 100.0);
        let far = Line::from_coords(0.0, 200.0, 400.0, 200.0);
        let skew = Line::from_coords(0.0, 110.0, 400.0, 180.0);
        assert!(find_centerlines(&[a, far], &params).is_empty());
        assert!(find_centerlines(&[a, skew], &params).is_empty());
        assert!(find_centerlines(&[a], &params).is_empty());
        assert!(find_centerlines(&[], &params).is_empty());
    }

    #[test]
    fn nearest_pairing_handles_three_side_by_side_tubes() {
        // Six edges, three tubes 30px wide, 40px gaps between tubes.
        let ys = [0.0, 30.0, 70.0, 100.0, 140.0, 170.0];
        let lines: Vec<Line> = ys
            .iter()
            .map(|&y| Line::from_coords(0.0, 100.0 + y, 400.0, 100.0 + y))
            .collect();
        let params = CenterlineParams {
            width_threshold: 35.0,
            ..Default::default()
        };
        let out = find_centerlines(&lines, &params);
        let mut centers: Vec<f64> = out.iter().map(|c| c.line.midpoint()[1]).collect();
        centers.sort_by(f64::total_cmp);
        assert_eq!(centers.len(), 3);
        assert!(approx_eq(centers[0], 115.0));
        assert!(approx_eq(centers[1], 185.0));
        assert!(approx_eq(centers[2], 255.0));
    }

    #[test]
    fn centerline_keeps_its_edges() {
        let a = Line::from_coords(200.0, 0.0, 200.0, 300.0);
        let b = Line::from_coords(220.0, 300.0, 220.0, 0.0);
        let out = find_centerlines(&[a, b], &CenterlineParams::default());
        assert_eq!(out.len(), 1);
        let (e1, e2) = out[0].edges;
        assert!((e1 == a && e2 == b) || (e1 == b && e2 == a));
        assert!(approx_eq(out[0].line.midpoint()[0], 210.0));
    }
}
