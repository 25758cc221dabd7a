mod common;

use common::synthetic_lines::{jitter, tube_edges, tube_grid};
use nalgebra::Matrix3;
use tube_measure::{
    find_centerlines, intersect, CenterlineParams, FrameSize, Line, LineTracker,
    MeasurementPipeline, PipelineParams, TrackerParams,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn close(a: [f64; 2], b: [f64; 2], tol: f64) -> bool {
    (a[0] - b[0]).abs() <= tol && (a[1] - b[1]).abs() <= tol
}

#[test]
fn parallel_edges_yield_single_extended_centerline() {
    init_logger();
    let edges = [
        Line::from_coords(0.0, 0.0, 200.0, 0.0),
        Line::from_coords(0.0, 100.0, 200.0, 100.0),
    ];
    let params = CenterlineParams {
        width_threshold: 150.0,
        ..CenterlineParams::default()
    };

    let centerlines = find_centerlines(&edges, &params);

    assert_eq!(centerlines.len(), 1, "got {centerlines:?}");
    let c = centerlines[0].line;
    assert!(close(c.start(), [-20.0, 50.0], 1e-9), "start={:?}", c.start());
    assert!(close(c.end(), [220.0, 50.0], 1e-9), "end={:?}", c.end());
}

#[test]
fn right_angle_corner_ignores_short_diagonal() {
    init_logger();
    let horizontal = Line::from_coords(0.0, 100.0, 200.0, 100.0);
    let vertical = Line::from_coords(100.0, 0.0, 100.0, 200.0);
    // Well off the corner; its extension never reaches the other two.
    let diagonal = Line::from_coords(300.0, 300.0, 340.0, 340.0);

    let graph = intersect(&[horizontal, vertical, diagonal]);

    let perpendicular: Vec<_> = graph
        .intersections
        .iter()
        .filter(|x| {
            (x.line_a() == horizontal && x.line_b() == vertical)
                || (x.line_a() == vertical && x.line_b() == horizontal)
        })
        .collect();
    assert_eq!(perpendicular.len(), 1);
    assert!(close(perpendicular[0].point(), [100.0, 100.0], 1e-9));
    assert!((perpendicular[0].acute_angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

    let with_outlier = graph
        .intersections
        .iter()
        .filter(|x| x.line_a() == diagonal || x.line_b() == diagonal)
        .count();
    assert_eq!(with_outlier, 0);
    assert_eq!(graph.intersections.len(), 1);
    // One crossing per line is not enough to delimit a segment.
    assert!(graph.segments.is_empty());
}

#[test]
fn repeated_segment_collapses_to_one_tracked_line() {
    init_logger();
    let mut tracker = LineTracker::new(TrackerParams::default().with_window(5)).unwrap();
    let frame = FrameSize::new(800.0, 600.0);
    let segment = Line::from_coords(100.0, 200.0, 500.0, 260.0);

    let mut tracked = Vec::new();
    for _ in 0..5 {
        tracked = tracker.process_frame(frame, &[segment]);
    }

    assert_eq!(tracked.len(), 1, "got {tracked:?}");
    assert!(close(tracked[0].start(), segment.start(), 1e-9));
    assert!(close(tracked[0].end(), segment.end(), 1e-9));
    assert_eq!(tracker.history_len(), 5);
}

#[test]
fn tracker_history_never_exceeds_window() {
    let mut tracker = LineTracker::new(TrackerParams::default().with_window(3)).unwrap();
    let frame = FrameSize::new(800.0, 600.0);
    let edges = tube_edges([100.0, 300.0], [700.0, 300.0], 20.0);
    for i in 0..10 {
        tracker.process_frame(frame, &jitter(&edges, i, 1.0));
        assert!(tracker.history_len() <= 3);
    }
    assert_eq!(tracker.history_len(), 3);
}

#[test]
fn jittery_tube_grid_measures_segment_in_world_units() {
    init_logger();
    let frame = FrameSize::new(800.0, 600.0);
    let edges = tube_grid(800.0, 600.0, 1, 2, 20.0, 100.0);
    assert_eq!(edges.len(), 6);

    let mut pipeline = MeasurementPipeline::new(PipelineParams::default()).unwrap();
    pipeline
        .set_transform(Some(Matrix3::new(0.1, 0.0, 0.0, 0.0, 0.1, 0.0, 0.0, 0.0, 1.0)))
        .unwrap();

    let mut last = None;
    for i in 0..8 {
        last = Some(pipeline.process_with_diagnostics(frame, &jitter(&edges, i, 1.0)));
    }
    let report = last.unwrap();
    let m = &report.measurements;

    assert_eq!(report.counts.buffered_frames, 5);
    assert_eq!(m.tracked_lines.len(), 6, "tracked={:?}", m.tracked_lines);
    assert_eq!(m.centerlines.len(), 3);
    assert!(m
        .centerlines
        .windows(2)
        .all(|w| w[0].angle() >= w[1].angle()));
    assert_eq!(m.intersections.len(), 2);
    assert_eq!(m.segments.len(), 1);

    let pixel_len = m.segments[0].length();
    assert!((pixel_len - 200.0).abs() < 3.0, "pixel length {pixel_len}");

    assert!(m.aligned);
    assert_eq!(m.lengths.len(), 1);
    assert!((m.lengths[0].length - 20.0).abs() < 0.3, "world length {}", m.lengths[0].length);

    assert_eq!(m.angles.len(), 2);
    for a in &m.angles {
        assert!((a.angle_deg() - 90.0).abs() < 1.0, "angle {}", a.angle_deg());
    }
}

#[test]
fn border_hugging_detections_never_reach_centerlines() {
    init_logger();
    let frame = FrameSize::new(800.0, 600.0);
    let mut raw = tube_edges([100.0, 300.0], [700.0, 300.0], 20.0).to_vec();
    // Frame outline picked up by the detector.
    raw.push(Line::from_coords(5.0, 5.0, 795.0, 5.0));
    raw.push(Line::from_coords(5.0, 12.0, 795.0, 12.0));

    let mut pipeline = MeasurementPipeline::new(PipelineParams::default()).unwrap();
    let report = pipeline.process_with_diagnostics(frame, &raw);

    assert_eq!(report.counts.raw_segments, 4);
    assert_eq!(report.counts.kept_segments, 2);
    assert_eq!(report.measurements.centerlines.len(), 1);
    let c = report.measurements.centerlines[0];
    assert!((c.midpoint()[1] - 300.0).abs() < 1e-9);
}
