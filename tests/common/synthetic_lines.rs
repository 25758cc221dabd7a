use tube_measure::Line;

/// Both edges of a straight tube of the given width, running from `start`
/// to `end` along its axis.
pub fn tube_edges(start: [f64; 2], end: [f64; 2], width: f64) -> [Line; 2] {
    let (dx, dy) = (end[0] - start[0], end[1] - start[1]);
    let len = dx.hypot(dy);
    assert!(len > 0.0, "tube axis must have positive length");
    let (nx, ny) = (-dy / len * width * 0.5, dx / len * width * 0.5);
    [
        Line::new([start[0] + nx, start[1] + ny], [end[0] + nx, end[1] + ny]),
        Line::new([start[0] - nx, start[1] - ny], [end[0] - nx, end[1] - ny]),
    ]
}

/// Edges of `rows` horizontal and `cols` vertical tubes laid out on a grid
/// inside a `width` x `height` frame, keeping `margin` px clear of the border.
pub fn tube_grid(
    width: f64,
    height: f64,
    rows: usize,
    cols: usize,
    tube_width: f64,
    margin: f64,
) -> Vec<Line> {
    let mut lines = Vec::new();
    for r in 0..rows {
        let y = margin + (height - 2.0 * margin) * (r as f64 + 1.0) / (rows as f64 + 1.0);
        lines.extend(tube_edges([margin, y], [width - margin, y], tube_width));
    }
    for c in 0..cols {
        let x = margin + (width - 2.0 * margin) * (c as f64 + 1.0) / (cols as f64 + 1.0);
        lines.extend(tube_edges([x, margin], [x, height - margin], tube_width));
    }
    lines
}

/// Shifts every endpoint by a small deterministic offset, emulating detector
/// jitter between frames.
pub fn jitter(lines: &[Line], frame: usize, amplitude: f64) -> Vec<Line> {
    lines
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let phase = (frame * 7 + i * 3) as f64;
            let d = amplitude * phase.sin();
            let e = amplitude * (phase * 1.3).cos();
            let (s, t) = (l.start(), l.end());
            Line::new([s[0] + d, s[1] + e], [t[0] - e, t[1] + d])
        })
        .collect()
}
