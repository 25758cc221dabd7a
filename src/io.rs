//! JSON helpers for recorded frames and reports.
//!
//! - `load_frames`: read raw segments recorded from a line detector, one
//!   array per frame, each segment a Hough-style `[x1, y1, x2, y2]` row.
//! - `parse_frames`: same, from an in-memory string.
//! - `write_json_file`: pretty-print a serializable value to disk.

use crate::error::{Error, Result};
use crate::line::Line;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Raw segments for every recorded frame.
pub fn load_frames(path: &Path) -> Result<Vec<Vec<Line>>> {
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_frames(&data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_frames(data: &str) -> serde_json::Result<Vec<Vec<Line>>> {
    let rows: Vec<Vec<[f64; 4]>> = serde_json::from_str(data)?;
    Ok(rows
        .into_iter()
        .map(|frame| {
            frame
                .into_iter()
                .map(|[x1, y1, x2, y2]| Line::from_coords(x1, y1, x2, y2))
                .collect()
        })
        .collect())
}

pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
