//! Per-cell sparkline paths.
//!
//! Each populated cell with at least two daily readings gets two SVG line
//! paths, one for the max series and one for the min series. Both are
//! normalized to the cell's own local temperature range so the two lines
//! stay comparable within a cell, independent of every other cell.

use crate::layout::{CELL_HEIGHT, CELL_WIDTH, LINE_INSET};
use heatcal_data::grid::MonthCell;
use serde::Serialize;
use std::fmt::Write;

/// SVG path data for the two daily series of one cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparklinePaths {
    pub max_path: String,
    pub min_path: String,
}

/// Build both sparkline paths for a cell, or `None` when fewer than two
/// daily points exist (a single point is not a line).
pub fn sparkline_paths(cell: &MonthCell) -> Option<SparklinePaths> {
    if cell.daily.len() < 2 {
        return None;
    }
    // Shared local bounds across both series.
    let temp_min = cell.daily.iter().map(|d| d.min).fold(f64::INFINITY, f64::min);
    let temp_max = cell
        .daily
        .iter()
        .map(|d| d.max)
        .fold(f64::NEG_INFINITY, f64::max);

    let maxs: Vec<f64> = cell.daily.iter().map(|d| d.max).collect();
    let mins: Vec<f64> = cell.daily.iter().map(|d| d.min).collect();

    Some(SparklinePaths {
        max_path: line_path(&maxs, temp_min, temp_max),
        min_path: line_path(&mins, temp_min, temp_max),
    })
}

/// Map a value series onto the cell's inset drawing area as an SVG path.
///
/// Day index i maps linearly onto the horizontal span; temperature maps
/// linearly onto the vertical span, inverted so hotter is higher on
/// screen. A degenerate range collapses every point to the vertical
/// center of the cell.
fn line_path(values: &[f64], temp_min: f64, temp_max: f64) -> String {
    let w = CELL_WIDTH - 2.0 * LINE_INSET;
    let h = CELL_HEIGHT - 2.0 * LINE_INSET;
    let span = temp_max - temp_min;
    let last = (values.len() - 1) as f64;

    let mut path = String::new();
    for (i, &v) in values.iter().enumerate() {
        let x = LINE_INSET + (i as f64 / last) * w;
        let y = if span == 0.0 {
            LINE_INSET + h / 2.0
        } else {
            LINE_INSET + h - ((v - temp_min) / span) * h
        };
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{}{},{}", cmd, fmt_px(x), fmt_px(y));
    }
    path
}

/// Format a pixel coordinate with at most two decimals, trailing zeros
/// trimmed ("4", "36.5", "10.67").
fn fmt_px(v: f64) -> String {
    let s = format!("{:.2}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
