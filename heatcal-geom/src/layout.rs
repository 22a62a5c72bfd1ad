//! Fixed pixel geometry of the matrix, axis labels, and legend.
//!
//! These constants are part of the rendering contract and are not
//! user-configurable.

use crate::color::ANCHOR_TEMPS;
use heatcal_data::grid::{MONTHS, YEARS};
use serde::Serialize;

pub const CELL_WIDTH: f64 = 72.0;
pub const CELL_HEIGHT: f64 = 52.0;
/// Internal inset keeping sparklines off the cell border.
pub const LINE_INSET: f64 = 4.0;

// Outer padding around the matrix.
pub const PADDING_LEFT: f64 = 80.0;
pub const PADDING_TOP: f64 = 40.0;
pub const PADDING_RIGHT: f64 = 20.0;
pub const PADDING_BOTTOM: f64 = 30.0;

pub const LEGEND_BAR_WIDTH: f64 = 24.0;
pub const LEGEND_GAP: f64 = 16.0;
/// Room to the right of the legend bar for tick labels and the unit.
pub const LEGEND_LABEL_GUTTER: f64 = 32.0;

/// Width of the cell matrix itself.
pub fn grid_width() -> f64 {
    YEARS.len() as f64 * CELL_WIDTH
}

/// Height of the cell matrix (and of the legend bar).
pub fn grid_height() -> f64 {
    MONTHS.len() as f64 * CELL_HEIGHT
}

/// Total SVG width: matrix, legend, and padding.
pub fn total_width() -> f64 {
    PADDING_LEFT + grid_width() + LEGEND_GAP + LEGEND_BAR_WIDTH + LEGEND_LABEL_GUTTER + PADDING_RIGHT
}

/// Total SVG height.
pub fn total_height() -> f64 {
    PADDING_TOP + grid_height() + PADDING_BOTTOM
}

/// Top-left corner of a cell, relative to the matrix origin.
pub fn cell_origin(xi: usize, yi: usize) -> (f64, f64) {
    (xi as f64 * CELL_WIDTH, yi as f64 * CELL_HEIGHT)
}

/// Horizontal center of a year column, for the x-axis label.
pub fn year_label_x(xi: usize) -> f64 {
    xi as f64 * CELL_WIDTH + CELL_WIDTH / 2.0
}

/// Vertical center of a month row, for the y-axis label.
pub fn month_label_y(yi: usize) -> f64 {
    yi as f64 * CELL_HEIGHT + CELL_HEIGHT / 2.0
}

/// X position of the legend bar, relative to the SVG origin.
pub fn legend_origin_x() -> f64 {
    PADDING_LEFT + grid_width() + LEGEND_GAP
}

/// One tick of the legend's temperature axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendTick {
    /// Temperature at the tick, in degrees Celsius.
    pub value: f64,
    /// Y offset down the legend bar, in pixels.
    pub y: f64,
}

/// Map a temperature linearly onto the legend bar height (0 at the top).
pub fn legend_tick_y(t: f64) -> f64 {
    let lo = ANCHOR_TEMPS[0];
    let hi = ANCHOR_TEMPS[ANCHOR_TEMPS.len() - 1];
    (t - lo) / (hi - lo) * grid_height()
}

/// Ticks at every anchor temperature, top to bottom.
pub fn legend_ticks() -> Vec<LegendTick> {
    ANCHOR_TEMPS
        .iter()
        .map(|&t| LegendTick {
            value: t,
            y: legend_tick_y(t),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(grid_width(), 720.0);
        assert_eq!(grid_height(), 624.0);
        assert_eq!(total_width(), 80.0 + 720.0 + 16.0 + 24.0 + 32.0 + 20.0);
        assert_eq!(total_height(), 40.0 + 624.0 + 30.0);
    }

    #[test]
    fn test_cell_origin_and_label_anchors() {
        assert_eq!(cell_origin(0, 0), (0.0, 0.0));
        assert_eq!(cell_origin(3, 2), (216.0, 104.0));
        assert_eq!(year_label_x(0), 36.0);
        assert_eq!(month_label_y(11), 11.0 * 52.0 + 26.0);
    }

    #[test]
    fn test_legend_ticks_span_bar_height() {
        let ticks = legend_ticks();
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0].value, 0.0);
        assert_eq!(ticks[0].y, 0.0);
        assert_eq!(ticks[5].value, 40.0);
        assert_eq!(ticks[5].y, grid_height());
        assert_eq!(legend_tick_y(20.0), grid_height() / 2.0);
    }
}
