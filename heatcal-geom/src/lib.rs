//! Geometry mapping for the temperature heatmap calendar.
//!
//! Turns the immutable grid of [`heatcal_data::grid::MonthCell`]s into
//! pixel-ready drawing attributes: cell fill colors, per-cell sparkline
//! paths, legend gradient stops and axis ticks, and tooltip labels. The
//! drawing layer itself lives outside this crate and only places these
//! precomputed values.

pub mod color;
pub mod layout;
pub mod sparkline;
pub mod tooltip;
