//! The year/month grid builder.
//!
//! Readings are grouped into at most one [`MonthCell`] per (year, month)
//! position of a fixed 10×12 matrix. The grid is sparse: months with no
//! valid readings produce no cell and render as blank positions.

use crate::reading::{DailyReading, DayTemps};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The fixed decade shown on the x-axis, ascending.
pub const YEARS: [i32; 10] = [2008, 2009, 2010, 2011, 2012, 2013, 2014, 2015, 2016, 2017];

/// Calendar months shown on the y-axis, ascending.
pub const MONTHS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// English month names for axis labels, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One populated (year, month) position of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCell {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Zero-based column index: position of `year` in [`YEARS`].
    pub xi: usize,
    /// Zero-based row index: position of `month` in [`MONTHS`].
    pub yi: usize,
    /// Maximum of all daily max readings in this month.
    pub month_max: f64,
    /// Minimum of all daily min readings in this month.
    pub month_min: f64,
    /// Daily readings ordered ascending by day of month.
    pub daily: Vec<DayTemps>,
}

/// The complete sparse grid, built once at load time and immutable after.
///
/// `cells` keeps the fixed enumeration order (years ascending, months
/// ascending within a year) used for rendering; `index` gives O(1) lookup
/// by (year, month).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    cells: Vec<MonthCell>,
    index: HashMap<(i32, u32), usize>,
}

impl Grid {
    pub fn cells(&self) -> &[MonthCell] {
        &self.cells
    }

    /// Look up the cell at a (year, month) position, if populated.
    pub fn cell(&self, year: i32, month: u32) -> Option<&MonthCell> {
        self.index.get(&(year, month)).map(|&i| &self.cells[i])
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Group readings by (year, month) and build the sparse grid.
///
/// Readings dated outside [`YEARS`] match no grid position and are
/// ignored. Empty input yields an empty grid.
pub fn build_grid(readings: &[DailyReading]) -> Grid {
    let mut groups: HashMap<(i32, u32), Vec<&DailyReading>> = HashMap::new();
    for reading in readings {
        groups
            .entry((reading.date.year(), reading.date.month()))
            .or_default()
            .push(reading);
    }

    let mut cells = Vec::new();
    let mut index = HashMap::new();
    for (xi, &year) in YEARS.iter().enumerate() {
        for (yi, &month) in MONTHS.iter().enumerate() {
            let Some(group) = groups.get_mut(&(year, month)) else {
                continue;
            };
            // Stable sort: same-day duplicates keep input order.
            group.sort_by_key(|r| r.date.day());
            let month_max = group.iter().map(|r| r.max).fold(f64::NEG_INFINITY, f64::max);
            let month_min = group.iter().map(|r| r.min).fold(f64::INFINITY, f64::min);
            let daily = group
                .iter()
                .map(|r| DayTemps {
                    max: r.max,
                    min: r.min,
                })
                .collect();
            index.insert((year, month), cells.len());
            cells.push(MonthCell {
                year,
                month,
                xi,
                yi,
                month_max,
                month_min,
                daily,
            });
        }
    }

    Grid { cells, index }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn reading(year: i32, month: u32, day: u32, max: f64, min: f64) -> DailyReading {
        DailyReading {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            max,
            min,
        }
    }

    #[test]
    fn test_empty_input_yields_empty_grid() {
        let grid = build_grid(&[]);
        assert!(grid.is_empty());
        assert!(grid.cells().is_empty());
        assert!(grid.cell(2015, 6).is_none());
    }

    #[test]
    fn test_single_reading_single_cell() {
        let grid = build_grid(&[reading(2015, 6, 15, 30.0, 18.0)]);
        assert_eq!(grid.len(), 1);
        let cell = grid.cell(2015, 6).unwrap();
        assert_eq!(cell.year, 2015);
        assert_eq!(cell.month, 6);
        assert_eq!(cell.month_max, 30.0);
        assert_eq!(cell.month_min, 18.0);
        assert_eq!(cell.daily.len(), 1);
        // 2015 is the eighth year of the decade, June the sixth month.
        assert_eq!(cell.xi, 7);
        assert_eq!(cell.yi, 5);
    }

    #[test]
    fn test_daily_sorted_chronologically_not_by_input_order() {
        let grid = build_grid(&[
            reading(2012, 3, 5, 10.0, 2.0),
            reading(2012, 3, 2, 20.0, 8.0),
        ]);
        let cell = grid.cell(2012, 3).unwrap();
        assert_eq!(cell.daily[0].max, 20.0);
        assert_eq!(cell.daily[1].max, 10.0);
    }

    #[test]
    fn test_same_day_ties_keep_input_order() {
        let grid = build_grid(&[
            reading(2012, 3, 2, 1.0, 0.0),
            reading(2012, 3, 2, 2.0, 0.0),
            reading(2012, 3, 1, 3.0, 0.0),
        ]);
        let cell = grid.cell(2012, 3).unwrap();
        assert_eq!(cell.daily[0].max, 3.0);
        assert_eq!(cell.daily[1].max, 1.0);
        assert_eq!(cell.daily[2].max, 2.0);
    }

    #[test]
    fn test_aggregates_equal_extrema_of_daily() {
        let grid = build_grid(&[
            reading(2010, 7, 1, 31.0, 20.0),
            reading(2010, 7, 2, 35.5, 22.0),
            reading(2010, 7, 3, 28.0, 17.5),
        ]);
        let cell = grid.cell(2010, 7).unwrap();
        let daily_max = cell.daily.iter().map(|d| d.max).fold(f64::NEG_INFINITY, f64::max);
        let daily_min = cell.daily.iter().map(|d| d.min).fold(f64::INFINITY, f64::min);
        assert_eq!(cell.month_max, daily_max);
        assert_eq!(cell.month_min, daily_min);
        assert_eq!(cell.month_max, 35.5);
        assert_eq!(cell.month_min, 17.5);
    }

    #[test]
    fn test_cells_unique_and_within_fixed_sets() {
        let mut readings = Vec::new();
        for day in 1..=28 {
            readings.push(reading(2009, 2, day, 12.0, 3.0));
            readings.push(reading(2016, 11, day, 15.0, 6.0));
        }
        let grid = build_grid(&readings);
        assert_eq!(grid.len(), 2);
        let mut seen = HashSet::new();
        for cell in grid.cells() {
            assert!(YEARS.contains(&cell.year));
            assert!(MONTHS.contains(&cell.month));
            assert!(seen.insert((cell.year, cell.month)));
        }
    }

    #[test]
    fn test_out_of_range_years_ignored() {
        let grid = build_grid(&[
            reading(2007, 12, 31, 10.0, 1.0),
            reading(2018, 1, 1, 10.0, 1.0),
            reading(2008, 1, 1, 10.0, 1.0),
        ]);
        assert_eq!(grid.len(), 1);
        let cell = grid.cell(2008, 1).unwrap();
        assert_eq!(cell.xi, 0);
        assert_eq!(cell.yi, 0);
    }

    #[test]
    fn test_cells_follow_enumeration_order() {
        let grid = build_grid(&[
            reading(2017, 1, 1, 5.0, 0.0),
            reading(2008, 12, 1, 5.0, 0.0),
            reading(2008, 3, 1, 5.0, 0.0),
        ]);
        let keys: Vec<(i32, u32)> = grid.cells().iter().map(|c| (c.year, c.month)).collect();
        assert_eq!(keys, vec![(2008, 3), (2008, 12), (2017, 1)]);
    }
}
