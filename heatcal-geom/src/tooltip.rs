//! Hover tooltip text.

use heatcal_data::grid::MonthCell;

/// Label shown when hovering a cell: the month (zero-padded) and both
/// aggregates, read from current cell data.
pub fn tooltip_label(cell: &MonthCell) -> String {
    format!(
        "Date: {}-{:02}, max: {} min: {}",
        cell.year, cell.month, cell.month_max, cell.month_min
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use heatcal_data::grid::build_grid;
    use heatcal_data::reading::DailyReading;

    #[test]
    fn test_label_zero_pads_month_and_drops_float_noise() {
        let readings = [
            DailyReading {
                date: NaiveDate::from_ymd_opt(2015, 6, 15).unwrap(),
                max: 30.0,
                min: 18.5,
            },
        ];
        let grid = build_grid(&readings);
        let cell = grid.cell(2015, 6).unwrap();
        // Whole-number aggregates print without a trailing ".0".
        assert_eq!(tooltip_label(cell), "Date: 2015-06, max: 30 min: 18.5");
    }
}
