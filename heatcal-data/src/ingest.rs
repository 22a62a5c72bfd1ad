//! Lenient CSV ingestion for daily temperature records.
//!
//! The input is a headered table with at least `date`, `max_temperature`,
//! and `min_temperature` columns; extra columns are ignored. Rows that
//! cannot be used are dropped rather than failing the whole load, but the
//! drops are counted so callers can surface them as diagnostics.

use crate::dates;
use crate::reading::DailyReading;
use csv::ReaderBuilder;
use log::{info, warn};
use serde::Deserialize;

/// One raw row of the input table. Temperatures stay as strings here so
/// numeric parse failures can be counted separately from date failures.
#[derive(Debug, Deserialize)]
struct RawRow {
    date: String,
    max_temperature: String,
    min_temperature: String,
}

/// Counts of what happened during ingestion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    /// Data rows seen (excluding the header).
    pub rows_total: usize,
    /// Rows dropped because the date failed to parse, or the row was too
    /// malformed to read its fields at all.
    pub dropped_bad_date: usize,
    /// Rows dropped because a temperature field was not a finite number.
    pub dropped_bad_value: usize,
}

impl IngestStats {
    pub fn dropped(&self) -> usize {
        self.dropped_bad_date + self.dropped_bad_value
    }
}

/// Parse a CSV body into readings, dropping and counting unusable rows.
///
/// Never fails: a completely unreadable input simply yields zero readings
/// (downstream renders the empty-grid fallback).
pub fn parse_readings(csv_text: &str) -> (Vec<DailyReading>, IngestStats) {
    let mut stats = IngestStats::default();
    let mut readings = Vec::new();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    for result in reader.deserialize::<RawRow>() {
        stats.rows_total += 1;
        let row = match result {
            Ok(row) => row,
            Err(_) => {
                stats.dropped_bad_date += 1;
                continue;
            }
        };
        let date = match dates::parse_date(&row.date) {
            Ok(date) => date,
            Err(_) => {
                stats.dropped_bad_date += 1;
                continue;
            }
        };
        let max = row.max_temperature.parse::<f64>().unwrap_or(f64::NAN);
        let min = row.min_temperature.parse::<f64>().unwrap_or(f64::NAN);
        if !max.is_finite() || !min.is_finite() {
            stats.dropped_bad_value += 1;
            continue;
        }
        readings.push(DailyReading { date, max, min });
    }

    info!(
        "ingested {} of {} rows",
        readings.len(),
        stats.rows_total
    );
    if stats.dropped() > 0 {
        warn!(
            "dropped {} rows ({} bad dates, {} bad values)",
            stats.dropped(),
            stats.dropped_bad_date,
            stats.dropped_bad_value
        );
    }

    (readings, stats)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    const STR_READINGS: &str = "\
date,max_temperature,min_temperature
2015-06-15,30,18
2015-06-16,31.5,19.2
2015-06-17,29,17.8
";

    const STR_MESSY: &str = "\
date,max_temperature,min_temperature,station
2015-06-15,30,18,downtown
not-a-date,22,11,downtown
2015-02-30,22,11,downtown
2015-06-16,N/A,19,downtown
2015-06-17,28,,downtown
2015-06-18,27.5,16.0,downtown
";

    #[test]
    fn test_parse_readings_clean_input() {
        let (readings, stats) = parse_readings(STR_READINGS);
        assert_eq!(readings.len(), 3);
        assert_eq!(stats.rows_total, 3);
        assert_eq!(stats.dropped(), 0);
        assert_eq!(
            readings[0].date,
            NaiveDate::from_ymd_opt(2015, 6, 15).unwrap()
        );
        assert_eq!(readings[1].max, 31.5);
        assert_eq!(readings[1].min, 19.2);
    }

    #[test]
    fn test_parse_readings_drops_and_counts() {
        let (readings, stats) = parse_readings(STR_MESSY);
        // Two good rows survive; extra "station" column is ignored.
        assert_eq!(readings.len(), 2);
        assert_eq!(stats.rows_total, 6);
        assert_eq!(stats.dropped_bad_date, 2);
        assert_eq!(stats.dropped_bad_value, 2);
        assert_eq!(readings[0].max, 30.0);
        assert_eq!(readings[1].min, 16.0);
    }

    #[test]
    fn test_parse_readings_empty_input() {
        let (readings, stats) = parse_readings("");
        assert!(readings.is_empty());
        assert_eq!(stats.rows_total, 0);
    }

    #[test]
    fn test_parse_readings_header_only() {
        let (readings, stats) = parse_readings("date,max_temperature,min_temperature\n");
        assert!(readings.is_empty());
        assert_eq!(stats.rows_total, 0);
    }
}
