use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One valid parsed observation: a calendar day with its recorded
/// maximum and minimum temperature in degrees Celsius.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReading {
    pub date: NaiveDate,
    pub max: f64,
    pub min: f64,
}

/// One entry of a cell's ordered daily series. The date is dropped once
/// readings are grouped into a month; position in the series carries the
/// chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayTemps {
    pub max: f64,
    pub min: f64,
}
