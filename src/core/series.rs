//! Historical price rows and the bucketing intervals applied to them

use crate::core::error::DashboardError;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Timestamp layout used by the historical CSV files.
pub const DATE_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";
const DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRow {
    pub date: NaiveDateTime,
    pub close: f64,
    pub volume: Option<u64>,
}

impl TimeSeriesRow {
    pub fn new(date: NaiveDateTime, close: f64) -> Self {
        Self {
            date,
            close,
            volume: None,
        }
    }
}

/// Parses a `MM/DD/YYYY HH:MM:SS` timestamp. A bare `MM/DD/YYYY` is read as midnight.
pub fn parse_row_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub enum Interval {
    Day,
    Month,
    #[default]
    Year,
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Interval::Day => "Day",
                Interval::Month => "Month",
                Interval::Year => "Year",
            }
        )
    }
}

impl FromStr for Interval {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "d" => Ok(Interval::Day),
            "month" | "m" => Ok(Interval::Month),
            "year" | "y" => Ok(Interval::Year),
            _ => Err(DashboardError::InvalidInterval(s.to_string())),
        }
    }
}

impl Interval {
    /// First calendar day of the period containing `date`.
    pub fn period_start(&self, date: NaiveDateTime) -> NaiveDate {
        let day = date.date();
        match self {
            Interval::Day => day,
            // Day 1 always exists, so these never fall back.
            Interval::Month => day.with_day(1).unwrap_or(day),
            Interval::Year => day.with_ordinal(1).unwrap_or(day),
        }
    }

    pub fn all() -> [Interval; 3] {
        [Interval::Day, Interval::Month, Interval::Year]
    }
}
