//! Buckets price rows by calendar period and averages the close price.

use crate::core::series::{Interval, TimeSeriesRow};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// One aggregated period of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bucket {
    pub period_start: NaiveDate,
    pub mean_close: f64,
}

/// Parallel, chronologically ordered period starts and mean closes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResampledSeries {
    pub interval: Interval,
    pub period_starts: Vec<NaiveDate>,
    pub mean_closes: Vec<f64>,
}

impl ResampledSeries {
    pub fn len(&self) -> usize {
        self.period_starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.period_starts.is_empty()
    }

    pub fn buckets(&self) -> impl Iterator<Item = Bucket> + '_ {
        self.period_starts
            .iter()
            .zip(&self.mean_closes)
            .map(|(period_start, mean_close)| Bucket {
                period_start: *period_start,
                mean_close: *mean_close,
            })
    }

    /// Turns each bucket back into a row stamped at midnight of its period start.
    pub fn to_rows(&self) -> Vec<TimeSeriesRow> {
        self.buckets()
            .filter_map(|b| {
                b.period_start
                    .and_hms_opt(0, 0, 0)
                    .map(|date| TimeSeriesRow::new(date, b.mean_close))
            })
            .collect()
    }
}

/// Groups `rows` by the period each falls in and averages `close` per group.
///
/// Periods without rows are not emitted, so the output never contains gaps
/// filled with placeholder values. Input order does not matter.
pub fn resample(rows: &[TimeSeriesRow], interval: Interval) -> ResampledSeries {
    let mut groups: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = groups
            .entry(interval.period_start(row.date))
            .or_insert((0.0, 0));
        entry.0 += row.close;
        entry.1 += 1;
    }

    debug!(
        rows = rows.len(),
        buckets = groups.len(),
        %interval,
        "Resampled series"
    );

    let (period_starts, mean_closes) = groups
        .into_iter()
        .map(|(start, (sum, count))| (start, sum / count as f64))
        .unzip();

    ResampledSeries {
        interval,
        period_starts,
        mean_closes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::series::parse_row_date;

    fn row(date: &str, close: f64) -> TimeSeriesRow {
        TimeSeriesRow::new(parse_row_date(date).unwrap(), close)
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_rows() -> Vec<TimeSeriesRow> {
        vec![
            row("12/30/2022 09:15:00", 5.0),
            row("01/03/2023 09:15:00", 10.0),
            row("01/03/2023 15:30:00", 14.0),
            row("01/20/2023 09:15:00", 30.0),
            row("03/01/2023 09:15:00", 40.0),
            row("02/14/2024 09:15:00", 100.0),
        ]
    }

    #[test]
    fn test_empty_input_yields_empty_sequences() {
        for interval in Interval::all() {
            let result = resample(&[], interval);
            assert!(result.period_starts.is_empty());
            assert!(result.mean_closes.is_empty());
        }
    }

    #[test]
    fn test_year_mean_of_three_rows() {
        let rows = vec![
            row("01/01/2023", 10.0),
            row("02/01/2023", 20.0),
            row("03/01/2023", 30.0),
        ];
        let result = resample(&rows, Interval::Year);
        assert_eq!(result.period_starts, vec![ymd(2023, 1, 1)]);
        assert_eq!(result.mean_closes, vec![20.0]);
    }

    #[test]
    fn test_day_buckets_average_intraday_rows() {
        let result = resample(&sample_rows(), Interval::Day);
        assert_eq!(result.len(), 5);
        assert_eq!(result.period_starts[1], ymd(2023, 1, 3));
        assert_eq!(result.mean_closes[1], 12.0);
    }

    #[test]
    fn test_month_buckets_skip_empty_months() {
        let result = resample(&sample_rows(), Interval::Month);
        assert_eq!(
            result.period_starts,
            vec![
                ymd(2022, 12, 1),
                ymd(2023, 1, 1),
                ymd(2023, 3, 1),
                ymd(2024, 2, 1)
            ]
        );
        assert_eq!(result.mean_closes[1], (10.0 + 14.0 + 30.0) / 3.0);
    }

    #[test]
    fn test_output_is_ordered_for_unordered_input() {
        let mut rows = sample_rows();
        rows.reverse();
        for interval in Interval::all() {
            let result = resample(&rows, interval);
            assert_eq!(result.period_starts.len(), result.mean_closes.len());
            assert!(
                result.period_starts.windows(2).all(|w| w[0] < w[1]),
                "{interval} buckets are not strictly increasing"
            );
        }
    }

    #[test]
    fn test_year_resample_is_idempotent() {
        let once = resample(&sample_rows(), Interval::Year);
        let twice = resample(&once.to_rows(), Interval::Year);
        assert_eq!(once, twice);
    }
}
