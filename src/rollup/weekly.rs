//! Weekly income series.
//!
//! This module buckets dated income points into ISO weeks (Monday start)
//! and produces a zero-filled series spanning the observed date range, so
//! charts render quiet weeks as explicit zeroes instead of gaps.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One week's summed income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// The Monday that starts this ISO week.
    pub week_start: NaiveDate,
    /// The income summed over the week.
    pub income: Decimal,
}

/// Returns the Monday starting the ISO week containing `date`.
///
/// # Examples
///
/// ```
/// use worklog_engine::rollup::week_start;
/// use chrono::NaiveDate;
///
/// // 2024-03-07 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(week_start(thursday), NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
/// ```
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Builds the zero-filled weekly income series for a set of dated points.
///
/// Points are bucketed by the Monday of their ISO week; every week between
/// the earliest and latest observed point is present in the output, with
/// zero income for weeks that saw no activity. An empty input yields an
/// empty series.
pub fn weekly_series(points: &[(NaiveDate, Decimal)]) -> Vec<WeekBucket> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut buckets: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for (date, income) in points {
        *buckets.entry(week_start(*date)).or_insert(Decimal::ZERO) += *income;
    }

    // BTreeMap keys are sorted, so the span is first..=last.
    let first = *buckets.keys().next().expect("non-empty buckets");
    let last = *buckets.keys().next_back().expect("non-empty buckets");

    let mut series = Vec::new();
    let mut current = first;
    while current <= last {
        series.push(WeekBucket {
            week_start: current,
            income: buckets.get(&current).copied().unwrap_or(Decimal::ZERO),
        });
        match current.checked_add_days(Days::new(7)) {
            Some(next) => current = next,
            None => break,
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_week_start_monday_is_identity() {
        // 2024-03-04 is a Monday
        assert_eq!(week_start(make_date("2024-03-04")), make_date("2024-03-04"));
    }

    #[test]
    fn test_week_start_sunday_maps_to_preceding_monday() {
        // 2024-03-10 is a Sunday
        assert_eq!(week_start(make_date("2024-03-10")), make_date("2024-03-04"));
    }

    #[test]
    fn test_week_start_crosses_month_boundary() {
        // 2024-03-01 is a Friday; its week starts Monday 2024-02-26
        assert_eq!(week_start(make_date("2024-03-01")), make_date("2024-02-26"));
    }

    #[test]
    fn test_empty_points_empty_series() {
        assert!(weekly_series(&[]).is_empty());
    }

    #[test]
    fn test_points_in_same_week_sum() {
        let points = vec![
            (make_date("2024-03-04"), dec("100")),
            (make_date("2024-03-06"), dec("50")),
        ];

        let series = weekly_series(&points);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].week_start, make_date("2024-03-04"));
        assert_eq!(series[0].income, dec("150"));
    }

    #[test]
    fn test_gap_weeks_filled_with_zero() {
        let points = vec![
            (make_date("2024-03-04"), dec("100")),
            (make_date("2024-03-20"), dec("80")),
        ];

        let series = weekly_series(&points);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].week_start, make_date("2024-03-04"));
        assert_eq!(series[0].income, dec("100"));
        assert_eq!(series[1].week_start, make_date("2024-03-11"));
        assert_eq!(series[1].income, Decimal::ZERO);
        assert_eq!(series[2].week_start, make_date("2024-03-18"));
        assert_eq!(series[2].income, dec("80"));
    }

    #[test]
    fn test_series_is_chronological() {
        let points = vec![
            (make_date("2024-03-20"), dec("80")),
            (make_date("2024-03-04"), dec("100")),
            (make_date("2024-03-11"), dec("20")),
        ];

        let series = weekly_series(&points);

        let starts: Vec<NaiveDate> = series.iter().map(|b| b.week_start).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }
}
