//! Calendar date-range expansion and day classification.
//!
//! This module provides the calendar arithmetic the rest of the engine
//! relies on: inclusive day counting for tutorial ranges, range expansion,
//! and the tutorial/particular/free classification of every day in a
//! reporting window. All of it is whole-calendar-day arithmetic
//! (midnight-to-midnight); there is deliberately no millisecond subtraction
//! anywhere, which would drift across daylight-saving transitions.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{ReportingWindow, WorkLog, WorkLogKind};

/// How a calendar day is spent, for dashboards and reports.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::DayClass;
///
/// let class = DayClass::Tutorial;
/// assert_eq!(format!("{}", class), "Tutorial");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// The day falls inside a tutorial's date range.
    Tutorial,
    /// The day has at least one particular log and no tutorial.
    Particular,
    /// No logged activity.
    Free,
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClass::Tutorial => write!(f, "Tutorial"),
            DayClass::Particular => write!(f, "Particular"),
            DayClass::Free => write!(f, "Free"),
        }
    }
}

/// Counts the calendar days in an inclusive date range.
///
/// `inclusive_day_count(d, d)` is 1. The count is derived from whole
/// calendar-day subtraction, never from elapsed-millisecond division.
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::inclusive_day_count;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(inclusive_day_count(start, end), 5);
/// assert_eq!(inclusive_day_count(start, start), 1);
/// ```
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Expands an inclusive date range into every calendar day it covers.
///
/// Returns an empty vector when `end` is before `start`.
pub fn expand_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.checked_add_days(Days::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

/// Classifies every day of a reporting window as tutorial, particular, or
/// free.
///
/// Builds the set of dates covered by tutorial ranges and the set of dates
/// carrying particular logs, then walks the window day by day. A day inside
/// both sets classifies as [`DayClass::Tutorial`]: tutorials are treated as
/// blocking full-day commitments.
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::{classify_days, DayClass};
/// use worklog_engine::models::ReportingWindow;
/// use chrono::NaiveDate;
///
/// let window = ReportingWindow::month(2024, 1).unwrap();
/// let classes = classify_days(&window, &[]);
/// assert_eq!(classes.len(), 31);
/// assert!(classes.values().all(|c| *c == DayClass::Free));
/// ```
pub fn classify_days(
    window: &ReportingWindow,
    logs: &[WorkLog],
) -> BTreeMap<NaiveDate, DayClass> {
    let mut tutorial_dates: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut particular_dates: BTreeSet<NaiveDate> = BTreeSet::new();

    for log in logs {
        match log.kind {
            WorkLogKind::Tutorial {
                start_date,
                end_date,
            } => {
                tutorial_dates.extend(expand_days(start_date, end_date));
            }
            WorkLogKind::Particular { date, .. } => {
                particular_dates.insert(date);
            }
        }
    }

    window
        .days()
        .map(|day| {
            let class = if tutorial_dates.contains(&day) {
                DayClass::Tutorial
            } else if particular_dates.contains(&day) {
                DayClass::Particular
            } else {
                DayClass::Free
            };
            (day, class)
        })
        .collect()
}
