//! Reporting window model.
//!
//! This module contains the [`ReportingWindow`] type that defines the
//! inclusive date range over which rollups are computed.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive calendar-date window for rollup queries.
///
/// # Example
///
/// ```
/// use worklog_engine::models::ReportingWindow;
/// use chrono::NaiveDate;
///
/// let window = ReportingWindow::month(2024, 2).unwrap();
/// assert_eq!(window.start_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(window.end_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingWindow {
    /// The first day of the window.
    pub start_date: NaiveDate,
    /// The last day of the window (inclusive).
    pub end_date: NaiveDate,
}

impl ReportingWindow {
    /// Creates a window spanning a whole calendar month.
    ///
    /// Returns `None` for an invalid year/month combination.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let end_date = next_month.pred_opt()?;
        Some(Self {
            start_date,
            end_date,
        })
    }

    /// Returns true when the given date falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates every calendar day in the window, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end_date;
        std::iter::successors(Some(self.start_date), move |d| {
            d.checked_add_days(Days::new(1)).filter(|next| *next <= end)
        })
    }

    /// The number of calendar days in the window.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Returns the `(year, month)` pair of the window's first day.
    pub fn year_month(&self) -> (i32, u32) {
        (self.start_date.year(), self.start_date.month())
    }
}
