//! Per-month summaries for the report renderers.
//!
//! This module groups work logs by `(year, month)` and by day within the
//! month, producing exactly the data the out-of-scope text/PDF exports
//! format: one line per active day ("day N - X hours", or the tutorial's
//! label) with its night/coordination markers, plus monthly totals for
//! hours, tutorial days, and distinct night/coordination dates.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::expand_days;
use crate::models::{WorkLog, WorkLogKind};

/// A calendar month key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    /// The calendar year.
    pub year: i32,
    /// The month, 1 through 12.
    pub month: u32,
}

impl MonthKey {
    /// The month containing the given date.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// One day's particular activity within a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticularDay {
    /// Hours worked that day, summed over its particular logs.
    pub hours: Decimal,
    /// Whether any of the day's logs carried the night flag.
    pub has_night: bool,
    /// Whether any of the day's logs carried the coordination flag.
    pub has_coordination: bool,
}

/// One tutorial day within a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialDay {
    /// Display label, from the tutorial's client or description.
    pub label: String,
    /// Whether a night is billed after this day. The final day of a
    /// tutorial carries no night.
    pub has_night: bool,
    /// Whether the coordination flag applies.
    pub has_coordination: bool,
}

/// The per-month aggregate consumed by the monthly report formatters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Income from logs anchored in this month.
    pub income: Decimal,
    /// Particular activity by day.
    pub particular_days: BTreeMap<NaiveDate, ParticularDay>,
    /// Tutorial coverage by day.
    pub tutorial_days: BTreeMap<NaiveDate, TutorialDay>,
    /// Summed particular hours for the month.
    pub total_hours: Decimal,
    /// The number of tutorial days in the month.
    pub tutorial_day_count: usize,
    /// Distinct dates with a billed or flagged night.
    pub night_day_count: usize,
    /// Distinct dates with the coordination flag.
    pub coordination_day_count: usize,
}

#[derive(Default)]
struct MonthBuilder {
    income: Decimal,
    particular_days: BTreeMap<NaiveDate, ParticularDay>,
    tutorial_days: BTreeMap<NaiveDate, TutorialDay>,
    total_hours: Decimal,
    night_dates: BTreeSet<NaiveDate>,
    coordination_dates: BTreeSet<NaiveDate>,
}

impl MonthBuilder {
    fn finish(self) -> MonthlySummary {
        MonthlySummary {
            income: self.income,
            total_hours: self.total_hours,
            tutorial_day_count: self.tutorial_days.len(),
            night_day_count: self.night_dates.len(),
            coordination_day_count: self.coordination_dates.len(),
            particular_days: self.particular_days,
            tutorial_days: self.tutorial_days,
        }
    }
}

/// The display label for a tutorial day.
fn tutorial_label(log: &WorkLog) -> String {
    log.client
        .as_deref()
        .or(log.description.as_deref())
        .unwrap_or("Tutorial")
        .to_string()
}

/// Groups work logs into per-month summaries.
///
/// Income is attributed to the month of each log's anchor date. A tutorial
/// spanning a month boundary contributes its days to each month they fall
/// in, while its income stays with the anchor month.
///
/// # Examples
///
/// ```
/// use worklog_engine::rollup::monthly_summaries;
///
/// let summaries = monthly_summaries(&[]);
/// assert!(summaries.is_empty());
/// ```
pub fn monthly_summaries(logs: &[WorkLog]) -> BTreeMap<MonthKey, MonthlySummary> {
    let mut builders: BTreeMap<MonthKey, MonthBuilder> = BTreeMap::new();

    for log in logs {
        let anchor_month = MonthKey::of(log.anchor_date());
        builders.entry(anchor_month).or_default().income +=
            log.amount.unwrap_or(Decimal::ZERO);

        match log.kind {
            WorkLogKind::Particular { date, .. } => {
                let builder = builders.entry(MonthKey::of(date)).or_default();
                let hours = log.duration_hours().unwrap_or(Decimal::ZERO);
                builder.total_hours += hours;

                let day = builder.particular_days.entry(date).or_insert(ParticularDay {
                    hours: Decimal::ZERO,
                    has_night: false,
                    has_coordination: false,
                });
                day.hours += hours;
                day.has_night |= log.has_night;
                day.has_coordination |= log.has_coordination;

                if log.has_night {
                    builder.night_dates.insert(date);
                }
                if log.has_coordination {
                    builder.coordination_dates.insert(date);
                }
            }
            WorkLogKind::Tutorial {
                start_date,
                end_date,
            } => {
                let days = expand_days(start_date, end_date);
                for (index, date) in days.iter().enumerate() {
                    let is_last_day = index == days.len() - 1;
                    let builder = builders.entry(MonthKey::of(*date)).or_default();

                    builder.tutorial_days.insert(
                        *date,
                        TutorialDay {
                            label: tutorial_label(log),
                            has_night: log.has_night && !is_last_day,
                            has_coordination: log.has_coordination,
                        },
                    );

                    if log.has_night && !is_last_day {
                        builder.night_dates.insert(*date);
                    }
                    if log.has_coordination {
                        builder.coordination_dates.insert(*date);
                    }
                }
            }
        }
    }

    builders
        .into_iter()
        .map(|(key, builder)| (key, builder.finish()))
        .collect()
}
