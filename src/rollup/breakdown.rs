//! Per-user and per-company breakdowns.
//!
//! This module groups a collection of work logs by user or by company,
//! producing the count/hours/amount/days statistics the company report
//! tables render.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{expand_days, inclusive_day_count};
use crate::models::{WorkLog, WorkLogKind};

use super::aggregate::TUTORIAL_HOURS_PER_DAY;

/// Aggregated statistics for one group (a user or a company).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    /// The number of logs in the group.
    pub count: usize,
    /// Measured particular hours plus the tutorial per-day proxy.
    pub total_hours: Decimal,
    /// Summed stored amounts.
    pub total_amount: Decimal,
    /// Distinct calendar dates touched. Tutorials contribute every day in
    /// their range; overlapping logs on the same day count once.
    pub total_days: usize,
}

#[derive(Default)]
struct GroupBuilder {
    count: usize,
    total_hours: Decimal,
    total_amount: Decimal,
    dates: BTreeSet<NaiveDate>,
}

impl GroupBuilder {
    fn add(&mut self, log: &WorkLog) {
        self.count += 1;
        self.total_amount += log.amount.unwrap_or(Decimal::ZERO);

        match log.kind {
            WorkLogKind::Particular { date, .. } => {
                self.total_hours += log.duration_hours().unwrap_or(Decimal::ZERO);
                self.dates.insert(date);
            }
            WorkLogKind::Tutorial {
                start_date,
                end_date,
            } => {
                let days = inclusive_day_count(start_date, end_date).max(0);
                self.total_hours += TUTORIAL_HOURS_PER_DAY * Decimal::from(days);
                self.dates.extend(expand_days(start_date, end_date));
            }
        }
    }

    fn finish(self) -> GroupStats {
        GroupStats {
            count: self.count,
            total_hours: self.total_hours,
            total_amount: self.total_amount,
            total_days: self.dates.len(),
        }
    }
}

fn group_by(logs: &[WorkLog], key: impl Fn(&WorkLog) -> Uuid) -> BTreeMap<Uuid, GroupStats> {
    let mut builders: BTreeMap<Uuid, GroupBuilder> = BTreeMap::new();
    for log in logs {
        builders.entry(key(log)).or_default().add(log);
    }
    builders
        .into_iter()
        .map(|(id, builder)| (id, builder.finish()))
        .collect()
}

/// Groups logs by user, producing per-user statistics.
///
/// # Examples
///
/// ```
/// use worklog_engine::rollup::by_user;
///
/// let breakdown = by_user(&[]);
/// assert!(breakdown.is_empty());
/// ```
pub fn by_user(logs: &[WorkLog]) -> BTreeMap<Uuid, GroupStats> {
    group_by(logs, |log| log.user_id)
}

/// Groups logs by company, producing per-company statistics.
pub fn by_company(logs: &[WorkLog]) -> BTreeMap<Uuid, GroupStats> {
    group_by(logs, |log| log.company_id)
}
