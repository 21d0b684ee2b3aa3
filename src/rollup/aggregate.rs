//! Windowed rollup of work log collections.
//!
//! This module folds a collection of work logs into the income, hours, day
//! classification, and weekly series figures a dashboard renders for one
//! reporting window. Income can come from stored snapshots or be recomputed
//! as-of the supplied contracts, depending on the screen.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{DayClass, classify_days, compute_amount};
use crate::error::{EngineError, EngineResult};
use crate::models::{CompanySettings, RateContract, ReportingWindow, WorkLog, WorkLogKind};

use super::weekly::{WeekBucket, weekly_series};

/// Hours credited per tutorial day in hour rollups.
///
/// This is a reporting convention, not a measured duration: tutorials are
/// billed per day, and statistics credit a fixed six hours for each day in
/// range.
pub const TUTORIAL_HOURS_PER_DAY: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Where a rollup's income figures come from.
#[derive(Debug, Clone, Copy)]
pub enum IncomeMode<'a> {
    /// Use each log's stored `amount` snapshot.
    Stored,
    /// Recompute each log's net amount against the supplied contracts.
    ///
    /// Logs whose user/company pair has no contract fall back to their
    /// stored snapshot and are counted in [`Rollup::unverified_count`].
    Recomputed(&'a [RateContract]),
}

/// Day-classification counts over a reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCounts {
    /// Days inside a tutorial range.
    pub tutorial_days: usize,
    /// Days with particular activity only.
    pub particular_days: usize,
    /// Days with no logged activity.
    pub free_days: usize,
}

/// The aggregated statistics for one reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rollup {
    /// Summed income over the supplied logs.
    pub total_income: Decimal,
    /// Measured hours from particular logs.
    pub particular_hours: Decimal,
    /// Proxy hours from tutorials ([`TUTORIAL_HOURS_PER_DAY`] per day).
    pub tutorial_hours: Decimal,
    /// `particular_hours + tutorial_hours`.
    pub total_hours: Decimal,
    /// The number of logs aggregated.
    pub log_count: usize,
    /// Logs whose income fell back to the stored snapshot because no
    /// contract matched during recomputation.
    pub unverified_count: usize,
    /// Classification of every day in the window.
    pub day_classes: BTreeMap<NaiveDate, DayClass>,
    /// Counts per day class over the window.
    pub day_counts: DayCounts,
    /// Zero-filled Monday-start weekly income series over the observed
    /// anchor-date span.
    pub weekly_income: Vec<WeekBucket>,
}

/// Resolves one log's income figure under the given mode.
///
/// Returns the amount and whether it had to fall back to the stored
/// snapshot on a missing contract.
fn resolve_income(
    log: &WorkLog,
    company: &CompanySettings,
    mode: IncomeMode<'_>,
) -> EngineResult<(Decimal, bool)> {
    let stored = log.amount.unwrap_or(Decimal::ZERO);

    match mode {
        IncomeMode::Stored => Ok((stored, false)),
        IncomeMode::Recomputed(contracts) => match compute_amount(log, contracts, company) {
            Ok(computation) => Ok((computation.net_total, false)),
            // Read path: a missing contract degrades to the stored
            // snapshot instead of failing the whole rollup.
            Err(EngineError::RateNotFound { .. }) => Ok((stored, true)),
            Err(other) => Err(other),
        },
    }
}

/// The hour contribution of one log.
fn log_hours(log: &WorkLog) -> Decimal {
    match log.kind {
        WorkLogKind::Particular { .. } => log.duration_hours().unwrap_or(Decimal::ZERO),
        WorkLogKind::Tutorial {
            start_date,
            end_date,
        } => {
            let days = crate::calculation::inclusive_day_count(start_date, end_date).max(0);
            TUTORIAL_HOURS_PER_DAY * Decimal::from(days)
        }
    }
}

/// Aggregates a collection of work logs into a [`Rollup`].
///
/// The supplied logs are taken as the window's collection; the window
/// itself drives day classification. Aggregation is associative over the
/// additive fields (income, hours, counts): folding two batches separately
/// and summing gives the same figures as folding their concatenation.
///
/// # Errors
///
/// Propagates [`EngineError::InvalidWorkLog`] for malformed logs, and any
/// recomputation failure other than a missing contract (which degrades to
/// the stored snapshot, see [`IncomeMode::Recomputed`]).
///
/// # Examples
///
/// ```
/// use worklog_engine::models::{CompanySettings, ReportingWindow};
/// use worklog_engine::rollup::{IncomeMode, aggregate};
///
/// let window = ReportingWindow::month(2024, 3).unwrap();
/// let rollup = aggregate(&[], &window, &CompanySettings::default(), IncomeMode::Stored).unwrap();
/// assert_eq!(rollup.log_count, 0);
/// assert_eq!(rollup.day_counts.free_days, 31);
/// ```
pub fn aggregate(
    logs: &[WorkLog],
    window: &ReportingWindow,
    company: &CompanySettings,
    mode: IncomeMode<'_>,
) -> EngineResult<Rollup> {
    let mut total_income = Decimal::ZERO;
    let mut particular_hours = Decimal::ZERO;
    let mut tutorial_hours = Decimal::ZERO;
    let mut unverified_count = 0;
    let mut income_points = Vec::with_capacity(logs.len());

    for log in logs {
        log.validate()?;

        let (income, unverified) = resolve_income(log, company, mode)?;
        if unverified {
            unverified_count += 1;
        }
        total_income += income;
        income_points.push((log.anchor_date(), income));

        match log.kind {
            WorkLogKind::Particular { .. } => particular_hours += log_hours(log),
            WorkLogKind::Tutorial { .. } => tutorial_hours += log_hours(log),
        }
    }

    let day_classes = classify_days(window, logs);
    let day_counts = DayCounts {
        tutorial_days: day_classes
            .values()
            .filter(|c| **c == DayClass::Tutorial)
            .count(),
        particular_days: day_classes
            .values()
            .filter(|c| **c == DayClass::Particular)
            .count(),
        free_days: day_classes
            .values()
            .filter(|c| **c == DayClass::Free)
            .count(),
    };

    debug!(
        log_count = logs.len(),
        unverified_count,
        income = %total_income,
        "aggregated reporting window"
    );

    Ok(Rollup {
        total_income,
        particular_hours,
        tutorial_hours,
        total_hours: particular_hours + tutorial_hours,
        log_count: logs.len(),
        unverified_count,
        day_classes,
        day_counts,
        weekly_income: weekly_series(&income_points),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use proptest::prelude::*;
    use std::str::FromStr;
    use uuid::Uuid;

    const USER: u128 = 1;
    const COMPANY: u128 = 2;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn particular(date: &str, hours: u32, amount: &str) -> WorkLog {
        WorkLog {
            id: Uuid::from_u128(100),
            user_id: Uuid::from_u128(USER),
            company_id: Uuid::from_u128(COMPANY),
            kind: WorkLogKind::Particular {
                date: make_date(date),
                start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(8 + hours, 0, 0).unwrap(),
            },
            has_coordination: false,
            has_night: false,
            arrives_prior: false,
            client: None,
            description: None,
            pickup_point: None,
            rate_applied: None,
            amount: Some(dec(amount)),
            gross_amount: None,
            is_gross_calculation: Some(false),
        }
    }

    fn tutorial(start: &str, end: &str, amount: &str) -> WorkLog {
        WorkLog {
            kind: WorkLogKind::Tutorial {
                start_date: make_date(start),
                end_date: make_date(end),
            },
            ..particular("2024-03-01", 6, amount)
        }
    }

    fn contract() -> RateContract {
        RateContract {
            user_id: Uuid::from_u128(USER),
            company_id: Uuid::from_u128(COMPANY),
            hourly_rate: dec("20"),
            daily_rate: dec("120"),
            night_rate: dec("30"),
            coordination_rate: dec("10"),
            is_gross: false,
            deduction_ss: None,
            deduction_irpf: Decimal::ZERO,
            deduction_extra: Decimal::ZERO,
        }
    }

    fn march() -> ReportingWindow {
        ReportingWindow::month(2024, 3).unwrap()
    }

    /// AG-001: stored income sums across logs
    #[test]
    fn test_stored_income_sums() {
        let logs = vec![
            particular("2024-03-04", 6, "120"),
            tutorial("2024-03-10", "2024-03-12", "360"),
        ];

        let rollup = aggregate(&logs, &march(), &CompanySettings::default(), IncomeMode::Stored)
            .unwrap();

        assert_eq!(rollup.total_income, dec("480"));
        assert_eq!(rollup.log_count, 2);
        assert_eq!(rollup.unverified_count, 0);
    }

    /// AG-002: tutorial hours use the fixed six-hour proxy
    #[test]
    fn test_tutorial_hours_proxy() {
        let logs = vec![
            particular("2024-03-04", 6, "120"),
            tutorial("2024-03-10", "2024-03-12", "360"),
        ];

        let rollup = aggregate(&logs, &march(), &CompanySettings::default(), IncomeMode::Stored)
            .unwrap();

        assert_eq!(rollup.particular_hours, dec("6"));
        assert_eq!(rollup.tutorial_hours, dec("18")); // 3 days x 6
        assert_eq!(rollup.total_hours, dec("24"));
    }

    /// AG-003: day classification and counts cover the whole window
    #[test]
    fn test_day_counts_cover_window() {
        let logs = vec![
            particular("2024-03-04", 6, "120"),
            tutorial("2024-03-10", "2024-03-12", "360"),
        ];

        let rollup = aggregate(&logs, &march(), &CompanySettings::default(), IncomeMode::Stored)
            .unwrap();

        assert_eq!(rollup.day_counts.tutorial_days, 3);
        assert_eq!(rollup.day_counts.particular_days, 1);
        assert_eq!(rollup.day_counts.free_days, 27);
        assert_eq!(
            rollup.day_counts.tutorial_days
                + rollup.day_counts.particular_days
                + rollup.day_counts.free_days,
            31
        );
    }

    /// AG-004: recomputed income uses as-of contract rates
    #[test]
    fn test_recomputed_income() {
        // Stored snapshot says 999, but the contract computes 6h x 20 = 120.
        let logs = vec![particular("2024-03-04", 6, "999")];
        let contracts = vec![contract()];

        let rollup = aggregate(
            &logs,
            &march(),
            &CompanySettings::default(),
            IncomeMode::Recomputed(&contracts),
        )
        .unwrap();

        assert_eq!(rollup.total_income, dec("120.00"));
        assert_eq!(rollup.unverified_count, 0);
    }

    /// AG-005: missing contract degrades to the snapshot and is counted
    #[test]
    fn test_recomputed_missing_contract_falls_back() {
        let logs = vec![particular("2024-03-04", 6, "120")];

        let rollup = aggregate(
            &logs,
            &march(),
            &CompanySettings::default(),
            IncomeMode::Recomputed(&[]),
        )
        .unwrap();

        assert_eq!(rollup.total_income, dec("120"));
        assert_eq!(rollup.unverified_count, 1);
    }

    #[test]
    fn test_weekly_series_buckets_by_anchor_monday() {
        let logs = vec![
            particular("2024-03-04", 6, "100"), // Monday
            particular("2024-03-06", 4, "50"),  // same week
            particular("2024-03-20", 2, "80"),  // two weeks later
        ];

        let rollup = aggregate(&logs, &march(), &CompanySettings::default(), IncomeMode::Stored)
            .unwrap();

        assert_eq!(rollup.weekly_income.len(), 3);
        assert_eq!(rollup.weekly_income[0].income, dec("150"));
        assert_eq!(rollup.weekly_income[1].income, Decimal::ZERO);
        assert_eq!(rollup.weekly_income[2].income, dec("80"));
    }

    #[test]
    fn test_malformed_log_fails_the_rollup() {
        let logs = vec![tutorial("2024-03-12", "2024-03-10", "360")];

        let result = aggregate(&logs, &march(), &CompanySettings::default(), IncomeMode::Stored);

        assert!(matches!(result, Err(EngineError::InvalidWorkLog { .. })));
    }

    #[test]
    fn test_missing_amount_counts_as_zero_income() {
        let mut log = particular("2024-03-04", 6, "120");
        log.amount = None;

        let rollup =
            aggregate(&[log], &march(), &CompanySettings::default(), IncomeMode::Stored).unwrap();

        assert_eq!(rollup.total_income, Decimal::ZERO);
    }

    #[test]
    fn test_tutorial_hours_constant_value() {
        assert_eq!(TUTORIAL_HOURS_PER_DAY, dec("6"));
    }

    proptest! {
        /// Additive fields are associative: folding two batches separately
        /// and summing matches folding the concatenation.
        #[test]
        fn prop_additive_fields_associative(
            split in 0usize..=6,
            amounts in proptest::collection::vec(0u32..5000, 6)
        ) {
            let days = ["2024-03-04", "2024-03-08", "2024-03-11",
                        "2024-03-15", "2024-03-20", "2024-03-27"];
            let logs: Vec<WorkLog> = amounts
                .iter()
                .zip(days.iter())
                .map(|(cents, day)| {
                    particular(day, 4, &format!("{}.{:02}", cents / 100, cents % 100))
                })
                .collect();

            let window = march();
            let company = CompanySettings::default();
            let (a, b) = logs.split_at(split.min(logs.len()));

            let whole = aggregate(&logs, &window, &company, IncomeMode::Stored).unwrap();
            let left = aggregate(a, &window, &company, IncomeMode::Stored).unwrap();
            let right = aggregate(b, &window, &company, IncomeMode::Stored).unwrap();

            prop_assert_eq!(whole.total_income, left.total_income + right.total_income);
            prop_assert_eq!(whole.total_hours, left.total_hours + right.total_hours);
            prop_assert_eq!(whole.particular_hours, left.particular_hours + right.particular_hours);
            prop_assert_eq!(whole.tutorial_hours, left.tutorial_hours + right.tutorial_hours);
            prop_assert_eq!(whole.log_count, left.log_count + right.log_count);
        }
    }
}
