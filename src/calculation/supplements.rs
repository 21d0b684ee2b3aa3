//! Night and coordination supplement calculation.
//!
//! This module computes the additive pay components layered on top of a
//! log's base amount. The policy differs by log kind: particular logs take
//! a single flat coordination unit, while tutorials bill coordination per
//! day in range and nights per overnight stay.

use rust_decimal::Decimal;

use crate::models::{SupplementBreakdown, WorkLog, WorkLogKind};

use super::date_range::inclusive_day_count;
use super::rate_resolver::EffectiveRate;

/// Computes the night/coordination supplements for a single work log.
///
/// Policy:
/// - **Particular**: `has_coordination` adds `coordination_rate` once, flat
///   per log regardless of duration. The night supplement does not apply to
///   particular logs; a stray `has_night` flag yields zero night units.
/// - **Tutorial**: with `days = inclusive_day_count(start, end)`,
///   `has_coordination` adds `coordination_rate x days` and `has_night`
///   bills `days - 1` night units (the nights between consecutive tutorial
///   days), plus one more when the worker arrives the evening before the
///   first day (`arrives_prior`).
///
/// Feature availability is a caller-side precondition: the engine's
/// pipeline rejects flags for disabled company features before this
/// function runs.
///
/// # Arguments
///
/// * `log` - The work log to compute supplements for
/// * `rate` - The resolved rate carrying the night/coordination unit rates
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::{EffectiveRate, calculate_supplements};
/// use worklog_engine::models::{WorkLog, WorkLogKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let log = WorkLog {
///     id: Uuid::nil(),
///     user_id: Uuid::nil(),
///     company_id: Uuid::nil(),
///     kind: WorkLogKind::Tutorial {
///         start_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
///     },
///     has_coordination: false,
///     has_night: true,
///     arrives_prior: false,
///     client: None,
///     description: None,
///     pickup_point: None,
///     rate_applied: None,
///     amount: None,
///     gross_amount: None,
///     is_gross_calculation: None,
/// };
/// let rate = EffectiveRate {
///     hourly_rate: Decimal::from(20),
///     daily_rate: Decimal::from(120),
///     night_rate: Decimal::from(30),
///     coordination_rate: Decimal::from(10),
///     is_gross: false,
///     social_security: Decimal::ZERO,
///     irpf: Decimal::ZERO,
///     extra: Decimal::ZERO,
/// };
///
/// let breakdown = calculate_supplements(&log, &rate);
/// assert_eq!(breakdown.night_units, 4); // 5 days, 4 nights between them
/// assert_eq!(breakdown.night_amount, Decimal::from(120));
/// ```
pub fn calculate_supplements(log: &WorkLog, rate: &EffectiveRate) -> SupplementBreakdown {
    match log.kind {
        WorkLogKind::Particular { .. } => {
            let coordination_amount = if log.has_coordination {
                rate.coordination_rate
            } else {
                Decimal::ZERO
            };
            SupplementBreakdown {
                night_amount: Decimal::ZERO,
                coordination_amount,
                night_units: 0,
            }
        }
        WorkLogKind::Tutorial {
            start_date,
            end_date,
        } => {
            let days = inclusive_day_count(start_date, end_date).max(0);

            let coordination_amount = if log.has_coordination {
                rate.coordination_rate * Decimal::from(days)
            } else {
                Decimal::ZERO
            };

            let night_units = if log.has_night {
                let between_days = (days - 1).max(0) as u32;
                if log.arrives_prior {
                    between_days + 1
                } else {
                    between_days
                }
            } else {
                0
            };

            SupplementBreakdown {
                night_amount: rate.night_rate * Decimal::from(night_units),
                coordination_amount,
                night_units,
            }
        }
    }
}
