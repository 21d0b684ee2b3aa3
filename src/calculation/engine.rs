//! The per-log compensation pipeline.
//!
//! This module orchestrates rate resolution, base computation, supplements,
//! and the gross-to-net deduction step into a single pure function. The
//! pipeline computes on unrounded decimals throughout and rounds exactly
//! once, half-even to 2 decimals, on the final gross and net totals.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{CompanySettings, Computation, RateContract, WorkLog, WorkLogKind};

use super::date_range::inclusive_day_count;
use super::deductions::apply_deductions;
use super::rate_resolver::resolve_rate;
use super::supplements::calculate_supplements;

/// Rounds a monetary amount to 2 decimals using banker's rounding.
///
/// This is the single rounding point of the engine; intermediate figures
/// are never rounded.
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("123.665").unwrap();
/// assert_eq!(round_money(amount), Decimal::from_str("123.66").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Rejects a log whose kind or supplement flags require a feature the
/// company has disabled.
///
/// The input layer is expected to hide disabled toggles, but the engine
/// re-checks instead of trusting the input, closing a class of
/// data-integrity bugs.
fn check_features(log: &WorkLog, company: &CompanySettings) -> EngineResult<()> {
    let features = &company.features;

    if log.is_tutorial() && !features.tutorials {
        return Err(EngineError::FeatureDisabled {
            log_id: log.id,
            feature: "tutorials".to_string(),
        });
    }
    if log.has_coordination && !features.coordination {
        return Err(EngineError::FeatureDisabled {
            log_id: log.id,
            feature: "coordination".to_string(),
        });
    }
    if log.has_night && !features.night_shifts {
        return Err(EngineError::FeatureDisabled {
            log_id: log.id,
            feature: "night_shifts".to_string(),
        });
    }

    Ok(())
}

/// Computes the compensation for a single work log.
///
/// The pipeline:
/// 1. Validates the log's date/time fields and feature-flag preconditions.
/// 2. Resolves the effective rate for the log's user/company pair.
/// 3. Computes the gross base: worked hours x hourly rate for particular
///    logs, inclusive day count x daily rate for tutorials. A snapshotted
///    `rate_applied` on the log takes precedence over the contract rate.
/// 4. Adds night/coordination supplements.
/// 5. For gross contracts, applies the combined deduction fractions; net
///    contracts keep the gross total as take-home pay.
///
/// Callers persist `net_total` as the log's `amount`, `gross_total` as its
/// `gross_amount`, and `is_gross` as `is_gross_calculation`.
///
/// The function is pure: identical inputs always produce identical
/// outputs, and nothing is cached between calls.
///
/// # Errors
///
/// - [`EngineError::InvalidWorkLog`] for malformed date/time fields
/// - [`EngineError::FeatureDisabled`] when a flag requires a disabled
///   company feature
/// - [`EngineError::RateNotFound`] when no contract matches the pair
/// - [`EngineError::InvalidDeduction`] when combined deductions exceed 1
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::compute_amount;
/// use worklog_engine::models::{CompanySettings, RateContract, WorkLog, WorkLogKind};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let user_id = Uuid::from_u128(1);
/// let company_id = Uuid::from_u128(2);
/// let log = WorkLog {
///     id: Uuid::from_u128(3),
///     user_id,
///     company_id,
///     kind: WorkLogKind::Particular {
///         date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///         start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///         end_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
///     },
///     has_coordination: false,
///     has_night: false,
///     arrives_prior: false,
///     client: None,
///     description: None,
///     pickup_point: None,
///     rate_applied: None,
///     amount: None,
///     gross_amount: None,
///     is_gross_calculation: None,
/// };
/// let contracts = vec![RateContract {
///     user_id,
///     company_id,
///     hourly_rate: Decimal::from(20),
///     daily_rate: Decimal::from(120),
///     night_rate: Decimal::ZERO,
///     coordination_rate: Decimal::ZERO,
///     is_gross: false,
///     deduction_ss: None,
///     deduction_irpf: Decimal::ZERO,
///     deduction_extra: Decimal::ZERO,
/// }];
///
/// let result = compute_amount(&log, &contracts, &CompanySettings::default()).unwrap();
/// assert_eq!(result.net_total, Decimal::from(120)); // 6h x 20, net contract
/// ```
pub fn compute_amount(
    log: &WorkLog,
    contracts: &[RateContract],
    company: &CompanySettings,
) -> EngineResult<Computation> {
    log.validate()?;
    check_features(log, company)?;

    let rate = resolve_rate(log.user_id, log.company_id, contracts, company)?;

    let (applied_rate, quantity) = match log.kind {
        WorkLogKind::Particular { .. } => {
            let duration = log
                .duration_hours()
                .unwrap_or(Decimal::ZERO);
            (log.rate_applied.unwrap_or(rate.hourly_rate), duration)
        }
        WorkLogKind::Tutorial {
            start_date,
            end_date,
        } => {
            let days = inclusive_day_count(start_date, end_date);
            (
                log.rate_applied.unwrap_or(rate.daily_rate),
                Decimal::from(days),
            )
        }
    };

    let gross_base = applied_rate * quantity;
    let supplements = calculate_supplements(log, &rate);
    let gross_total = gross_base + supplements.total();

    let net_total = if rate.is_gross {
        apply_deductions(gross_total, &rate)?
    } else {
        gross_total
    };

    debug!(
        log_id = %log.id,
        gross = %gross_total,
        net = %net_total,
        is_gross = rate.is_gross,
        "computed work log amount"
    );

    Ok(Computation {
        gross_base,
        supplements,
        gross_total: round_money(gross_total),
        net_total: round_money(net_total),
        applied_rate,
        is_gross: rate.is_gross,
    })
}
