//! Best-effort employer-cost reconstruction.
//!
//! Given a stored work log, this module recovers what the company actually
//! paid. Net-priced records and records carrying a persisted gross total
//! reconstruct exactly; legacy gross records without one fall back to a
//! base-only approximation, tagged so dashboards can distinguish the two.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{CostBasis, CostEstimate, WorkLog, WorkLogKind};

use super::date_range::inclusive_day_count;

/// Estimates the employer's cost for a stored work log.
///
/// Resolution order:
/// 1. **Net pricing** (`is_gross_calculation` absent or false): the
///    configured rate already is the cost, so the stored `amount` is
///    returned as [`CostBasis::Exact`].
/// 2. **Gross pricing with a persisted `gross_amount`**: the write path
///    stored the pre-deduction total, so it is returned as
///    [`CostBasis::Exact`].
/// 3. **Gross pricing without one** (legacy records): only the base can be
///    reconstructed as `rate_applied x` worked hours (particular) or
///    inclusive day count (tutorial). Night/coordination supplements were
///    flattened into the deducted `amount` and cannot be recovered, so the
///    figure is tagged [`CostBasis::Approximate`]. A record with no
///    snapshotted rate degrades further to the stored `amount`.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidWorkLog`] when the log's
/// date/time fields are malformed.
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::estimate_employer_cost;
/// use worklog_engine::models::{CostBasis, WorkLog, WorkLogKind};
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
///     has_night: false,
///     arrives_prior: false,
///     client: None,
///     description: None,
///     pickup_point: None,
///     rate_applied: Some(Decimal::from(120)),
///     amount: Some(Decimal::from(549)),
///     gross_amount: None,
///     is_gross_calculation: Some(true),
/// };
///
/// let estimate = estimate_employer_cost(&log).unwrap();
/// assert_eq!(estimate.amount, Decimal::from(600)); // 5 days x 120, base only
/// assert_eq!(estimate.basis, CostBasis::Approximate);
/// ```
pub fn estimate_employer_cost(log: &WorkLog) -> EngineResult<CostEstimate> {
    log.validate()?;

    let stored_amount = log.amount.unwrap_or(Decimal::ZERO);

    if !log.is_gross_calculation.unwrap_or(false) {
        return Ok(CostEstimate {
            amount: stored_amount,
            basis: CostBasis::Exact,
        });
    }

    if let Some(gross) = log.gross_amount {
        return Ok(CostEstimate {
            amount: gross,
            basis: CostBasis::Exact,
        });
    }

    let amount = match log.rate_applied {
        Some(rate) => match log.kind {
            WorkLogKind::Particular { .. } => {
                rate * log.duration_hours().unwrap_or(Decimal::ZERO)
            }
            WorkLogKind::Tutorial {
                start_date,
                end_date,
            } => rate * Decimal::from(inclusive_day_count(start_date, end_date)),
        },
        None => stored_amount,
    };

    Ok(CostEstimate {
        amount,
        basis: CostBasis::Approximate,
    })
}
