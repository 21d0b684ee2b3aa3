//! Effective-rate resolution.
//!
//! This module picks the rate contract that applies to a user/company pair
//! and resolves the effective Social Security fraction, falling back to the
//! company default when the contract does not override it.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{CompanySettings, RateContract};

/// The resolved rates and deduction fractions for one user in one company.
///
/// This is a flattened snapshot of the matching [`RateContract`] with the
/// Social Security fraction already resolved against the company default.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveRate {
    /// Rate per worked hour for particular logs.
    pub hourly_rate: Decimal,
    /// Rate per calendar day for tutorial logs.
    pub daily_rate: Decimal,
    /// Flat rate per night unit.
    pub night_rate: Decimal,
    /// Flat rate per coordination unit.
    pub coordination_rate: Decimal,
    /// Whether the rates are gross (deductions apply).
    pub is_gross: bool,
    /// The effective Social Security fraction: the contract override when
    /// present (including an explicit zero), else the company default.
    pub social_security: Decimal,
    /// Income tax (IRPF) deduction fraction.
    pub irpf: Decimal,
    /// Extra deduction fraction.
    pub extra: Decimal,
}

/// Resolves the effective rate for a user within a company.
///
/// Looks up the contract matching `(user_id, company_id)` in the supplied
/// pool (one per pair is assumed unique; the first match wins) and resolves
/// the effective Social Security fraction. A contract with
/// `deduction_ss: Some(0)` keeps the explicit zero; only an absent override
/// inherits `company.social_security_deduction`.
///
/// # Errors
///
/// Returns [`EngineError::RateNotFound`] when no contract exists for the
/// pair. Write paths must treat this as fatal; read/preview paths may fall
/// back to the log's stored amount and flag the result as unverified.
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::resolve_rate;
/// use worklog_engine::models::{CompanySettings, RateContract};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let user_id = Uuid::from_u128(1);
/// let company_id = Uuid::from_u128(2);
/// let contracts = vec![RateContract {
///     user_id,
///     company_id,
///     hourly_rate: Decimal::from_str("20").unwrap(),
///     daily_rate: Decimal::from_str("120").unwrap(),
///     night_rate: Decimal::from_str("30").unwrap(),
///     coordination_rate: Decimal::from_str("10").unwrap(),
///     is_gross: true,
///     deduction_ss: None,
///     deduction_irpf: Decimal::from_str("0.02").unwrap(),
///     deduction_extra: Decimal::ZERO,
/// }];
/// let mut company = CompanySettings::default();
/// company.social_security_deduction = Decimal::from_str("0.064").unwrap();
///
/// let rate = resolve_rate(user_id, company_id, &contracts, &company).unwrap();
/// assert_eq!(rate.social_security, Decimal::from_str("0.064").unwrap());
/// ```
pub fn resolve_rate(
    user_id: Uuid,
    company_id: Uuid,
    contracts: &[RateContract],
    company: &CompanySettings,
) -> EngineResult<EffectiveRate> {
    let contract = contracts
        .iter()
        .find(|c| c.user_id == user_id && c.company_id == company_id)
        .ok_or(EngineError::RateNotFound {
            user_id,
            company_id,
        })?;

    let social_security = contract
        .deduction_ss
        .unwrap_or(company.social_security_deduction);

    Ok(EffectiveRate {
        hourly_rate: contract.hourly_rate,
        daily_rate: contract.daily_rate,
        night_rate: contract.night_rate,
        coordination_rate: contract.coordination_rate,
        is_gross: contract.is_gross,
        social_security,
        irpf: contract.deduction_irpf,
        extra: contract.deduction_extra,
    })
}
