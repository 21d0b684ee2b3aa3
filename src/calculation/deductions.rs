//! Gross-to-net deduction pipeline.
//!
//! This module applies the combined Social Security / IRPF / extra
//! deduction fractions to a gross total. Each fraction is clamped to
//! `[0, 1]` individually; a combined fraction above 1 is rejected outright
//! rather than producing negative pay.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::rate_resolver::EffectiveRate;

/// Clamps a deduction fraction into `[0, 1]`.
fn clamp_fraction(fraction: Decimal) -> Decimal {
    fraction.clamp(Decimal::ZERO, Decimal::ONE)
}

/// Applies the gross-to-net deduction pipeline for a gross contract.
///
/// The combined deduction is `social_security + irpf + extra` with each
/// component clamped to `[0, 1]` first. The result is unrounded; the
/// engine rounds once at the end of the full pipeline.
///
/// For net contracts this function must not be called at all: the
/// configured rates already represent take-home pay.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDeduction`] when the combined fraction
/// exceeds 1, which would produce negative pay.
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::{apply_deductions, EffectiveRate};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = EffectiveRate {
///     hourly_rate: Decimal::from(20),
///     daily_rate: Decimal::from(120),
///     night_rate: Decimal::ZERO,
///     coordination_rate: Decimal::ZERO,
///     is_gross: true,
///     social_security: Decimal::from_str("0.064").unwrap(),
///     irpf: Decimal::from_str("0.02").unwrap(),
///     extra: Decimal::ZERO,
/// };
///
/// let net = apply_deductions(Decimal::from(100), &rate).unwrap();
/// assert_eq!(net, Decimal::from_str("91.600").unwrap());
/// ```
pub fn apply_deductions(gross: Decimal, rate: &EffectiveRate) -> EngineResult<Decimal> {
    let total_deduction = clamp_fraction(rate.social_security)
        + clamp_fraction(rate.irpf)
        + clamp_fraction(rate.extra);

    if total_deduction > Decimal::ONE {
        return Err(EngineError::InvalidDeduction {
            total: total_deduction,
        });
    }

    Ok(gross * (Decimal::ONE - total_deduction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rate(ss: &str, irpf: &str, extra: &str) -> EffectiveRate {
        EffectiveRate {
            hourly_rate: dec("20"),
            daily_rate: dec("120"),
            night_rate: dec("30"),
            coordination_rate: dec("10"),
            is_gross: true,
            social_security: dec(ss),
            irpf: dec(irpf),
            extra: dec(extra),
        }
    }

    /// DE-001: standard combined deduction
    #[test]
    fn test_combined_deduction() {
        let net = apply_deductions(dec("100"), &rate("0.064", "0.02", "0")).unwrap();
        assert_eq!(net, dec("91.600"));
    }

    /// DE-002: all-zero fractions leave gross untouched
    #[test]
    fn test_zero_deductions_identity() {
        let net = apply_deductions(dec("135"), &rate("0", "0", "0")).unwrap();
        assert_eq!(net, dec("135"));
    }

    /// DE-003: combined fraction above 1 is rejected
    #[test]
    fn test_overflow_rejected() {
        let result = apply_deductions(dec("100"), &rate("0.6", "0.5", "0"));
        match result.unwrap_err() {
            EngineError::InvalidDeduction { total } => assert_eq!(total, dec("1.1")),
            other => panic!("Expected InvalidDeduction, got {:?}", other),
        }
    }

    /// DE-004: combined fraction of exactly 1 nets to zero, not an error
    #[test]
    fn test_full_deduction_allowed() {
        let net = apply_deductions(dec("100"), &rate("0.5", "0.5", "0")).unwrap();
        assert_eq!(net, dec("0"));
    }

    /// DE-005: each fraction clamps individually before summing
    #[test]
    fn test_negative_fraction_clamps_to_zero() {
        let net = apply_deductions(dec("100"), &rate("-0.5", "0.1", "0")).unwrap();
        assert_eq!(net, dec("90.0"));
    }

    #[test]
    fn test_oversized_single_fraction_clamps_to_one() {
        // 1.5 clamps to 1; combined with anything else it overflows.
        let result = apply_deductions(dec("100"), &rate("1.5", "0.1", "0"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidDeduction { .. })
        ));
    }

    #[test]
    fn test_extra_deduction_participates() {
        let net = apply_deductions(dec("200"), &rate("0.05", "0.02", "0.03")).unwrap();
        assert_eq!(net, dec("180.00"));
    }
}
