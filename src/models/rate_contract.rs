//! Rate contract model.
//!
//! This module defines the [`RateContract`] struct describing the agreed
//! rates and deductions between one user and one company.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The agreed rates for a user within a company.
///
/// One contract exists per user per company. Rates are non-negative
/// decimals; deduction fields are fractions in `[0, 1]` (the UI shows them
/// as percentages). `deduction_ss` is deliberately optional: `None` inherits
/// the company default, while an explicit `Some(0)` overrides it to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateContract {
    /// The user this contract belongs to.
    pub user_id: Uuid,
    /// The company this contract belongs to.
    pub company_id: Uuid,
    /// Rate per worked hour for particular logs.
    pub hourly_rate: Decimal,
    /// Rate per calendar day for tutorial logs.
    pub daily_rate: Decimal,
    /// Flat rate per night unit.
    #[serde(default)]
    pub night_rate: Decimal,
    /// Flat rate per coordination unit.
    #[serde(default)]
    pub coordination_rate: Decimal,
    /// Whether the configured rates are gross (deductions apply) or already
    /// represent take-home pay.
    #[serde(default = "default_is_gross")]
    pub is_gross: bool,
    /// Social Security deduction fraction. `None` inherits the company
    /// default; `Some(0)` is an explicit zero override.
    #[serde(default)]
    pub deduction_ss: Option<Decimal>,
    /// Income tax (IRPF) deduction fraction.
    #[serde(default)]
    pub deduction_irpf: Decimal,
    /// Any extra deduction fraction.
    #[serde(default)]
    pub deduction_extra: Decimal,
}

fn default_is_gross() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_full_contract() {
        let json = r#"{
            "user_id": "00000000-0000-0000-0000-00000000000a",
            "company_id": "00000000-0000-0000-0000-000000000014",
            "hourly_rate": "20.00",
            "daily_rate": "120.00",
            "night_rate": "30.00",
            "coordination_rate": "10.00",
            "is_gross": true,
            "deduction_ss": "0.064",
            "deduction_irpf": "0.02",
            "deduction_extra": "0"
        }"#;

        let contract: RateContract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.hourly_rate, dec("20.00"));
        assert_eq!(contract.daily_rate, dec("120.00"));
        assert_eq!(contract.deduction_ss, Some(dec("0.064")));
        assert_eq!(contract.deduction_irpf, dec("0.02"));
        assert!(contract.is_gross);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{
            "user_id": "00000000-0000-0000-0000-00000000000a",
            "company_id": "00000000-0000-0000-0000-000000000014",
            "hourly_rate": "18.50",
            "daily_rate": "0"
        }"#;

        let contract: RateContract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.night_rate, Decimal::ZERO);
        assert_eq!(contract.coordination_rate, Decimal::ZERO);
        assert!(contract.is_gross);
        assert_eq!(contract.deduction_ss, None);
        assert_eq!(contract.deduction_irpf, Decimal::ZERO);
        assert_eq!(contract.deduction_extra, Decimal::ZERO);
    }

    #[test]
    fn test_explicit_zero_ss_survives_round_trip() {
        let json = r#"{
            "user_id": "00000000-0000-0000-0000-00000000000a",
            "company_id": "00000000-0000-0000-0000-000000000014",
            "hourly_rate": "18.50",
            "daily_rate": "0",
            "deduction_ss": "0"
        }"#;

        let contract: RateContract = serde_json::from_str(json).unwrap();
        // Explicit zero must stay distinguishable from "inherit default".
        assert_eq!(contract.deduction_ss, Some(Decimal::ZERO));

        let round_tripped: RateContract =
            serde_json::from_str(&serde_json::to_string(&contract).unwrap()).unwrap();
        assert_eq!(round_tripped.deduction_ss, Some(Decimal::ZERO));
    }
}
