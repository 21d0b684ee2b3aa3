//! Computation result models.
//!
//! This module contains the output types of the compensation pipeline: the
//! per-log [`Computation`] with its [`SupplementBreakdown`], and the
//! [`CostEstimate`] returned by employer-cost reconstruction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The night and coordination add-ons computed for a single work log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementBreakdown {
    /// Total night supplement (`night_rate x night_units`).
    pub night_amount: Decimal,
    /// Total coordination supplement.
    pub coordination_amount: Decimal,
    /// The number of billed night units.
    pub night_units: u32,
}

impl SupplementBreakdown {
    /// A breakdown with no supplements.
    pub fn zero() -> Self {
        Self {
            night_amount: Decimal::ZERO,
            coordination_amount: Decimal::ZERO,
            night_units: 0,
        }
    }

    /// The combined supplement amount.
    pub fn total(&self) -> Decimal {
        self.night_amount + self.coordination_amount
    }
}

/// The complete result of computing a single work log's compensation.
///
/// Callers persist `net_total` as the log's `amount`, `gross_total` as its
/// `gross_amount`, and `is_gross` as its `is_gross_calculation` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computation {
    /// Rate x quantity before supplements (unrounded).
    pub gross_base: Decimal,
    /// The night/coordination add-ons (unrounded).
    pub supplements: SupplementBreakdown,
    /// Base plus supplements, rounded to 2 decimals (half-even).
    pub gross_total: Decimal,
    /// The take-home amount, rounded to 2 decimals (half-even). Equals
    /// `gross_total` for net contracts.
    pub net_total: Decimal,
    /// The base rate that was applied (hourly or daily depending on the
    /// log kind), for snapshotting onto the stored record.
    pub applied_rate: Decimal,
    /// Whether the deduction pipeline ran (gross contract).
    pub is_gross: bool,
}

/// How an employer-cost figure was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostBasis {
    /// Reconstructed from fully persisted figures.
    Exact,
    /// Base-only reconstruction; supplement amounts could not be recovered
    /// from the stored record.
    Approximate,
}

/// A best-effort employer cost figure for a stored work log.
///
/// Downstream dashboards use `basis` to visually distinguish exact from
/// estimated cost figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// The estimated employer cost.
    pub amount: Decimal,
    /// Whether the figure is exact or approximate.
    pub basis: CostBasis,
}

impl CostEstimate {
    /// Returns true when the figure is only approximate.
    pub fn is_approximate(&self) -> bool {
        self.basis == CostBasis::Approximate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_supplement_breakdown_total() {
        let breakdown = SupplementBreakdown {
            night_amount: dec("120"),
            coordination_amount: dec("50"),
            night_units: 4,
        };
        assert_eq!(breakdown.total(), dec("170"));
    }

    #[test]
    fn test_supplement_breakdown_zero() {
        let breakdown = SupplementBreakdown::zero();
        assert_eq!(breakdown.total(), Decimal::ZERO);
        assert_eq!(breakdown.night_units, 0);
    }

    #[test]
    fn test_cost_estimate_is_approximate() {
        let exact = CostEstimate {
            amount: dec("600"),
            basis: CostBasis::Exact,
        };
        let approx = CostEstimate {
            amount: dec("480"),
            basis: CostBasis::Approximate,
        };
        assert!(!exact.is_approximate());
        assert!(approx.is_approximate());
    }

    #[test]
    fn test_cost_basis_serialization() {
        assert_eq!(serde_json::to_string(&CostBasis::Exact).unwrap(), "\"exact\"");
        assert_eq!(
            serde_json::to_string(&CostBasis::Approximate).unwrap(),
            "\"approximate\""
        );
    }

    #[test]
    fn test_computation_serialization_round_trip() {
        let computation = Computation {
            gross_base: dec("600"),
            supplements: SupplementBreakdown {
                night_amount: dec("120"),
                coordination_amount: dec("50"),
                night_units: 4,
            },
            gross_total: dec("770.00"),
            net_total: dec("705.32"),
            applied_rate: dec("120"),
            is_gross: true,
        };

        let json = serde_json::to_string(&computation).unwrap();
        let deserialized: Computation = serde_json::from_str(&json).unwrap();
        assert_eq!(computation, deserialized);
    }
}
