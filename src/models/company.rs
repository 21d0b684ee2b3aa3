//! Company settings model.
//!
//! This module defines the [`CompanySettings`] blob the engine consumes:
//! the default Social Security deduction, feature toggles, billing basis,
//! and input mode. The shapes mirror the JSON settings document stored per
//! company, so every field tolerates absence with a sensible default.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The contractual basis for a company's configured prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    /// Configured rates are pre-tax; deductions apply.
    #[default]
    Gross,
    /// Configured rates already represent take-home pay.
    Net,
}

/// How the company's workers enter a log's value.
///
/// This records input provenance only; it does not change calculation
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Workers enter individual time/date fields; the engine derives totals.
    #[default]
    ManualSingle,
    /// Workers may hand-type a total that overrides rate x duration upstream.
    ManualTotal,
}

/// Feature toggles controlling which inputs are legal on a work log.
///
/// Every flag defaults to enabled when absent from the settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Whether tutorial logs may be created.
    #[serde(default = "enabled")]
    pub tutorials: bool,
    /// Whether the coordination supplement may be set.
    #[serde(default = "enabled")]
    pub coordination: bool,
    /// Whether the night supplement may be set.
    #[serde(default = "enabled")]
    pub night_shifts: bool,
    /// Whether supplements are shown at all in the input layer.
    #[serde(default = "enabled")]
    pub supplements: bool,
    /// Whether logs may carry a pickup point.
    #[serde(default = "enabled")]
    pub pickup_point: bool,
    /// Whether workers see the daily report screen.
    #[serde(default = "enabled")]
    pub worker_daily_report: bool,
}

fn enabled() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            tutorials: true,
            coordination: true,
            night_shifts: true,
            supplements: true,
            pickup_point: true,
            worker_daily_report: true,
        }
    }
}

/// Billing configuration for a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BillingSettings {
    /// The contractual basis for configured prices.
    #[serde(default)]
    pub price_type: PriceType,
}

/// Per-company configuration consumed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompanySettings {
    /// The default Social Security fraction applied when a contract's
    /// `deduction_ss` is absent (e.g. `0.064` for 6.4%).
    #[serde(default)]
    pub social_security_deduction: Decimal,
    /// Feature toggles for work log inputs.
    #[serde(default)]
    pub features: FeatureFlags,
    /// Billing configuration.
    #[serde(default)]
    pub billing: BillingSettings,
    /// How workers enter log values.
    #[serde(default)]
    pub input_mode: InputMode,
}
