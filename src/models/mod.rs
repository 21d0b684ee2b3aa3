//! Core data models for the compensation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod company;
mod computation;
mod rate_contract;
mod reporting_window;
mod work_log;

pub use company::{BillingSettings, CompanySettings, FeatureFlags, InputMode, PriceType};
pub use computation::{Computation, CostBasis, CostEstimate, SupplementBreakdown};
pub use rate_contract::RateContract;
pub use reporting_window::ReportingWindow;
pub use work_log::{WorkLog, WorkLogKind};
