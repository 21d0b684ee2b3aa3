//! Rollup and aggregation layer.
//!
//! This module folds collections of work logs into the report-ready
//! statistics the dashboards and exports consume: windowed income/hours
//! rollups with day classification and weekly series, per-user and
//! per-company breakdowns, and per-month summaries for the text/PDF
//! renderers. Aggregation is a commutative fold over independent logs, so
//! batches may be combined in any order.

mod aggregate;
mod breakdown;
mod monthly;
mod weekly;

pub use aggregate::{DayCounts, IncomeMode, Rollup, TUTORIAL_HOURS_PER_DAY, aggregate};
pub use breakdown::{GroupStats, by_company, by_user};
pub use monthly::{MonthKey, MonthlySummary, ParticularDay, TutorialDay, monthly_summaries};
pub use weekly::{WeekBucket, week_start, weekly_series};
