//! Compensation calculation engine for timesheet work logs.
//!
//! This crate turns a raw work log (a timed single-day entry or a multi-day
//! tutorial) plus a per-user-per-company rate contract into monetary amounts,
//! and re-derives the daily/monthly/company statistics that dashboards and
//! report exports consume. The engine is pure and stateless: contracts and
//! company settings are read-only snapshots passed in per call.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod rollup;
