//! Configuration types for company profiles.
//!
//! This module contains the strongly-typed structure deserialized from a
//! company profile YAML file.

use serde::Deserialize;
use uuid::Uuid;

use crate::models::{CompanySettings, RateContract};

/// A company's full configuration: its settings and rate contract pool.
///
/// This is the on-disk counterpart of what a database-backed caller would
/// assemble from its company and rate tables.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyProfile {
    /// The company's identifier.
    pub company_id: Uuid,
    /// The company's display name.
    pub name: String,
    /// The settings blob consumed by the engine.
    #[serde(default)]
    pub settings: CompanySettings,
    /// The rate contracts for the company's members.
    #[serde(default)]
    pub contracts: Vec<RateContract>,
}
