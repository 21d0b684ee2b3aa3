//! Configuration loading for the compensation engine.
//!
//! This module loads company profiles (settings plus the rate contract
//! pool) from YAML files, for callers that configure companies from disk
//! rather than a database.
//!
//! # Example
//!
//! ```no_run
//! use worklog_engine::config::ProfileLoader;
//!
//! let profile = ProfileLoader::load("./config/companies/horizonte.yaml").unwrap();
//! println!("Loaded {} contracts", profile.contracts.len());
//! ```

mod loader;
mod types;

pub use loader::ProfileLoader;
pub use types::CompanyProfile;
