//! Company profile loading functionality.
//!
//! This module provides the [`ProfileLoader`] type for reading company
//! profiles from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::CompanyProfile;

/// Loads company profiles from YAML files.
///
/// # File structure
///
/// A profile file holds one company's settings and its rate contracts:
///
/// ```text
/// company_id: 4f2e...
/// name: Horizonte Educativo
/// settings:
///   social_security_deduction: "0.064"
///   features:
///     tutorials: true
/// contracts:
///   - user_id: 91c0...
///     company_id: 4f2e...
///     hourly_rate: "20.00"
///     daily_rate: "120.00"
/// ```
#[derive(Debug, Clone)]
pub struct ProfileLoader;

impl ProfileLoader {
    /// Loads a company profile from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be
    /// read, or [`EngineError::ConfigParseError`] when it is not a valid
    /// profile document.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use worklog_engine::config::ProfileLoader;
    ///
    /// let profile = ProfileLoader::load("./config/companies/horizonte.yaml")?;
    /// # Ok::<(), worklog_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<CompanyProfile> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let profile: CompanyProfile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        info!(
            path = %path_str,
            company = %profile.name,
            contracts = profile.contracts.len(),
            "loaded company profile"
        );

        Ok(profile)
    }
}
