//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the vacation
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PolicyConfig;

/// Loads and provides access to the vacation policy.
///
/// # Example
///
/// ```no_run
/// use vacation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/vacation_policy.yaml").unwrap();
/// println!("Minimum days: {}", loader.policy().minimum_days);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: PolicyConfig,
}

impl ConfigLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or a required field is missing
    /// - A value makes the rules meaningless (e.g. a zero bonus period)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let policy = Self::load_yaml::<PolicyConfig>(path)?;

        policy
            .check()
            .map_err(|message| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message,
            })?;

        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Consumes the loader and returns the policy.
    pub fn into_policy(self) -> PolicyConfig {
        self.policy
    }
}
