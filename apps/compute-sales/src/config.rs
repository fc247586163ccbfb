//! Run configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::path::PathBuf;

use tally_io::RESULTS_FILE_NAME;

/// Default tracing filter when neither `RUST_LOG` nor `SALES_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings that are not part of the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Where the report is written (`SALES_RESULTS_FILE`)
    pub results_path: PathBuf,

    /// Tracing filter directive (`SALES_LOG`); `RUST_LOG` wins when set
    pub log_filter: String,
}

impl RunConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let results_path = match lookup("SALES_RESULTS_FILE") {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue("SALES_RESULTS_FILE".to_string()));
            }
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(RESULTS_FILE_NAME),
        };

        let log_filter = lookup("SALES_LOG")
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(RunConfig {
            results_path,
            log_filter,
        })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            results_path: PathBuf::from(RESULTS_FILE_NAME),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RunConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.results_path, PathBuf::from("SalesResults.txt"));
    }

    #[test]
    fn test_overrides() {
        let config = RunConfig::from_lookup(lookup(&[
            ("SALES_RESULTS_FILE", "/tmp/out.txt"),
            ("SALES_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.results_path, PathBuf::from("/tmp/out.txt"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_empty_results_file_is_invalid() {
        let err = RunConfig::from_lookup(lookup(&[("SALES_RESULTS_FILE", "  ")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for SALES_RESULTS_FILE");
    }
}
