//! Runtime configuration, read from the environment (and `.env`).

use std::env::VarError;
use std::time::Duration;

use dashboard_engine::{ApiSettings, DEFAULT_BASE_URL};
use log::LevelFilter;
use thiserror::Error;

use super::logging::LogDestination;

const VAR_BASE_URL: &str = "DASHBOARD_API_BASE_URL";
const VAR_REQUEST_TIMEOUT: &str = "DASHBOARD_REQUEST_TIMEOUT_SECS";
const VAR_CONNECT_TIMEOUT: &str = "DASHBOARD_CONNECT_TIMEOUT_SECS";
const VAR_LOG_LEVEL: &str = "DASHBOARD_LOG_LEVEL";
const VAR_LOG_TARGET: &str = "DASHBOARD_LOG_TARGET";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub log_level: LevelFilter,
    pub log_destination: LogDestination,
}

impl DashboardConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let or_default = |var: &str, default: &str| -> String {
            lookup(var)
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let parse_secs = |var: &str, default: &str| -> Result<Duration, ConfigError> {
            let raw = or_default(var, default);
            let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
            Ok(Duration::from_secs(secs))
        };

        let raw_level = or_default(VAR_LOG_LEVEL, "info");
        let log_level =
            dashboard_logging::parse_level(&raw_level).ok_or_else(|| ConfigError::InvalidEnvVar {
                var: VAR_LOG_LEVEL.to_string(),
                reason: format!("unknown level '{raw_level}'"),
            })?;

        let raw_target = or_default(VAR_LOG_TARGET, "file");
        let log_destination =
            LogDestination::parse(&raw_target).ok_or_else(|| ConfigError::InvalidEnvVar {
                var: VAR_LOG_TARGET.to_string(),
                reason: format!("expected file, terminal or both, got '{raw_target}'"),
            })?;

        Ok(Self {
            api_base_url: or_default(VAR_BASE_URL, DEFAULT_BASE_URL),
            request_timeout: parse_secs(VAR_REQUEST_TIMEOUT, "30")?,
            connect_timeout: parse_secs(VAR_CONNECT_TIMEOUT, "10")?,
            log_level,
            log_destination,
        })
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.api_base_url.clone(),
            connect_timeout: self.connect_timeout,
            request_timeout: self.request_timeout,
        }
    }
}
