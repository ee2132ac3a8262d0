//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `podwatch.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Polling settings.
    pub poll: PollConfig,
    /// Account settings.
    pub account: AccountConfig,
    /// Simulated pod identity.
    pub pod: PodConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Telemetry polling configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between refreshes.
    pub interval_secs: u64,
}

/// Account presentation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// ISO 4217 currency code used for cost and balance readings.
    pub currency: String,
}

/// Identity of the simulated pod exposed by the virtual adapter.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PodConfig {
    /// Numeric pod identifier.
    pub id: i64,
    /// Pod unit name, e.g. `PSL-000001`.
    pub unit_id: String,
    /// Model identifier, e.g. `S7-UC-03-ACA`.
    pub model: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `podwatch.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// value fails semantic validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("podwatch.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PODWATCH_POLL_INTERVAL") {
            if let Ok(secs) = val.parse() {
                self.poll.interval_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("PODWATCH_CURRENCY") {
            self.account.currency = val;
        }
        if let Ok(val) = std::env::var("PODWATCH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        if self.account.currency.len() != 3 {
            return Err(ConfigError::Validation(
                "currency must be a 3-letter ISO code".to_string(),
            ));
        }
        if self.pod.unit_id.is_empty() {
            return Err(ConfigError::Validation(
                "pod unit id must not be empty".to_string(),
            ));
        }
        if self.pod.model.is_empty() {
            return Err(ConfigError::Validation(
                "pod model must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { interval_secs: 30 }
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            currency: "GBP".to_string(),
        }
    }
}

impl Default for PodConfig {
    fn default() -> Self {
        Self {
            id: 10_001,
            unit_id: "PSL-000001".to_string(),
            model: "S7-UC-03-ACA".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "podwatchd=info,podwatch=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
