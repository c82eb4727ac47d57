//! Ambient settings for the binary, read from `REPOCLIENT__*` variables.
//!
//! These only tune logging. They never feed into the emitted record, and no
//! `.env` file is consulted, so the required credentials always come from the
//! real process environment.

use ::config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "REPOCLIENT";
const ENV_SEPARATOR: &str = "__";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    logging: LoggingConfig,
}

impl AppConfig {
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Loads settings from the process environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(None)
}

/// Loads settings from `vars` instead of the process environment when given.
pub fn load_config_from(vars: Option<Map<String, String>>) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .source(vars);

    Config::builder()
        .add_source(env_source)
        .build()?
        .try_deserialize::<AppConfig>()
}
