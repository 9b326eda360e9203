//! Core runtime configuration.
//!
//! # Responsibility
//! - Hold defaults for currency display and logging.
//! - Load overrides from JSON; absent keys keep their defaults.
//!
//! # Invariants
//! - `base_currency` is a validated code; malformed codes fail deserialization.
//! - Without an explicit `currency_symbol`, display follows the base currency.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use crate::service::currency::{currency_symbol, CurrencyCode, ExchangeRate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Errors from configuration loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    /// Malformed JSON or an invalid field such as a bad currency code.
    Parse(serde_json::Error),
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

/// Runtime settings shared by core callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoreConfig {
    /// Currency exchange rates are expressed against.
    pub base_currency: CurrencyCode,
    /// Overrides the symbol derived from `base_currency`.
    pub currency_symbol: Option<String>,
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            base_currency: CurrencyCode::base(),
            currency_symbol: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Checks the log level; the currency code is checked while parsing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level)?;
        Ok(())
    }

    /// Symbol passed to `format_currency`.
    pub fn display_symbol(&self) -> String {
        match &self.currency_symbol {
            Some(symbol) => symbol.clone(),
            None => currency_symbol(&self.base_currency),
        }
    }

    /// Identity rate anchoring an exchange-rate table on `base_currency`.
    pub fn base_rate(&self) -> ExchangeRate {
        ExchangeRate::identity(self.base_currency.clone())
    }
}
