//! Configuration management for the contacts service.
//!
//! This module loads configuration from environment variables. A `.env` file
//! is read through dotenvy when present, which never writes to stdout (MCP
//! uses stdout for communication).

use crate::error::{ConfigError, ConfigResult};
use crate::validation::{self, full_match, ValidationRules};
use regex::Regex;
use std::env;
use std::path::PathBuf;

/// Configuration for the contacts service.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON snapshot file for the store. When unset the store lives only in
    /// memory.
    pub data_file: Option<PathBuf>,

    /// Log level (default: "error")
    pub log_level: String,

    /// Field format rules, defaults overridden per pattern variable
    pub validation: ValidationRules,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DATA_FILE`: snapshot file path (default: in-memory only)
    /// - `LOG_LEVEL`: logging level (default: "error")
    /// - `CONTACT_NAME_PATTERN`, `CONTACT_CPF_PATTERN`, `ADDRESS_ZIP_CODE_PATTERN`,
    ///   `PHONE_DDI_PATTERN`, `PHONE_DDD_PATTERN`, `PHONE_FIX_NUMBER_PATTERN`,
    ///   `PHONE_MOBILE_NUMBER_PATTERN`: full-match regexes replacing the
    ///   built-in field formats
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let data_file = match env::var("CONTACTS_DATA_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_DATA_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => Some(PathBuf::from(val)),
            Err(_) => None,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let validation = ValidationRules {
            contact_name: Self::parse_env_pattern(
                "CONTACT_NAME_PATTERN",
                validation::CONTACT_NAME_PATTERN,
            )?,
            cpf: Self::parse_env_pattern("CONTACT_CPF_PATTERN", validation::CPF_PATTERN)?,
            zip_code: Self::parse_env_pattern(
                "ADDRESS_ZIP_CODE_PATTERN",
                validation::ZIP_CODE_PATTERN,
            )?,
            ddi: Self::parse_env_pattern("PHONE_DDI_PATTERN", validation::DDI_PATTERN)?,
            ddd: Self::parse_env_pattern("PHONE_DDD_PATTERN", validation::DDD_PATTERN)?,
            fix_number: Self::parse_env_pattern(
                "PHONE_FIX_NUMBER_PATTERN",
                validation::FIX_NUMBER_PATTERN,
            )?,
            mobile_number: Self::parse_env_pattern(
                "PHONE_MOBILE_NUMBER_PATTERN",
                validation::MOBILE_NUMBER_PATTERN,
            )?,
        };

        Ok(Config {
            data_file,
            log_level,
            validation,
        })
    }

    /// Compile an environment variable as a full-match regex, falling back to
    /// `default`.
    fn parse_env_pattern(var_name: &str, default: &str) -> ConfigResult<Regex> {
        let pattern = env::var(var_name).unwrap_or_else(|_| default.to_string());
        full_match(&pattern).map_err(|e| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: format!("Must be a valid regular expression: {}", e),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: None,
            log_level: "error".to_string(),
            validation: ValidationRules::default(),
        }
    }
}
