//! Configuration for the terminal front-end.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Call `dotenvy::dotenv()` first to pick up a `.env` file.

use crate::tabs::{ParseTabError, Tab};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Log level filter, unless `RUST_LOG` is set
pub const LOG_LEVEL_VAR: &str = "TODO_TABS_LOG_LEVEL";
/// Whether the shell prints a prompt before each line
pub const PROMPT_VAR: &str = "TODO_TABS_PROMPT";
/// View shown at startup
pub const INITIAL_TAB_VAR: &str = "TODO_TABS_INITIAL_TAB";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Log level is not one of trace, debug, info, warn, error, off
    #[error("TODO_TABS_LOG_LEVEL: unknown log level '{0}'")]
    InvalidLogLevel(String),
    /// Boolean flag could not be parsed
    #[error("{var}: expected 'true' or 'false', got '{value}'")]
    InvalidFlag {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },
    /// Initial tab is unknown
    #[error("TODO_TABS_INITIAL_TAB: {0}")]
    InvalidTab(#[from] ParseTabError),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error, off)
    pub log_level: String,
    /// Print a prompt before reading each command
    pub show_prompt: bool,
    /// View selected when the application starts
    pub initial_tab: Tab,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            show_prompt: true,
            initial_tab: Tab::Todos,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(level) => {
                let level = level.trim().to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(ConfigError::InvalidLogLevel(level));
                }
                level
            },
            None => defaults.log_level,
        };

        let show_prompt = match lookup(PROMPT_VAR) {
            Some(value) => parse_flag(PROMPT_VAR, &value)?,
            None => defaults.show_prompt,
        };

        let initial_tab = match lookup(INITIAL_TAB_VAR) {
            Some(value) => value.parse()?,
            None => defaults.initial_tab,
        };

        Ok(Self {
            log_level,
            show_prompt,
            initial_tab,
        })
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
