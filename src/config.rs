use serde::{Deserialize, Serialize};

use crate::domain::value_objects::NumeralBase;
use crate::infrastructure::transformers::Language;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub default_base: u32,
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            default_base: 10,
            language: Language::English,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset or unparsable values fall
    /// back to their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_level: lookup("ARRAY_EXT_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format: lookup("ARRAY_EXT_LOG_FORMAT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_format),
            // kept raw so validate() can report an out-of-range base
            default_base: lookup("ARRAY_EXT_DEFAULT_BASE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.default_base),
            language: lookup("ARRAY_EXT_LANGUAGE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.language),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.log_level.trim().is_empty() {
            return Err("ARRAY_EXT_LOG_LEVEL cannot be empty".to_string());
        }

        NumeralBase::new(self.default_base)
            .map_err(|_| "ARRAY_EXT_DEFAULT_BASE must be between 2 and 16".to_string())?;

        Ok(())
    }
}
