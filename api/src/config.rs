use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

/// Log output format for the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Service name reported by `/info` and the startup event
    pub app_name: String,
    pub app_version: String,
    pub host: String,
    pub port: u16,
    /// Fallback filter when `RUST_LOG` is not set
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "OmniAgent".to_string(),
            app_version: "0.1.0".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_filter: "info,omniagent_api=debug".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(lookup)
    }

    /// Build a config from an arbitrary key lookup. Missing keys fall back
    /// to the defaults; present but malformed values are rejected.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            app_name: get("APP_NAME").unwrap_or(defaults.app_name),
            app_version: get("APP_VERSION").unwrap_or(defaults.app_version),
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", get("PORT"), defaults.port)?,
            log_filter: get("LOG_FILTER").unwrap_or(defaults.log_filter),
            log_format: parse_or("LOG_FORMAT", get("LOG_FORMAT"), defaults.log_format)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Environment lookup that also accepts the lowercase spelling of a key.
fn lookup(key: &str) -> Option<String> {
    env::var(key)
        .or_else(|_| env::var(key.to_lowercase()))
        .ok()
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::InvalidValue {
                key,
                reason: e.to_string(),
                value,
            })
        }
    }
}
