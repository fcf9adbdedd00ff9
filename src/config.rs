use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;

use crate::app_system::LogFormat;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings read from the environment (and `.env`, via `dotenvy`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub actor_buffer: usize,
    /// `None` allows any origin.
    pub cors_origin: Option<String>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load(&lookup, "HOST", "0.0.0.0")?,
            port: try_load(&lookup, "PORT", "5001")?,
            actor_buffer: try_load(&lookup, "ACTOR_BUFFER", "32")?,
            cors_origin: lookup("CORS_ORIGIN")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty() && v != "*"),
            log_format: try_load(&lookup, "LOG_FORMAT", "compact")?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.address(), "0.0.0.0:5001");
        assert_eq!(config.actor_buffer, 32);
        assert_eq!(config.cors_origin, None);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_overrides_and_wildcard_origin() {
        let config = load(&[("PORT", "8080"), ("LOG_FORMAT", "json"), ("CORS_ORIGIN", "*")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.cors_origin, None);
    }

    #[test]
    fn test_invalid_port() {
        assert!(matches!(
            load(&[("PORT", "eighty")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));
    }
}
