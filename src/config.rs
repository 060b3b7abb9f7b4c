use crate::allow_list::AllowList;
use crate::constants::env;
use crate::environment::EnvironmentMode;
use crate::options::CorsOptions;
use crate::origin::{OriginPattern, PatternError};
use thiserror::Error;

/// Origins the gateway accepts in production when no list is configured.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:8100",
    "capacitor://localhost",
    "http://localhost",
    "http://localhost:8080",
    "http://localhost:3000",
    "http://localhost:5173",
    "ionic://localhost",
    "http://localhost:4200",
    "http://127.0.0.1:8100",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:8080",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:4200",
    "chrome-extension://*",
    "devtools://devtools",
    "ws://localhost:*",
    "http://localhost:*",
    "https://gg-railway-production.up.railway.app",
    "https://seu-frontend.railway.app",
    "http://localhost:5000",
];

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid origin pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
    #[error("{variable} must be a non-negative integer, got {value:?}")]
    InvalidNumber {
        variable: &'static str,
        value: String,
    },
    #[error("{variable} must be true or false, got {value:?}")]
    InvalidFlag {
        variable: &'static str,
        value: String,
    },
}

/// Raw gateway settings as read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub mode: EnvironmentMode,
    pub allowed_origins: Vec<String>,
    pub max_age: Option<u64>,
    pub reject_disallowed: bool,
    pub port: u16,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            mode: EnvironmentMode::default(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
            max_age: None,
            reject_disallowed: false,
            port: DEFAULT_PORT,
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which returns the value of a variable
    /// or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mode = EnvironmentMode::from_label(lookup(env::NODE_ENV).as_deref());

        // A present but blank list means "allow nothing", never the built-in list.
        let allowed_origins = match lookup(env::CORS_ALLOWED_ORIGINS) {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.allowed_origins,
        };

        let max_age = value(env::CORS_MAX_AGE)
            .map(|raw| parse_number::<u64>(env::CORS_MAX_AGE, &raw))
            .transpose()?;

        let reject_disallowed = value(env::CORS_REJECT_DISALLOWED)
            .map(|raw| parse_flag(env::CORS_REJECT_DISALLOWED, &raw))
            .transpose()?
            .unwrap_or(defaults.reject_disallowed);

        let port = value(env::PORT)
            .map(|raw| parse_number::<u16>(env::PORT, &raw))
            .transpose()?
            .unwrap_or(defaults.port);

        Ok(Self {
            mode,
            allowed_origins,
            max_age,
            reject_disallowed,
            port,
        })
    }

    /// Compiles the allow-list and produces engine options. Any pattern that
    /// fails to compile aborts the whole conversion.
    pub fn into_options(self) -> Result<CorsOptions, ConfigError> {
        let patterns = self
            .allowed_origins
            .iter()
            .map(|pattern| {
                OriginPattern::parse(pattern).map_err(|source| {
                    ConfigError::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsOptions {
            origins: AllowList::from_patterns(patterns),
            mode: self.mode,
            max_age: self.max_age,
            reject_disallowed: self.reject_disallowed,
            ..CorsOptions::default()
        })
    }
}

fn parse_number<T: std::str::FromStr>(variable: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber {
            variable,
            value: raw.to_string(),
        })
}

fn parse_flag(variable: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            variable,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
