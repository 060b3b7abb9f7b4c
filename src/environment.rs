use std::fmt;
use std::str::FromStr;

/// Deployment mode the gateway runs in.
///
/// Only [`EnvironmentMode::Production`] enforces the allow-list; every other
/// mode lets all origins through so local development is never blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnvironmentMode {
    Production,
    #[default]
    NonProduction,
}

impl EnvironmentMode {
    pub const PRODUCTION_LABEL: &'static str = "production";

    /// Maps an environment label (for example the value of `NODE_ENV`) to a mode.
    ///
    /// Only the exact label `production` selects production; a missing or any
    /// other label selects non-production.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some(Self::PRODUCTION_LABEL) => Self::Production,
            _ => Self::NonProduction,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for EnvironmentMode {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(Some(value)))
    }
}

impl fmt::Display for EnvironmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::NonProduction => f.write_str("non-production"),
        }
    }
}

#[cfg(test)]
#[path = "environment_test.rs"]
mod environment_test;
