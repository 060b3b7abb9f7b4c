use std::sync::Arc;

use gateway_cors::middleware::SharedCors;
use gateway_cors::{ConfigError, Cors, CorsConfig, ValidationError};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Loads the environment configuration and builds the shared controller.
/// Returns the port to listen on alongside it.
pub fn build_cors() -> Result<(SharedCors, u16), StartupError> {
    let config = CorsConfig::from_env()?;
    let port = config.port;
    let mode = config.mode;
    let patterns = config.allowed_origins.len();

    let cors = Cors::new(config.into_options()?)?;
    info!(%mode, patterns, "origin access control ready");

    Ok((Arc::new(cors), port))
}
