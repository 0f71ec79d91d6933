//! Application error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Catalog seed error: {0}")]
    SeedError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
