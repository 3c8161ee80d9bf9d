use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors reading the configuration from the environment
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but cannot be parsed
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
