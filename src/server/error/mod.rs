//! Error types for the Konoha server.
//!
//! Domain errors (configuration, resource lookups and references) live in their own
//! modules and are folded into [`Error`], which every handler returns. All errors implement
//! `IntoResponse`, so handlers propagate with `?` and the mapping to HTTP status happens
//! in one place.

pub mod config;
pub mod resource;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, resource::ResourceError},
};

/// Main error type for the Konoha server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Resource errors (record not found, invalid foreign key reference)
/// - Database errors (connection failures, query failures)
/// - I/O errors (binding the listener)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A requested record is absent or a write referenced one that is.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding or serving the HTTP listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For records that do not exist
/// - 422 Unprocessable Entity - For writes referencing records that do not exist
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
