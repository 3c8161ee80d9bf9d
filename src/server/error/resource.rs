use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::Error as AppError};

/// Errors about the presence of catalog records
#[derive(Error, Debug)]
pub enum ResourceError {
    /// No `kind` record has the requested id
    #[error("{kind} not found with id {id}")]
    NotFound { kind: &'static str, id: i32 },
    /// The character exists but never learned the jutsu
    #[error("Character {character_id} has not learned jutsu {jutsu_id}")]
    LinkNotFound { character_id: i32, jutsu_id: i32 },
    /// A write pointed a foreign key at a record that does not exist
    #[error("{kind} references a record that does not exist: {reason}")]
    InvalidReference { kind: &'static str, reason: String },
}

impl ResourceError {
    /// Classifies an error returned by an insert or update of a `kind` record.
    ///
    /// Foreign key violations are the caller's to fix, so they become
    /// [`ResourceError::InvalidReference`]; anything else is passed through untouched.
    pub fn from_write(kind: &'static str, err: DbErr) -> AppError {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(reason)) => {
                AppError::ResourceError(Self::InvalidReference { kind, reason })
            }
            _ => AppError::DbErr(err),
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::NotFound { .. } | Self::LinkNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidReference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
