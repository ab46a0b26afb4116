//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` from the application layer to HTTP status codes and
//! response envelopes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use educa_core::{CoreError, DomainError, RepositoryError};

use crate::envelope::{Envelope, ResponseType};

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Domain invariant violated (surfaced with the domain message).
    #[error("Domain error: {0}")]
    Domain(String),

    /// Request shape invalid (malformed body, binding failure).
    #[error("Validation error")]
    Validation(Vec<String>),

    /// Request not allowed (e.g., path/body id mismatch).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Conflict (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, tipo, erros) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, ResponseType::DomainError, vec![msg]),
            Self::Domain(msg) => (
                StatusCode::BAD_REQUEST,
                ResponseType::DomainError,
                vec![msg],
            ),
            Self::Validation(msgs) => {
                (StatusCode::BAD_REQUEST, ResponseType::ValidationError, msgs)
            }
            Self::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                ResponseType::ValidationError,
                vec![msg],
            ),
            Self::Conflict(msg) => (StatusCode::CONFLICT, ResponseType::DomainError, vec![msg]),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ResponseType::GenericError,
                    vec![msg],
                )
            }
        };

        let body = Envelope::error(tipo, status, erros);
        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Domain(domain_err) => match domain_err {
                DomainError::Validation(msg) | DomainError::InvalidState(msg) => Self::Domain(msg),
            },
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(msg) => Self::Validation(vec![msg]),
            CoreError::Configuration(msg) => Self::Internal(format!("Config: {msg}")),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::AlreadyExists(msg) => Self::Conflict(msg),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Serialization(msg) => Self::Internal(format!("Serialization: {msg}")),
            RepositoryError::Constraint(msg) => Self::Domain(msg),
        }
    }
}
