//! Request/response DTOs and the validating JSON extractor.

pub mod aluno;
pub mod curso;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// JSON extractor whose rejection is the uniform validation envelope.
///
/// Malformed or mistyped bodies short-circuit with a 400
/// `ValidationError` envelope before any handler logic runs, mirroring
/// model-binding validation at the boundary.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(HttpError::Validation(vec![rejection.body_text()])),
        }
    }
}
