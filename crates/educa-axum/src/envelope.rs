//! Uniform response envelope for HTTP clients.
//!
//! Every API response carries a classification, the HTTP status and
//! either a payload (`dados`) or a list of error messages (`erros`), so
//! clients can distinguish validation failures from domain rule
//! violations and unexpected errors without inspecting status codes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Classification of an API outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseType {
    /// The operation succeeded; `dados` carries the payload.
    Success,
    /// The request shape was invalid (malformed body, id mismatch).
    ValidationError,
    /// A domain invariant rejected the operation.
    DomainError,
    /// Unclassified failure.
    GenericError,
}

/// Uniform response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub tipo: ResponseType,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dados: Option<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub erros: Vec<String>,
}

impl<T: Serialize> Envelope<T> {
    /// Success envelope with a payload.
    pub fn success(status: StatusCode, dados: T) -> Self {
        Self {
            tipo: ResponseType::Success,
            status: status.as_u16(),
            dados: Some(dados),
            erros: Vec::new(),
        }
    }
}

impl Envelope<()> {
    /// Error envelope with the given classification and messages.
    pub fn error(tipo: ResponseType, status: StatusCode, erros: Vec<String>) -> Self {
        Self {
            tipo,
            status: status.as_u16(),
            dados: None,
            erros,
        }
    }
}

/// 200 OK success response.
pub fn ok<T: Serialize>(dados: T) -> Response {
    respond(StatusCode::OK, dados)
}

/// 201 Created success response.
pub fn created<T: Serialize>(dados: T) -> Response {
    respond(StatusCode::CREATED, dados)
}

/// Success response with an arbitrary status.
pub fn respond<T: Serialize>(status: StatusCode, dados: T) -> Response {
    (status, Json(Envelope::success(status, dados))).into_response()
}

/// 204 No Content; by definition carries no envelope.
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_de_sucesso_omite_erros() {
        let envelope = Envelope::success(StatusCode::OK, serde_json::json!({"x": 1}));
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["tipo"], "Success");
        assert_eq!(json["status"], 200);
        assert_eq!(json["dados"]["x"], 1);
        assert!(json.get("erros").is_none());
    }

    #[test]
    fn envelope_de_erro_omite_dados() {
        let envelope = Envelope::error(
            ResponseType::DomainError,
            StatusCode::BAD_REQUEST,
            vec!["mensagem".into()],
        );
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["tipo"], "DomainError");
        assert_eq!(json["status"], 400);
        assert_eq!(json["erros"][0], "mensagem");
        assert!(json.get("dados").is_none());
    }
}
