//! Enrollment handlers - state transitions and certificates.

use axum::extract::{Path, State};
use axum::response::Response;
use uuid::Uuid;

use crate::dto::ValidatedJson;
use crate::dto::aluno::{CertificadoResponse, SolicitacaoCertificadoRequest};
use crate::envelope::{created, no_content, ok};
use crate::error::HttpError;
use crate::state::AppState;

/// Mark an enrollment as completed.
pub async fn concluir(
    State(state): State<AppState>,
    Path(matricula_id): Path<Uuid>,
) -> Result<Response, HttpError> {
    state.alunos.concluir_matricula(matricula_id).await?;
    Ok(no_content())
}

/// Cancel an active enrollment.
pub async fn cancelar(
    State(state): State<AppState>,
    Path(matricula_id): Path<Uuid>,
) -> Result<Response, HttpError> {
    state.alunos.cancelar_matricula(matricula_id).await?;
    Ok(no_content())
}

/// Request the certificate for a completed enrollment.
pub async fn solicitar_certificado(
    State(state): State<AppState>,
    Path(matricula_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<SolicitacaoCertificadoRequest>,
) -> Result<Response, HttpError> {
    let certificado = state
        .alunos
        .solicitar_certificado(matricula_id, req.path_certificado)
        .await?;
    Ok(created(CertificadoResponse::from(certificado)))
}

/// Get the certificate issued for an enrollment.
pub async fn obter_certificado(
    State(state): State<AppState>,
    Path(matricula_id): Path<Uuid>,
) -> Result<Response, HttpError> {
    let certificado = state.alunos.obter_certificado(matricula_id).await?;
    Ok(ok(CertificadoResponse::from(certificado)))
}
