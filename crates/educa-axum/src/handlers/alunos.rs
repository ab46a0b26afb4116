//! Student handlers - registration and enrollment listing.

use axum::extract::{Path, State};
use axum::response::Response;
use uuid::Uuid;

use crate::dto::ValidatedJson;
use crate::dto::aluno::{AlunoResponse, CadastroAlunoRequest, MatriculaRequest, MatriculaResponse};
use crate::envelope::{created, ok};
use crate::error::HttpError;
use crate::state::AppState;

/// Register a new student.
pub async fn cadastrar(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CadastroAlunoRequest>,
) -> Result<Response, HttpError> {
    let aluno = state.alunos.cadastrar(req.into()).await?;
    Ok(created(AlunoResponse::from(aluno)))
}

/// Get a single student by ID.
pub async fn obter_por_id(
    State(state): State<AppState>,
    Path(aluno_id): Path<Uuid>,
) -> Result<Response, HttpError> {
    let aluno = state.alunos.obter(aluno_id).await?;
    Ok(ok(AlunoResponse::from(aluno)))
}

/// Enroll the student in a course.
pub async fn matricular(
    State(state): State<AppState>,
    Path(aluno_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<MatriculaRequest>,
) -> Result<Response, HttpError> {
    let matricula = state.alunos.matricular(aluno_id, req.curso_id).await?;
    Ok(created(MatriculaResponse::from(matricula)))
}

/// List the student's enrollments.
pub async fn listar_matriculas(
    State(state): State<AppState>,
    Path(aluno_id): Path<Uuid>,
) -> Result<Response, HttpError> {
    let matriculas = state.alunos.listar_matriculas(aluno_id).await?;
    Ok(ok(matriculas
        .into_iter()
        .map(MatriculaResponse::from)
        .collect::<Vec<_>>()))
}
