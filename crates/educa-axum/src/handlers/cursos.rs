//! Course handlers - catalog management, administrator only.

use axum::extract::{Path, State};
use axum::response::Response;
use uuid::Uuid;

use crate::dto::ValidatedJson;
use crate::dto::curso::{
    AtualizacaoCursoRequest, CadastroCursoRequest, CursoCriadoResponse, CursoResponse,
};
use crate::envelope::{created, no_content, ok};
use crate::error::HttpError;
use crate::state::AppState;

/// Register a new course.
pub async fn cadastrar(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CadastroCursoRequest>,
) -> Result<Response, HttpError> {
    let curso = state.cursos.cadastrar(req.into()).await?;
    Ok(created(CursoCriadoResponse { curso_id: curso.id }))
}

/// Update an existing course.
pub async fn atualizar(
    State(state): State<AppState>,
    Path(curso_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<AtualizacaoCursoRequest>,
) -> Result<Response, HttpError> {
    if curso_id != req.id {
        return Err(HttpError::Forbidden(
            "Você não tem permissão para realizar essa operação. Verifique sua requisição".into(),
        ));
    }

    state.cursos.atualizar(curso_id, req.into()).await?;
    Ok(no_content())
}

/// Remove a course from the active catalog.
pub async fn desativar(
    State(state): State<AppState>,
    Path(curso_id): Path<Uuid>,
) -> Result<Response, HttpError> {
    state.cursos.desativar(curso_id).await?;
    Ok(no_content())
}

/// Return a course to the active catalog.
pub async fn ativar(
    State(state): State<AppState>,
    Path(curso_id): Path<Uuid>,
) -> Result<Response, HttpError> {
    state.cursos.ativar(curso_id).await?;
    Ok(no_content())
}

/// Get a single course by ID.
pub async fn obter_por_id(
    State(state): State<AppState>,
    Path(curso_id): Path<Uuid>,
) -> Result<Response, HttpError> {
    let curso = state.cursos.obter(curso_id).await?;
    Ok(ok(CursoResponse::from(curso)))
}

/// List only active courses.
pub async fn obter_ativos(State(state): State<AppState>) -> Result<Response, HttpError> {
    let cursos = state.cursos.listar_ativos().await?;
    Ok(ok(cursos
        .into_iter()
        .map(CursoResponse::from)
        .collect::<Vec<_>>()))
}

/// List all courses, active or not.
pub async fn obter_todos(State(state): State<AppState>) -> Result<Response, HttpError> {
    let cursos = state.cursos.listar_todos().await?;
    Ok(ok(cursos
        .into_iter()
        .map(CursoResponse::from)
        .collect::<Vec<_>>()))
}
