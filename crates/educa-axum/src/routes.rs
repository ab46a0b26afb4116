//! Route definitions and router construction.
//!
//! Defines the HTTP routes and creates the main router. All `/api`
//! routes sit behind the administrator bearer-token layer; `/health`
//! stays open for probes.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api` prefix (for nesting).
///
/// Returned router is typed `Router<AppState>` without `.with_state()`
/// applied; the caller nests it under `/api` and applies the state.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Cursos API
        .route(
            "/curso",
            get(handlers::cursos::obter_todos).post(handlers::cursos::cadastrar),
        )
        .route("/curso/ativos", get(handlers::cursos::obter_ativos))
        .route(
            "/curso/{curso_id}",
            get(handlers::cursos::obter_por_id).put(handlers::cursos::atualizar),
        )
        .route("/curso/{curso_id}/desativar", patch(handlers::cursos::desativar))
        .route("/curso/{curso_id}/ativar", patch(handlers::cursos::ativar))
        // Alunos API
        .route("/aluno", post(handlers::alunos::cadastrar))
        .route("/aluno/{aluno_id}", get(handlers::alunos::obter_por_id))
        .route(
            "/aluno/{aluno_id}/matriculas",
            get(handlers::alunos::listar_matriculas).post(handlers::alunos::matricular),
        )
        // Matrículas API
        .route(
            "/matricula/{matricula_id}/concluir",
            patch(handlers::matriculas::concluir),
        )
        .route(
            "/matricula/{matricula_id}/cancelar",
            patch(handlers::matriculas::cancelar),
        )
        .route(
            "/matricula/{matricula_id}/certificado",
            get(handlers::matriculas::obter_certificado)
                .post(handlers::matriculas::solicitar_certificado),
        )
}

/// Health check endpoint, unauthenticated.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Create the main Axum router with all API routes.
///
/// Applies the administrator bearer-token layer and CORS to `/api`
/// only.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{curso_id}`.
pub fn create_router(ctx: AxumContext, cors: &CorsConfig) -> Router {
    // Full "Bearer <token>" kept around so the auth check is a direct
    // string comparison without per-request allocation.
    let expected: Arc<str> = Arc::from(format!("Bearer {}", ctx.admin_token));
    let state: AppState = Arc::new(ctx);

    let auth_layer = middleware::from_fn(move |req: Request, next: Next| {
        let expected = expected.clone();
        async move { validate_bearer(expected, req, next).await }
    });

    Router::new()
        .route("/health", get(health_check))
        .nest(
            "/api",
            api_routes()
                .route_layer(auth_layer)
                .layer(build_cors_layer(cors)),
        )
        .with_state(state)
}

/// Auth middleware: validate the administrator Bearer token.
///
/// Returns 401 Unauthorized with `WWW-Authenticate: Bearer` on failure.
async fn validate_bearer(
    expected: Arc<str>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match auth {
        Some(h) if h == expected.as_ref() => Ok(next.run(req).await),
        _ => {
            tracing::warn!(
                path = %req.uri().path(),
                "Unauthorized API request - missing or invalid token"
            );
            let mut res = Response::new(axum::body::Body::empty());
            *res.status_mut() = StatusCode::UNAUTHORIZED;
            res.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
            Ok(res)
        }
    }
}
