//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated
//! here.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use educa_core::services::{AlunoService, CursoService};
use educa_core::{Repos, database_path};
use educa_db::{CoreFactory, setup_database};

use crate::routes::create_router;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server. Port 0 binds an ephemeral port.
    pub port: u16,
    /// Path to the `SQLite` database file. `None` resolves the default
    /// location under the user data directory.
    pub db_path: Option<PathBuf>,
    /// Administrator bearer token. `None` falls back to the
    /// `EDUCA_ADMIN_TOKEN` env var, then to a generated token.
    pub admin_token: Option<String>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Self {
        Self {
            port: 9480,
            db_path: None,
            admin_token: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set the database path.
    #[must_use]
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = Some(path.into());
        self
    }

    /// Set the administrator token.
    #[must_use]
    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = Some(token.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the composed application services shared by all handlers.
pub struct AxumContext {
    /// Course catalog service.
    pub cursos: Arc<CursoService>,
    /// Student, enrollment and certificate service.
    pub alunos: Arc<AlunoService>,
    /// Token expected in the `Authorization: Bearer` header on `/api`.
    pub admin_token: String,
}

/// Bootstrap the Axum adapter with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let db_path = match &config.db_path {
        Some(path) => path.clone(),
        None => database_path()?,
    };
    tracing::info!(db_path = %db_path.display(), "Resolved database path");

    let pool = setup_database(&db_path).await?;
    let repos: Repos = CoreFactory::build_repos(pool);

    let cursos = Arc::new(CursoService::new(repos.cursos.clone()));
    let alunos = Arc::new(AlunoService::new(repos.alunos, repos.cursos));

    let admin_token = resolve_admin_token(config.admin_token.clone());

    Ok(AxumContext {
        cursos,
        alunos,
        admin_token,
    })
}

/// Bootstrap, bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let app = create_router(ctx, &config.cors);

    let listener =
        tokio::net::TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], config.port))).await?;
    let addr = listener.local_addr()?;
    tracing::info!(port = addr.port(), "Starting educa API server");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Resolve the admin token: explicit config, then env, then generated.
fn resolve_admin_token(configured: Option<String>) -> String {
    if let Some(token) = configured {
        return token;
    }
    if let Ok(token) = std::env::var("EDUCA_ADMIN_TOKEN") {
        if !token.trim().is_empty() {
            return token;
        }
    }

    let token = uuid::Uuid::new_v4().to_string();
    tracing::info!(
        token_prefix = &token[..8],
        "Generated administrator token (set EDUCA_ADMIN_TOKEN to pin one)"
    );
    token
}
