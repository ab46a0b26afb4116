//! Composition utilities for wiring repositories.
//!
//! Factory functions for building the `Repos` container with `SQLite`
//! backends. Construction only, no domain logic.

use std::sync::Arc;

use sqlx::SqlitePool;

use educa_core::Repos;

use crate::repositories::{SqliteAlunoRepository, SqliteCursoRepository};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    /// Returns the `Repos` struct from `educa-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteCursoRepository::new(pool.clone())),
            Arc::new(SqliteAlunoRepository::new(pool)),
        )
    }

    /// Create a course repository from a pool.
    pub fn curso_repository(pool: SqlitePool) -> Arc<SqliteCursoRepository> {
        Arc::new(SqliteCursoRepository::new(pool))
    }

    /// Create a student repository from a pool.
    pub fn aluno_repository(pool: SqlitePool) -> Arc<SqliteAlunoRepository> {
        Arc::new(SqliteAlunoRepository::new(pool))
    }
}
