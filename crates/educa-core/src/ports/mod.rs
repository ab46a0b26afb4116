//! Port definitions (trait abstractions) for persistence.
//!
//! Ports define the interfaces the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused
//! - Business rules live in services, not repositories

pub mod aluno_repository;
pub mod curso_repository;

use std::sync::Arc;

use thiserror::Error;

pub use aluno_repository::AlunoRepository;
pub use curso_repository::CursoRepository;

use crate::domain::DomainError;

/// Container for all repository trait objects.
///
/// Adapters obtain this from `educa-db`'s factory and hand it to the
/// services without ever touching concrete implementations.
#[derive(Clone)]
pub struct Repos {
    /// Course repository.
    pub cursos: Arc<dyn CursoRepository>,
    /// Student repository (students, enrollments, certificates).
    pub alunos: Arc<dyn AlunoRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(cursos: Arc<dyn CursoRepository>, alunos: Arc<dyn AlunoRepository>) -> Self {
        Self { cursos, alunos }
    }
}

/// Domain-facing errors for repository operations.
///
/// Abstracts away storage implementation details (sqlx errors) so
/// services can handle storage failures without knowing the backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Canonical error type used across the core domain.
///
/// Adapters map this to their own error types (HTTP status codes and
/// response envelopes, CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A domain invariant was violated.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input outside the domain guards).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
