//! Course repository trait definition.

use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::Curso;

/// Repository for course persistence operations.
///
/// Implementations are responsible for all storage details. The course
/// row carries the syllabus value object inline; mapping it back into
/// [`crate::domain::ConteudoProgramatico`] is the implementation's job.
#[async_trait]
pub trait CursoRepository: Send + Sync {
    /// List all courses, newest first.
    async fn list(&self) -> Result<Vec<Curso>, RepositoryError>;

    /// List only active courses, newest first.
    async fn list_ativos(&self) -> Result<Vec<Curso>, RepositoryError>;

    /// Get a course by its ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the course doesn't exist.
    async fn get_by_id(&self, id: Uuid) -> Result<Curso, RepositoryError>;

    /// Get a course by its exact name.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no course has that name.
    async fn get_by_nome(&self, nome: &str) -> Result<Curso, RepositoryError>;

    /// Insert a new course.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` when the name is taken.
    async fn insert(&self, curso: &Curso) -> Result<(), RepositoryError>;

    /// Update an existing course.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the course doesn't exist.
    async fn update(&self, curso: &Curso) -> Result<(), RepositoryError>;
}
