//! Student repository trait definition.
//!
//! The student aggregate owns its enrollments, and each enrollment may
//! own a single certificate, so all three live behind one port.

use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::{Aluno, Certificado, MatriculaCurso};

/// Repository for students, enrollments and certificates.
#[async_trait]
pub trait AlunoRepository: Send + Sync {
    /// Insert a new student.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` when the e-mail is taken.
    async fn insert(&self, aluno: &Aluno) -> Result<(), RepositoryError>;

    /// Get a student by ID.
    async fn get_by_id(&self, id: Uuid) -> Result<Aluno, RepositoryError>;

    /// Get a student by e-mail.
    async fn get_by_email(&self, email: &str) -> Result<Aluno, RepositoryError>;

    /// Insert a new enrollment.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` when the student is
    /// already enrolled in the course.
    async fn insert_matricula(&self, matricula: &MatriculaCurso) -> Result<(), RepositoryError>;

    /// Get an enrollment by ID.
    async fn get_matricula(&self, id: Uuid) -> Result<MatriculaCurso, RepositoryError>;

    /// List all enrollments of a student, newest first.
    async fn list_matriculas_do_aluno(
        &self,
        aluno_id: Uuid,
    ) -> Result<Vec<MatriculaCurso>, RepositoryError>;

    /// Persist an enrollment state change.
    async fn update_matricula(&self, matricula: &MatriculaCurso) -> Result<(), RepositoryError>;

    /// Insert a certificate for an enrollment.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` when the enrollment
    /// already has one (one certificate per enrollment).
    async fn insert_certificado(&self, certificado: &Certificado) -> Result<(), RepositoryError>;

    /// Get the certificate of an enrollment, if issued.
    async fn get_certificado_by_matricula(
        &self,
        matricula_curso_id: Uuid,
    ) -> Result<Certificado, RepositoryError>;
}
