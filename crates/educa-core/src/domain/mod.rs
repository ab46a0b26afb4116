//! Domain entities and value objects.
//!
//! These types represent the educational platform independent of any
//! infrastructure concerns (database, HTTP, etc.). All invariants are
//! enforced at construction time through smart constructors that return
//! [`DomainError`] on violation.

use thiserror::Error;

pub mod aluno;
pub mod certificado;
pub mod conteudo_programatico;
pub mod curso;
pub mod matricula;

pub use aluno::{Aluno, NovoAluno};
pub use certificado::Certificado;
pub use conteudo_programatico::ConteudoProgramatico;
pub use curso::{AtualizacaoCurso, Curso, NovoCurso};
pub use matricula::{EstadoMatricula, MatriculaCurso};

/// Error raised when a domain invariant is violated.
///
/// The message is the user-facing validation text and is surfaced
/// verbatim by adapters (HTTP 400 envelopes, CLI output).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A constructor guard rejected the input.
    #[error("{0}")]
    Validation(String),

    /// An operation was attempted in a state that does not allow it.
    #[error("{0}")]
    InvalidState(String),
}

impl DomainError {
    /// Shorthand for a validation failure with the given message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// True when the string is empty or contains only whitespace.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Length in Unicode scalar values, the unit all field bounds use.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}
