//! Core domain types, port definitions and application services for the
//! educa platform.
//!
//! This crate knows nothing about HTTP or SQL. Adapters (`educa-axum`,
//! `educa-db`) depend on it and implement the ports it defines.

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Aluno, AtualizacaoCurso, Certificado, ConteudoProgramatico, Curso, DomainError,
    EstadoMatricula, MatriculaCurso, NovoAluno, NovoCurso,
};
pub use ports::{AlunoRepository, CoreError, CursoRepository, Repos, RepositoryError};
pub use services::{AlunoService, CursoService};

// Re-export path utilities
pub use paths::{PathError, data_root, database_path};
