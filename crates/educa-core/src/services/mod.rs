//! Application services - thin facades over the repository ports.

pub mod aluno_service;
pub mod curso_service;

pub use aluno_service::AlunoService;
pub use curso_service::CursoService;
