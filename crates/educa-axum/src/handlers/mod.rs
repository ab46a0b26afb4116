//! HTTP handlers, grouped by resource.

pub mod alunos;
pub mod cursos;
pub mod matriculas;
