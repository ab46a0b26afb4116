//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database
//! access. The `SqlitePool` is confined to this module and never
//! exposed through the port trait signatures.

mod row_mappers;
mod sqlite_aluno_repository;
mod sqlite_curso_repository;

pub use sqlite_aluno_repository::SqliteAlunoRepository;
pub use sqlite_curso_repository::SqliteCursoRepository;
