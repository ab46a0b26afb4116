//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, Utc};
use educa_core::domain::EstadoMatricula;
use educa_core::{Aluno, Certificado, ConteudoProgramatico, Curso, MatriculaCurso, RepositoryError};
use sqlx::Row;
use uuid::Uuid;

/// Shared SELECT column list for course queries.
pub const CURSO_SELECT_COLUMNS: &str = "id, nome, valor, ativo, finalidade, ementa, criado_em";

/// Shared SELECT column list for student queries.
pub const ALUNO_SELECT_COLUMNS: &str = "id, nome, email, criado_em";

/// Shared SELECT column list for enrollment queries.
pub const MATRICULA_SELECT_COLUMNS: &str = "id, aluno_id, curso_id, data_matricula, estado";

/// Shared SELECT column list for certificate queries.
pub const CERTIFICADO_SELECT_COLUMNS: &str =
    "certificado_id, matricula_curso_id, data_solicitacao, path_certificado";

fn storage_err(e: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Parse a stored UUID column.
pub fn parse_uuid(value: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(value)
        .map_err(|e| RepositoryError::Serialization(format!("UUID inválido '{value}': {e}")))
}

/// Parse a stored RFC 3339 timestamp column.
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Serialization(format!("Data inválida '{value}': {e}")))
}

/// Parse a database row into a Curso.
///
/// The syllabus columns go back through the domain constructor, so a
/// row violating the field invariants surfaces as a serialization
/// error instead of an invalid entity.
pub fn row_to_curso(row: &sqlx::sqlite::SqliteRow) -> Result<Curso, RepositoryError> {
    let id: String = row.try_get("id").map_err(storage_err)?;
    let finalidade: String = row.try_get("finalidade").map_err(storage_err)?;
    let ementa: String = row.try_get("ementa").map_err(storage_err)?;
    let criado_em: String = row.try_get("criado_em").map_err(storage_err)?;

    let conteudo = ConteudoProgramatico::new(finalidade, ementa)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    Ok(Curso {
        id: parse_uuid(&id)?,
        nome: row.try_get("nome").map_err(storage_err)?,
        valor: row.try_get("valor").map_err(storage_err)?,
        ativo: row.try_get::<bool, _>("ativo").map_err(storage_err)?,
        conteudo,
        criado_em: parse_datetime(&criado_em)?,
    })
}

/// Parse a database row into an Aluno.
pub fn row_to_aluno(row: &sqlx::sqlite::SqliteRow) -> Result<Aluno, RepositoryError> {
    let id: String = row.try_get("id").map_err(storage_err)?;
    let criado_em: String = row.try_get("criado_em").map_err(storage_err)?;

    Ok(Aluno {
        id: parse_uuid(&id)?,
        nome: row.try_get("nome").map_err(storage_err)?,
        email: row.try_get("email").map_err(storage_err)?,
        criado_em: parse_datetime(&criado_em)?,
    })
}

/// Parse a database row into a MatriculaCurso.
pub fn row_to_matricula(row: &sqlx::sqlite::SqliteRow) -> Result<MatriculaCurso, RepositoryError> {
    let id: String = row.try_get("id").map_err(storage_err)?;
    let aluno_id: String = row.try_get("aluno_id").map_err(storage_err)?;
    let curso_id: String = row.try_get("curso_id").map_err(storage_err)?;
    let data_matricula: String = row.try_get("data_matricula").map_err(storage_err)?;
    let estado: String = row.try_get("estado").map_err(storage_err)?;

    Ok(MatriculaCurso {
        id: parse_uuid(&id)?,
        aluno_id: parse_uuid(&aluno_id)?,
        curso_id: parse_uuid(&curso_id)?,
        data_matricula: parse_datetime(&data_matricula)?,
        estado: EstadoMatricula::parse(&estado)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?,
    })
}

/// Parse a database row into a Certificado.
pub fn row_to_certificado(row: &sqlx::sqlite::SqliteRow) -> Result<Certificado, RepositoryError> {
    let id: String = row.try_get("certificado_id").map_err(storage_err)?;
    let matricula_id: String = row.try_get("matricula_curso_id").map_err(storage_err)?;
    let data_solicitacao: String = row.try_get("data_solicitacao").map_err(storage_err)?;

    Ok(Certificado {
        id: parse_uuid(&id)?,
        matricula_curso_id: parse_uuid(&matricula_id)?,
        data_solicitacao: parse_datetime(&data_solicitacao)?,
        path_certificado: row.try_get("path_certificado").map_err(storage_err)?,
    })
}

/// Map a sqlx insert error, translating unique-index violations.
pub fn map_insert_err(entity: &str, e: sqlx::Error) -> RepositoryError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed") {
        RepositoryError::AlreadyExists(entity.to_string())
    } else if msg.contains("FOREIGN KEY constraint failed") {
        RepositoryError::Constraint(format!("{entity}: referência inexistente"))
    } else {
        RepositoryError::Storage(msg)
    }
}
