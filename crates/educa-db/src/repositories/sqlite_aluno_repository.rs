//! `SQLite` implementation of the `AlunoRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use educa_core::{Aluno, AlunoRepository, Certificado, MatriculaCurso, RepositoryError};

use super::row_mappers::{
    ALUNO_SELECT_COLUMNS, CERTIFICADO_SELECT_COLUMNS, MATRICULA_SELECT_COLUMNS, map_insert_err,
    row_to_aluno, row_to_certificado, row_to_matricula,
};

/// `SQLite` implementation of the `AlunoRepository` trait.
///
/// Covers the whole student aggregate: students, their enrollments and
/// the certificates hanging off completed enrollments.
pub struct SqliteAlunoRepository {
    pool: SqlitePool,
}

impl SqliteAlunoRepository {
    /// Create a new `SQLite` student repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlunoRepository for SqliteAlunoRepository {
    async fn insert(&self, aluno: &Aluno) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO alunos (id, nome, email, criado_em) VALUES (?, ?, ?, ?)")
            .bind(aluno.id.to_string())
            .bind(&aluno.nome)
            .bind(&aluno.email)
            .bind(aluno.criado_em.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_err(&format!("Aluno '{}'", aluno.email), e))?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Aluno, RepositoryError> {
        let query = format!("SELECT {ALUNO_SELECT_COLUMNS} FROM alunos WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Aluno com ID {id}")))?;

        row_to_aluno(&row)
    }

    async fn get_by_email(&self, email: &str) -> Result<Aluno, RepositoryError> {
        let query = format!("SELECT {ALUNO_SELECT_COLUMNS} FROM alunos WHERE email = ?");

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Aluno com email '{email}'")))?;

        row_to_aluno(&row)
    }

    async fn insert_matricula(&self, matricula: &MatriculaCurso) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO matriculas_cursos (id, aluno_id, curso_id, data_matricula, estado) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(matricula.id.to_string())
        .bind(matricula.aluno_id.to_string())
        .bind(matricula.curso_id.to_string())
        .bind(matricula.data_matricula.to_rfc3339())
        .bind(matricula.estado.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_err("Matrícula do aluno no curso", e))?;

        Ok(())
    }

    async fn get_matricula(&self, id: Uuid) -> Result<MatriculaCurso, RepositoryError> {
        let query = format!("SELECT {MATRICULA_SELECT_COLUMNS} FROM matriculas_cursos WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Matrícula com ID {id}")))?;

        row_to_matricula(&row)
    }

    async fn list_matriculas_do_aluno(
        &self,
        aluno_id: Uuid,
    ) -> Result<Vec<MatriculaCurso>, RepositoryError> {
        let query = format!(
            "SELECT {MATRICULA_SELECT_COLUMNS} FROM matriculas_cursos \
             WHERE aluno_id = ? ORDER BY data_matricula DESC"
        );

        let rows = sqlx::query(&query)
            .bind(aluno_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_matricula).collect()
    }

    async fn update_matricula(&self, matricula: &MatriculaCurso) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE matriculas_cursos SET estado = ? WHERE id = ?")
            .bind(matricula.estado.as_str())
            .bind(matricula.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Matrícula com ID {}",
                matricula.id
            )));
        }
        Ok(())
    }

    async fn insert_certificado(&self, certificado: &Certificado) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO certificados \
             (certificado_id, matricula_curso_id, data_solicitacao, path_certificado) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(certificado.id.to_string())
        .bind(certificado.matricula_curso_id.to_string())
        .bind(certificado.data_solicitacao.to_rfc3339())
        .bind(&certificado.path_certificado)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_err("Certificado da matrícula", e))?;

        Ok(())
    }

    async fn get_certificado_by_matricula(
        &self,
        matricula_curso_id: Uuid,
    ) -> Result<Certificado, RepositoryError> {
        let query = format!(
            "SELECT {CERTIFICADO_SELECT_COLUMNS} FROM certificados WHERE matricula_curso_id = ?"
        );

        let row = sqlx::query(&query)
            .bind(matricula_curso_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!(
                    "Certificado da matrícula {matricula_curso_id}"
                ))
            })?;

        row_to_certificado(&row)
    }
}
