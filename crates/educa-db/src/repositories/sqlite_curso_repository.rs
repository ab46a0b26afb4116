//! `SQLite` implementation of the `CursoRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use educa_core::{Curso, CursoRepository, RepositoryError};

use super::row_mappers::{CURSO_SELECT_COLUMNS, map_insert_err, row_to_curso};

/// `SQLite` implementation of the `CursoRepository` trait.
///
/// Holds a connection pool and implements all catalog operations. The
/// syllabus value object is flattened into the `finalidade`/`ementa`
/// columns of the `cursos` table.
pub struct SqliteCursoRepository {
    pool: SqlitePool,
}

impl SqliteCursoRepository {
    /// Create a new `SQLite` course repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CursoRepository for SqliteCursoRepository {
    async fn list(&self) -> Result<Vec<Curso>, RepositoryError> {
        let query = format!(
            "SELECT {CURSO_SELECT_COLUMNS} FROM cursos ORDER BY criado_em DESC"
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_curso).collect()
    }

    async fn list_ativos(&self) -> Result<Vec<Curso>, RepositoryError> {
        let query = format!(
            "SELECT {CURSO_SELECT_COLUMNS} FROM cursos WHERE ativo = 1 ORDER BY criado_em DESC"
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_curso).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Curso, RepositoryError> {
        let query = format!("SELECT {CURSO_SELECT_COLUMNS} FROM cursos WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Curso com ID {id}")))?;

        row_to_curso(&row)
    }

    async fn get_by_nome(&self, nome: &str) -> Result<Curso, RepositoryError> {
        let query = format!("SELECT {CURSO_SELECT_COLUMNS} FROM cursos WHERE nome = ?");

        let row = sqlx::query(&query)
            .bind(nome)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Curso com nome '{nome}'")))?;

        row_to_curso(&row)
    }

    async fn insert(&self, curso: &Curso) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO cursos (id, nome, valor, ativo, finalidade, ementa, criado_em) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(curso.id.to_string())
        .bind(&curso.nome)
        .bind(curso.valor)
        .bind(curso.ativo)
        .bind(curso.conteudo.finalidade())
        .bind(curso.conteudo.ementa())
        .bind(curso.criado_em.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_err(&format!("Curso '{}'", curso.nome), e))?;

        Ok(())
    }

    async fn update(&self, curso: &Curso) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE cursos SET nome = ?, valor = ?, ativo = ?, finalidade = ?, ementa = ? \
             WHERE id = ?",
        )
        .bind(&curso.nome)
        .bind(curso.valor)
        .bind(curso.ativo)
        .bind(curso.conteudo.finalidade())
        .bind(curso.conteudo.ementa())
        .bind(curso.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_err(&format!("Curso '{}'", curso.nome), e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Curso com ID {}",
                curso.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use educa_core::ConteudoProgramatico;

    use super::*;
    use crate::setup::setup_test_database;

    fn curso(nome: &str) -> Curso {
        let conteudo =
            ConteudoProgramatico::new("Formar o aluno em conceitos de DDD", "e".repeat(50))
                .unwrap();
        Curso::new(nome, 299.90, conteudo).unwrap()
    }

    async fn repo() -> SqliteCursoRepository {
        let pool = setup_test_database().await.unwrap();
        SqliteCursoRepository::new(pool)
    }

    #[tokio::test]
    async fn insert_e_get_round_trip() {
        let repo = repo().await;
        let curso = curso("Curso de DDD");

        repo.insert(&curso).await.unwrap();
        let lido = repo.get_by_id(curso.id).await.unwrap();

        assert_eq!(lido.id, curso.id);
        assert_eq!(lido.nome, "Curso de DDD");
        assert_eq!(lido.conteudo, curso.conteudo);
        assert!(lido.ativo);
    }

    #[tokio::test]
    async fn get_by_id_inexistente_retorna_not_found() {
        let repo = repo().await;

        let err = repo.get_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn insert_com_nome_duplicado_retorna_already_exists() {
        let repo = repo().await;
        repo.insert(&curso("Curso de DDD")).await.unwrap();

        let err = repo.insert(&curso("Curso de DDD")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn list_ativos_filtra_cursos_desativados() {
        let repo = repo().await;
        let ativo = curso("Curso ativo de DDD");
        let mut inativo = curso("Curso inativo de DDD");
        inativo.desativar();

        repo.insert(&ativo).await.unwrap();
        repo.insert(&inativo).await.unwrap();

        let ativos = repo.list_ativos().await.unwrap();
        assert_eq!(ativos.len(), 1);
        assert_eq!(ativos[0].id, ativo.id);

        let todos = repo.list().await.unwrap();
        assert_eq!(todos.len(), 2);
    }

    #[tokio::test]
    async fn update_persiste_desativacao() {
        let repo = repo().await;
        let mut curso = curso("Curso de DDD");
        repo.insert(&curso).await.unwrap();

        curso.desativar();
        repo.update(&curso).await.unwrap();

        let lido = repo.get_by_id(curso.id).await.unwrap();
        assert!(!lido.ativo);
    }

    #[tokio::test]
    async fn update_de_curso_inexistente_retorna_not_found() {
        let repo = repo().await;

        let err = repo.update(&curso("Curso de DDD")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
