//! Database setup and initialization.
//!
//! Provides `setup_database()` for initializing the `SQLite` database
//! with the full schema. Entry points call this with the resolved
//! database path.

use std::path::Path;

use anyhow::Result;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// Creates the database file (and its parent directory) if missing and
/// creates all tables and indexes. Safe to call on every startup.
///
/// # Errors
///
/// Returns an error if the database file cannot be opened or created,
/// or if schema creation fails.
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true),
    )
    .await?;

    create_schema(&pool).await?;
    tracing::debug!(path = %db_path.display(), "Database ready");

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePool::connect_with(
        "sqlite::memory:"
            .parse::<SqliteConnectOptions>()?
            .foreign_keys(true),
    )
    .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times as all statements use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cursos (
            id TEXT PRIMARY KEY NOT NULL,
            nome TEXT NOT NULL,
            valor REAL NOT NULL,
            ativo INTEGER NOT NULL DEFAULT 1,
            finalidade TEXT NOT NULL,
            ementa TEXT NOT NULL,
            criado_em TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_cursos_nome ON cursos(nome)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS alunos (
            id TEXT PRIMARY KEY NOT NULL,
            nome TEXT NOT NULL,
            email TEXT NOT NULL,
            criado_em TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_alunos_email ON alunos(email)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS matriculas_cursos (
            id TEXT PRIMARY KEY NOT NULL,
            aluno_id TEXT NOT NULL,
            curso_id TEXT NOT NULL,
            data_matricula TEXT NOT NULL,
            estado TEXT NOT NULL CHECK (estado IN ('ativa', 'concluida', 'cancelada')),
            FOREIGN KEY (aluno_id) REFERENCES alunos(id) ON DELETE CASCADE,
            FOREIGN KEY (curso_id) REFERENCES cursos(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_matriculas_aluno_curso \
         ON matriculas_cursos(aluno_id, curso_id)",
    )
    .execute(pool)
    .await?;

    // One certificate per enrollment; removing the enrollment removes
    // the certificate.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS certificados (
            certificado_id TEXT PRIMARY KEY NOT NULL,
            matricula_curso_id TEXT NOT NULL,
            data_solicitacao TEXT NOT NULL,
            path_certificado TEXT NOT NULL,
            FOREIGN KEY (matricula_curso_id)
                REFERENCES matriculas_cursos(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_certificados_matricula \
         ON certificados(matricula_curso_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn setup_database_cria_arquivo_e_schema() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("data").join("educa.db");

        let pool = setup_database(&db_path).await.unwrap();
        assert!(db_path.exists());

        // Schema is idempotent on reconnect
        create_schema(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cursos")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
