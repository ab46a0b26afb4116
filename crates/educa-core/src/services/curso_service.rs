//! Course service - orchestrates catalog management operations.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{AtualizacaoCurso, ConteudoProgramatico, Curso, NovoCurso};
use crate::ports::{CoreError, CursoRepository, RepositoryError};

/// Service for course catalog operations.
///
/// Builds domain objects from validated input and delegates persistence
/// to the injected [`CursoRepository`]. The only rule it adds on top of
/// the domain guards is name uniqueness.
pub struct CursoService {
    repo: Arc<dyn CursoRepository>,
}

impl CursoService {
    /// Create a new course service with the given repository.
    pub fn new(repo: Arc<dyn CursoRepository>) -> Self {
        Self { repo }
    }

    /// Register a new course. Returns the persisted course.
    pub async fn cadastrar(&self, novo: NovoCurso) -> Result<Curso, CoreError> {
        match self.repo.get_by_nome(&novo.nome).await {
            Ok(_) => {
                return Err(RepositoryError::AlreadyExists(format!(
                    "Curso com nome '{}' já existe",
                    novo.nome
                ))
                .into());
            }
            Err(RepositoryError::NotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }

        let conteudo = ConteudoProgramatico::new(novo.finalidade, novo.ementa)?;
        let curso = Curso::new(novo.nome, novo.valor, conteudo)?;
        self.repo.insert(&curso).await?;

        tracing::info!(curso_id = %curso.id, nome = %curso.nome, "Curso cadastrado");
        Ok(curso)
    }

    /// Update name, price and syllabus of an existing course.
    pub async fn atualizar(&self, id: Uuid, dados: AtualizacaoCurso) -> Result<(), CoreError> {
        let mut curso = self.repo.get_by_id(id).await?;

        let conteudo = ConteudoProgramatico::new(dados.finalidade, dados.ementa)?;
        curso.atualizar(dados.nome, dados.valor, conteudo)?;
        self.repo.update(&curso).await?;
        Ok(())
    }

    /// Remove a course from the active catalog.
    pub async fn desativar(&self, id: Uuid) -> Result<(), CoreError> {
        let mut curso = self.repo.get_by_id(id).await?;
        curso.desativar();
        self.repo.update(&curso).await?;

        tracing::info!(curso_id = %id, "Curso desativado");
        Ok(())
    }

    /// Return a course to the active catalog.
    pub async fn ativar(&self, id: Uuid) -> Result<(), CoreError> {
        let mut curso = self.repo.get_by_id(id).await?;
        curso.ativar();
        self.repo.update(&curso).await?;
        Ok(())
    }

    /// Get a course by ID.
    pub async fn obter(&self, id: Uuid) -> Result<Curso, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// List only active courses.
    pub async fn listar_ativos(&self) -> Result<Vec<Curso>, CoreError> {
        self.repo.list_ativos().await.map_err(CoreError::from)
    }

    /// List all courses, active or not.
    pub async fn listar_todos(&self) -> Result<Vec<Curso>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::eq;

    use super::*;

    mock! {
        CursoRepo {}

        #[async_trait::async_trait]
        impl CursoRepository for CursoRepo {
            async fn list(&self) -> Result<Vec<Curso>, RepositoryError>;
            async fn list_ativos(&self) -> Result<Vec<Curso>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Curso, RepositoryError>;
            async fn get_by_nome(&self, nome: &str) -> Result<Curso, RepositoryError>;
            async fn insert(&self, curso: &Curso) -> Result<(), RepositoryError>;
            async fn update(&self, curso: &Curso) -> Result<(), RepositoryError>;
        }
    }

    fn novo_curso() -> NovoCurso {
        NovoCurso {
            nome: "Curso de DDD".into(),
            valor: 299.90,
            finalidade: "Formar o aluno em conceitos de DDD".into(),
            ementa: "Conceitos básicos e avançados de Domain Driven Design, com suporte a CQRS"
                .into(),
        }
    }

    #[tokio::test]
    async fn cadastrar_persiste_curso_valido() {
        let mut repo = MockCursoRepo::new();
        repo.expect_get_by_nome()
            .with(eq("Curso de DDD"))
            .returning(|nome| Err(RepositoryError::NotFound(nome.to_string())));
        repo.expect_insert().times(1).returning(|_| Ok(()));

        let service = CursoService::new(Arc::new(repo));
        let curso = service.cadastrar(novo_curso()).await.unwrap();

        assert_eq!(curso.nome, "Curso de DDD");
        assert!(curso.ativo);
    }

    #[tokio::test]
    async fn cadastrar_rejeita_nome_duplicado() {
        let mut repo = MockCursoRepo::new();
        repo.expect_get_by_nome().returning(|_| {
            let conteudo =
                ConteudoProgramatico::new("Formar o aluno em conceitos de DDD", "e".repeat(50))
                    .unwrap();
            Ok(Curso::new("Curso de DDD", 100.0, conteudo).unwrap())
        });
        repo.expect_insert().never();

        let service = CursoService::new(Arc::new(repo));
        let err = service.cadastrar(novo_curso()).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn cadastrar_propaga_erro_de_dominio_sem_persistir() {
        let mut repo = MockCursoRepo::new();
        repo.expect_get_by_nome()
            .returning(|nome| Err(RepositoryError::NotFound(nome.to_string())));
        repo.expect_insert().never();

        let service = CursoService::new(Arc::new(repo));
        let mut novo = novo_curso();
        novo.ementa = "abc".into();

        let err = service.cadastrar(novo).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Ementa do conteúdo programático deve ter entre 50 e 4000 caracteres"
        );
    }

    #[tokio::test]
    async fn desativar_atualiza_o_estado_persistido() {
        let conteudo =
            ConteudoProgramatico::new("Formar o aluno em conceitos de DDD", "e".repeat(50))
                .unwrap();
        let curso = Curso::new("Curso de DDD", 100.0, conteudo).unwrap();
        let id = curso.id;

        let mut repo = MockCursoRepo::new();
        repo.expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(curso.clone()));
        repo.expect_update()
            .withf(|curso| !curso.ativo)
            .times(1)
            .returning(|_| Ok(()));

        let service = CursoService::new(Arc::new(repo));
        service.desativar(id).await.unwrap();
    }

    #[tokio::test]
    async fn obter_propaga_not_found() {
        let mut repo = MockCursoRepo::new();
        repo.expect_get_by_id()
            .returning(|id| Err(RepositoryError::NotFound(id.to_string())));

        let service = CursoService::new(Arc::new(repo));
        let err = service.obter(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));
    }
}
