//! Student service - enrollment and certificate workflows.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Aluno, Certificado, DomainError, MatriculaCurso, NovoAluno};
use crate::ports::{AlunoRepository, CoreError, CursoRepository, RepositoryError};

/// Service for student registration, enrollment and certificates.
///
/// Needs both repositories: enrolling checks the course catalog before
/// touching the student aggregate.
pub struct AlunoService {
    alunos: Arc<dyn AlunoRepository>,
    cursos: Arc<dyn CursoRepository>,
}

impl AlunoService {
    /// Create a new student service over both repositories.
    pub fn new(alunos: Arc<dyn AlunoRepository>, cursos: Arc<dyn CursoRepository>) -> Self {
        Self { alunos, cursos }
    }

    /// Register a new student. Returns the persisted student.
    pub async fn cadastrar(&self, novo: NovoAluno) -> Result<Aluno, CoreError> {
        match self.alunos.get_by_email(&novo.email).await {
            Ok(_) => {
                return Err(RepositoryError::AlreadyExists(format!(
                    "Aluno com email '{}' já existe",
                    novo.email
                ))
                .into());
            }
            Err(RepositoryError::NotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }

        let aluno = Aluno::new(novo.nome, novo.email)?;
        self.alunos.insert(&aluno).await?;

        tracing::info!(aluno_id = %aluno.id, "Aluno cadastrado");
        Ok(aluno)
    }

    /// Get a student by ID.
    pub async fn obter(&self, id: Uuid) -> Result<Aluno, CoreError> {
        self.alunos.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Enroll a student in an active course.
    pub async fn matricular(
        &self,
        aluno_id: Uuid,
        curso_id: Uuid,
    ) -> Result<MatriculaCurso, CoreError> {
        let aluno = self.alunos.get_by_id(aluno_id).await?;
        let curso = self.cursos.get_by_id(curso_id).await?;

        if !curso.ativo {
            return Err(DomainError::InvalidState(
                "Curso inativo não aceita novas matrículas".into(),
            )
            .into());
        }

        let matricula = MatriculaCurso::new(aluno.id, curso.id);
        self.alunos.insert_matricula(&matricula).await?;

        tracing::info!(
            matricula_id = %matricula.id,
            aluno_id = %aluno_id,
            curso_id = %curso_id,
            "Matrícula efetuada"
        );
        Ok(matricula)
    }

    /// List all enrollments of a student.
    pub async fn listar_matriculas(
        &self,
        aluno_id: Uuid,
    ) -> Result<Vec<MatriculaCurso>, CoreError> {
        // Surface a 404 for unknown students rather than an empty list
        self.alunos.get_by_id(aluno_id).await?;
        self.alunos
            .list_matriculas_do_aluno(aluno_id)
            .await
            .map_err(CoreError::from)
    }

    /// Mark an enrollment as completed.
    pub async fn concluir_matricula(&self, matricula_id: Uuid) -> Result<(), CoreError> {
        let mut matricula = self.alunos.get_matricula(matricula_id).await?;
        matricula.concluir()?;
        self.alunos.update_matricula(&matricula).await?;
        Ok(())
    }

    /// Cancel an active enrollment.
    pub async fn cancelar_matricula(&self, matricula_id: Uuid) -> Result<(), CoreError> {
        let mut matricula = self.alunos.get_matricula(matricula_id).await?;
        matricula.cancelar()?;
        self.alunos.update_matricula(&matricula).await?;
        Ok(())
    }

    /// Request a certificate for a completed enrollment.
    ///
    /// Each enrollment gets exactly one certificate; a second request is
    /// rejected by the repository with `AlreadyExists`.
    pub async fn solicitar_certificado(
        &self,
        matricula_id: Uuid,
        path_certificado: String,
    ) -> Result<Certificado, CoreError> {
        let matricula = self.alunos.get_matricula(matricula_id).await?;

        if !matricula.concluida() {
            return Err(DomainError::InvalidState(
                "Certificado só pode ser solicitado para matrícula concluída".into(),
            )
            .into());
        }

        let certificado = Certificado::new(matricula.id, path_certificado)?;
        self.alunos.insert_certificado(&certificado).await?;

        tracing::info!(
            certificado_id = %certificado.id,
            matricula_id = %matricula_id,
            "Certificado solicitado"
        );
        Ok(certificado)
    }

    /// Get the certificate issued for an enrollment.
    pub async fn obter_certificado(&self, matricula_id: Uuid) -> Result<Certificado, CoreError> {
        self.alunos
            .get_certificado_by_matricula(matricula_id)
            .await
            .map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{ConteudoProgramatico, Curso};

    mock! {
        AlunoRepo {}

        #[async_trait::async_trait]
        impl AlunoRepository for AlunoRepo {
            async fn insert(&self, aluno: &Aluno) -> Result<(), RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Aluno, RepositoryError>;
            async fn get_by_email(&self, email: &str) -> Result<Aluno, RepositoryError>;
            async fn insert_matricula(
                &self,
                matricula: &MatriculaCurso,
            ) -> Result<(), RepositoryError>;
            async fn get_matricula(&self, id: Uuid) -> Result<MatriculaCurso, RepositoryError>;
            async fn list_matriculas_do_aluno(
                &self,
                aluno_id: Uuid,
            ) -> Result<Vec<MatriculaCurso>, RepositoryError>;
            async fn update_matricula(
                &self,
                matricula: &MatriculaCurso,
            ) -> Result<(), RepositoryError>;
            async fn insert_certificado(
                &self,
                certificado: &Certificado,
            ) -> Result<(), RepositoryError>;
            async fn get_certificado_by_matricula(
                &self,
                matricula_curso_id: Uuid,
            ) -> Result<Certificado, RepositoryError>;
        }
    }

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

    fn aluno() -> Aluno {
        Aluno::new("Maria Silva", "maria@exemplo.com").unwrap()
    }

    fn curso(ativo: bool) -> Curso {
        let conteudo =
            ConteudoProgramatico::new("Formar o aluno em conceitos de DDD", "e".repeat(50))
                .unwrap();
        let mut curso = Curso::new("Curso de DDD", 100.0, conteudo).unwrap();
        if !ativo {
            curso.desativar();
        }
        curso
    }

    #[tokio::test]
    async fn matricular_exige_curso_ativo() {
        let aluno = aluno();
        let aluno_id = aluno.id;
        let curso = curso(false);
        let curso_id = curso.id;

        let mut alunos = MockAlunoRepo::new();
        alunos
            .expect_get_by_id()
            .with(eq(aluno_id))
            .returning(move |_| Ok(aluno.clone()));
        alunos.expect_insert_matricula().never();

        let mut cursos = MockCursoRepo::new();
        cursos
            .expect_get_by_id()
            .with(eq(curso_id))
            .returning(move |_| Ok(curso.clone()));

        let service = AlunoService::new(Arc::new(alunos), Arc::new(cursos));
        let err = service.matricular(aluno_id, curso_id).await.unwrap_err();

        assert_eq!(err.to_string(), "Curso inativo não aceita novas matrículas");
    }

    #[tokio::test]
    async fn matricular_cria_matricula_ativa() {
        let aluno = aluno();
        let aluno_id = aluno.id;
        let curso = curso(true);
        let curso_id = curso.id;

        let mut alunos = MockAlunoRepo::new();
        alunos
            .expect_get_by_id()
            .returning(move |_| Ok(aluno.clone()));
        alunos
            .expect_insert_matricula()
            .times(1)
            .returning(|_| Ok(()));

        let mut cursos = MockCursoRepo::new();
        cursos
            .expect_get_by_id()
            .returning(move |_| Ok(curso.clone()));

        let service = AlunoService::new(Arc::new(alunos), Arc::new(cursos));
        let matricula = service.matricular(aluno_id, curso_id).await.unwrap();

        assert_eq!(matricula.aluno_id, aluno_id);
        assert_eq!(matricula.curso_id, curso_id);
        assert!(!matricula.concluida());
    }

    #[tokio::test]
    async fn certificado_exige_matricula_concluida() {
        let matricula = MatriculaCurso::new(Uuid::new_v4(), Uuid::new_v4());
        let matricula_id = matricula.id;

        let mut alunos = MockAlunoRepo::new();
        alunos
            .expect_get_matricula()
            .with(eq(matricula_id))
            .returning(move |_| Ok(matricula.clone()));
        alunos.expect_insert_certificado().never();

        let service = AlunoService::new(Arc::new(alunos), Arc::new(MockCursoRepo::new()));
        let err = service
            .solicitar_certificado(matricula_id, "/certificados/abc.pdf".into())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Certificado só pode ser solicitado para matrícula concluída"
        );
    }

    #[tokio::test]
    async fn certificado_e_emitido_para_matricula_concluida() {
        let mut matricula = MatriculaCurso::new(Uuid::new_v4(), Uuid::new_v4());
        matricula.concluir().unwrap();
        let matricula_id = matricula.id;

        let mut alunos = MockAlunoRepo::new();
        alunos
            .expect_get_matricula()
            .returning(move |_| Ok(matricula.clone()));
        alunos
            .expect_insert_certificado()
            .times(1)
            .returning(|_| Ok(()));

        let service = AlunoService::new(Arc::new(alunos), Arc::new(MockCursoRepo::new()));
        let certificado = service
            .solicitar_certificado(matricula_id, "/certificados/abc.pdf".into())
            .await
            .unwrap();

        assert_eq!(certificado.matricula_curso_id, matricula_id);
    }

    #[tokio::test]
    async fn cadastrar_rejeita_email_duplicado() {
        let existente = aluno();

        let mut alunos = MockAlunoRepo::new();
        alunos
            .expect_get_by_email()
            .with(eq("maria@exemplo.com"))
            .returning(move |_| Ok(existente.clone()));
        alunos.expect_insert().never();

        let service = AlunoService::new(Arc::new(alunos), Arc::new(MockCursoRepo::new()));
        let err = service
            .cadastrar(NovoAluno {
                nome: "Maria Silva".into(),
                email: "maria@exemplo.com".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::AlreadyExists(_))
        ));
    }
}
