//! Student, enrollment and certificate DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use educa_core::{Aluno, Certificado, EstadoMatricula, MatriculaCurso, NovoAluno};

/// Body of `POST /api/aluno`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadastroAlunoRequest {
    pub nome: String,
    pub email: String,
}

impl From<CadastroAlunoRequest> for NovoAluno {
    fn from(req: CadastroAlunoRequest) -> Self {
        Self {
            nome: req.nome,
            email: req.email,
        }
    }
}

/// Student representation returned by lookups.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlunoResponse {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub criado_em: DateTime<Utc>,
}

impl From<Aluno> for AlunoResponse {
    fn from(aluno: Aluno) -> Self {
        Self {
            id: aluno.id,
            nome: aluno.nome,
            email: aluno.email,
            criado_em: aluno.criado_em,
        }
    }
}

/// Body of `POST /api/aluno/{alunoId}/matriculas`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatriculaRequest {
    pub curso_id: Uuid,
}

/// Enrollment representation.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatriculaResponse {
    pub id: Uuid,
    pub aluno_id: Uuid,
    pub curso_id: Uuid,
    pub data_matricula: DateTime<Utc>,
    pub estado: EstadoMatricula,
}

impl From<MatriculaCurso> for MatriculaResponse {
    fn from(matricula: MatriculaCurso) -> Self {
        Self {
            id: matricula.id,
            aluno_id: matricula.aluno_id,
            curso_id: matricula.curso_id,
            data_matricula: matricula.data_matricula,
            estado: matricula.estado,
        }
    }
}

/// Body of `POST /api/matricula/{matriculaId}/certificado`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitacaoCertificadoRequest {
    pub path_certificado: String,
}

/// Certificate representation.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificadoResponse {
    pub id: Uuid,
    pub matricula_curso_id: Uuid,
    pub data_solicitacao: DateTime<Utc>,
    pub path_certificado: String,
}

impl From<Certificado> for CertificadoResponse {
    fn from(certificado: Certificado) -> Self {
        Self {
            id: certificado.id,
            matricula_curso_id: certificado.matricula_curso_id,
            data_solicitacao: certificado.data_solicitacao,
            path_certificado: certificado.path_certificado,
        }
    }
}
