//! Course DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use educa_core::{AtualizacaoCurso, Curso, NovoCurso};

/// Body of `POST /api/curso`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadastroCursoRequest {
    pub nome: String,
    pub valor: f64,
    pub finalidade: String,
    pub ementa: String,
}

impl From<CadastroCursoRequest> for NovoCurso {
    fn from(req: CadastroCursoRequest) -> Self {
        Self {
            nome: req.nome,
            valor: req.valor,
            finalidade: req.finalidade,
            ementa: req.ementa,
        }
    }
}

/// Body of `PUT /api/curso/{cursoId}`.
///
/// Carries the course id redundantly; the handler rejects the request
/// when it disagrees with the path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizacaoCursoRequest {
    pub id: Uuid,
    pub nome: String,
    pub valor: f64,
    pub finalidade: String,
    pub ementa: String,
}

impl From<AtualizacaoCursoRequest> for AtualizacaoCurso {
    fn from(req: AtualizacaoCursoRequest) -> Self {
        Self {
            nome: req.nome,
            valor: req.valor,
            finalidade: req.finalidade,
            ementa: req.ementa,
        }
    }
}

/// Payload returned by course creation.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursoCriadoResponse {
    pub curso_id: Uuid,
}

/// Course representation returned by lookups and listings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursoResponse {
    pub id: Uuid,
    pub nome: String,
    pub valor: f64,
    pub ativo: bool,
    pub finalidade: String,
    pub ementa: String,
    pub criado_em: DateTime<Utc>,
}

impl From<Curso> for CursoResponse {
    fn from(curso: Curso) -> Self {
        Self {
            id: curso.id,
            nome: curso.nome,
            valor: curso.valor,
            ativo: curso.ativo,
            finalidade: curso.conteudo.finalidade().to_string(),
            ementa: curso.conteudo.ementa().to_string(),
            criado_em: curso.criado_em,
        }
    }
}
