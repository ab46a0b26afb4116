//! Course aggregate root.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ConteudoProgramatico, DomainError, char_len, is_blank};

/// A course offered by the platform.
///
/// Courses are created active and carry their syllabus as an embedded
/// value object. Identity is the generated UUID; the name is unique at
/// the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curso {
    pub id: Uuid,
    pub nome: String,
    pub valor: f64,
    pub ativo: bool,
    pub conteudo: ConteudoProgramatico,
    pub criado_em: DateTime<Utc>,
}

/// Input for registering a new course.
#[derive(Debug, Clone)]
pub struct NovoCurso {
    pub nome: String,
    pub valor: f64,
    pub finalidade: String,
    pub ementa: String,
}

/// Input for updating an existing course.
#[derive(Debug, Clone)]
pub struct AtualizacaoCurso {
    pub nome: String,
    pub valor: f64,
    pub finalidade: String,
    pub ementa: String,
}

impl Curso {
    /// Inclusive bounds for the course name length.
    pub const NOME_BOUNDS: (usize, usize) = (5, 200);

    /// Validates and builds a new, active course.
    pub fn new(
        nome: impl Into<String>,
        valor: f64,
        conteudo: ConteudoProgramatico,
    ) -> Result<Self, DomainError> {
        let nome = nome.into();
        Self::validar_nome(&nome)?;
        Self::validar_valor(valor)?;

        Ok(Self {
            id: Uuid::new_v4(),
            nome,
            valor,
            ativo: true,
            conteudo,
            criado_em: Utc::now(),
        })
    }

    /// Replaces name, price and syllabus after revalidation.
    pub fn atualizar(
        &mut self,
        nome: impl Into<String>,
        valor: f64,
        conteudo: ConteudoProgramatico,
    ) -> Result<(), DomainError> {
        let nome = nome.into();
        Self::validar_nome(&nome)?;
        Self::validar_valor(valor)?;

        self.nome = nome;
        self.valor = valor;
        self.conteudo = conteudo;
        Ok(())
    }

    /// Removes the course from the active catalog.
    pub fn desativar(&mut self) {
        self.ativo = false;
    }

    /// Returns the course to the active catalog.
    pub fn ativar(&mut self) {
        self.ativo = true;
    }

    fn validar_nome(nome: &str) -> Result<(), DomainError> {
        if is_blank(nome) {
            return Err(DomainError::validation(
                "Nome do curso não pode ser vazio ou nulo",
            ));
        }
        let (min, max) = Self::NOME_BOUNDS;
        let len = char_len(nome);
        if len < min || len > max {
            return Err(DomainError::validation(format!(
                "Nome do curso deve ter entre {min} e {max} caracteres"
            )));
        }
        Ok(())
    }

    fn validar_valor(valor: f64) -> Result<(), DomainError> {
        if valor <= 0.0 || !valor.is_finite() {
            return Err(DomainError::validation(
                "Valor do curso deve ser maior que zero",
            ));
        }
        Ok(())
    }
}
