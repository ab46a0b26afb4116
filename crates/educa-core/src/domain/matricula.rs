//! Course enrollment entity and its state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DomainError;

/// Lifecycle state of an enrollment.
///
/// Persisted as lowercase text; certificates can only be requested for
/// completed enrollments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoMatricula {
    Ativa,
    Concluida,
    Cancelada,
}

impl EstadoMatricula {
    /// Textual form used in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ativa => "ativa",
            Self::Concluida => "concluida",
            Self::Cancelada => "cancelada",
        }
    }

    /// Parses the persisted textual form.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "ativa" => Ok(Self::Ativa),
            "concluida" => Ok(Self::Concluida),
            "cancelada" => Ok(Self::Cancelada),
            other => Err(DomainError::validation(format!(
                "Estado de matrícula desconhecido: {other}"
            ))),
        }
    }
}

/// Enrollment of a student in a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatriculaCurso {
    pub id: Uuid,
    pub aluno_id: Uuid,
    pub curso_id: Uuid,
    pub data_matricula: DateTime<Utc>,
    pub estado: EstadoMatricula,
}

impl MatriculaCurso {
    /// Creates an active enrollment linking a student to a course.
    pub fn new(aluno_id: Uuid, curso_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            aluno_id,
            curso_id,
            data_matricula: Utc::now(),
            estado: EstadoMatricula::Ativa,
        }
    }

    /// Marks the enrollment as completed. Only active enrollments can
    /// be completed.
    pub fn concluir(&mut self) -> Result<(), DomainError> {
        match self.estado {
            EstadoMatricula::Ativa => {
                self.estado = EstadoMatricula::Concluida;
                Ok(())
            }
            EstadoMatricula::Concluida => Err(DomainError::InvalidState(
                "Matrícula já foi concluída".into(),
            )),
            EstadoMatricula::Cancelada => Err(DomainError::InvalidState(
                "Matrícula cancelada não pode ser concluída".into(),
            )),
        }
    }

    /// Cancels the enrollment. Only active enrollments can be cancelled.
    pub fn cancelar(&mut self) -> Result<(), DomainError> {
        match self.estado {
            EstadoMatricula::Ativa => {
                self.estado = EstadoMatricula::Cancelada;
                Ok(())
            }
            _ => Err(DomainError::InvalidState(
                "Apenas matrículas ativas podem ser canceladas".into(),
            )),
        }
    }

    /// True when a certificate may be requested for this enrollment.
    pub fn concluida(&self) -> bool {
        self.estado == EstadoMatricula::Concluida
    }
}
