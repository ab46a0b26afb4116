//! Certificate issued for a completed enrollment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DomainError, char_len, is_blank};

/// Certificate record tied one-to-one to an enrollment.
///
/// The uniqueness invariant (one certificate per enrollment) is enforced
/// by the persistence layer; this type guards the field constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificado {
    pub id: Uuid,
    pub matricula_curso_id: Uuid,
    pub data_solicitacao: DateTime<Utc>,
    pub path_certificado: String,
}

impl Certificado {
    /// Maximum length of the certificate file path.
    pub const PATH_MAX: usize = 1024;

    /// Validates and builds a certificate request for an enrollment.
    pub fn new(
        matricula_curso_id: Uuid,
        path_certificado: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let path_certificado = path_certificado.into();

        if is_blank(&path_certificado) {
            return Err(DomainError::validation(
                "Path do certificado não pode ser vazio ou nulo",
            ));
        }
        if char_len(&path_certificado) > Self::PATH_MAX {
            return Err(DomainError::validation(format!(
                "Path do certificado deve ter no máximo {} caracteres",
                Self::PATH_MAX
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            matricula_curso_id,
            data_solicitacao: Utc::now(),
            path_certificado,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deve_criar_certificado_valido() {
        let matricula_id = Uuid::new_v4();
        let certificado = Certificado::new(matricula_id, "/certificados/2026/abc.pdf").unwrap();

        assert_eq!(certificado.matricula_curso_id, matricula_id);
        assert_eq!(certificado.path_certificado, "/certificados/2026/abc.pdf");
    }

    #[test]
    fn nao_deve_criar_certificado_sem_path() {
        let err = Certificado::new(Uuid::new_v4(), "  ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Path do certificado não pode ser vazio ou nulo"
        );
    }

    #[test]
    fn path_respeita_o_limite_de_1024_caracteres() {
        assert!(Certificado::new(Uuid::new_v4(), "p".repeat(1024)).is_ok());

        let err = Certificado::new(Uuid::new_v4(), "p".repeat(1025)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Path do certificado deve ter no máximo 1024 caracteres"
        );
    }
}
