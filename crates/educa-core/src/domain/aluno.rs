//! Student aggregate root.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DomainError, char_len, is_blank};

/// A student registered on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aluno {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub criado_em: DateTime<Utc>,
}

/// Input for registering a new student.
#[derive(Debug, Clone)]
pub struct NovoAluno {
    pub nome: String,
    pub email: String,
}

impl Aluno {
    /// Inclusive bounds for the student name length.
    pub const NOME_BOUNDS: (usize, usize) = (3, 100);
    /// Maximum e-mail length, per RFC 5321.
    pub const EMAIL_MAX: usize = 254;

    /// Validates and builds a new student.
    pub fn new(nome: impl Into<String>, email: impl Into<String>) -> Result<Self, DomainError> {
        let nome = nome.into();
        let email = email.into();

        if is_blank(&nome) {
            return Err(DomainError::validation(
                "Nome do aluno não pode ser vazio ou nulo",
            ));
        }
        let (min, max) = Self::NOME_BOUNDS;
        let len = char_len(&nome);
        if len < min || len > max {
            return Err(DomainError::validation(format!(
                "Nome do aluno deve ter entre {min} e {max} caracteres"
            )));
        }

        if is_blank(&email) {
            return Err(DomainError::validation(
                "Email do aluno não pode ser vazio ou nulo",
            ));
        }
        if char_len(&email) > Self::EMAIL_MAX || !email_plausivel(&email) {
            return Err(DomainError::validation("Email do aluno é inválido"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            nome,
            email,
            criado_em: Utc::now(),
        })
    }
}

/// Shape check only: `local@domain` with a dot somewhere in the domain.
/// Real deliverability is out of scope.
fn email_plausivel(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deve_criar_aluno_valido() {
        let aluno = Aluno::new("Maria Silva", "maria@exemplo.com").unwrap();

        assert_eq!(aluno.nome, "Maria Silva");
        assert_eq!(aluno.email, "maria@exemplo.com");
    }

    #[test]
    fn nao_deve_criar_aluno_com_nome_invalido() {
        let err = Aluno::new("", "maria@exemplo.com").unwrap_err();
        assert_eq!(err.to_string(), "Nome do aluno não pode ser vazio ou nulo");

        let err = Aluno::new("ab", "maria@exemplo.com").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Nome do aluno deve ter entre 3 e 100 caracteres"
        );
    }

    #[test]
    fn nao_deve_criar_aluno_com_email_invalido() {
        for email in ["sem-arroba", "@dominio.com", "maria@", "maria@semponto"] {
            let err = Aluno::new("Maria Silva", email).unwrap_err();
            assert_eq!(err.to_string(), "Email do aluno é inválido");
        }

        let err = Aluno::new("Maria Silva", "").unwrap_err();
        assert_eq!(err.to_string(), "Email do aluno não pode ser vazio ou nulo");
    }
}
