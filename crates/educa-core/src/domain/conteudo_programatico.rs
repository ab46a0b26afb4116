//! Course syllabus value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DomainError, char_len, is_blank};

/// Immutable syllabus of a course: its purpose and curriculum summary.
///
/// Two instances with identical `(finalidade, ementa)` pairs are equal
/// regardless of which course owns them; equality and hashing are
/// structural over both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConteudoProgramatico {
    finalidade: String,
    ementa: String,
}

impl ConteudoProgramatico {
    /// Minimum and maximum length of the purpose field, inclusive.
    pub const FINALIDADE_BOUNDS: (usize, usize) = (10, 100);
    /// Minimum and maximum length of the curriculum summary, inclusive.
    pub const EMENTA_BOUNDS: (usize, usize) = (50, 4000);

    /// Validates and builds a syllabus.
    ///
    /// Lengths are counted in Unicode scalar values so accented
    /// Portuguese text behaves as users expect.
    pub fn new(
        finalidade: impl Into<String>,
        ementa: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let finalidade = finalidade.into();
        let ementa = ementa.into();

        if is_blank(&finalidade) {
            return Err(DomainError::validation(
                "Finalidade não pode ser vazia ou nula",
            ));
        }
        let (min, max) = Self::FINALIDADE_BOUNDS;
        let len = char_len(&finalidade);
        if len < min || len > max {
            return Err(DomainError::validation(format!(
                "Finalidade do conteúdo programático deve ter entre {min} e {max} caracteres"
            )));
        }

        if is_blank(&ementa) {
            return Err(DomainError::validation(
                "Ementa do conteúdo programático não pode ser vazia ou nula",
            ));
        }
        let (min, max) = Self::EMENTA_BOUNDS;
        let len = char_len(&ementa);
        if len < min || len > max {
            return Err(DomainError::validation(format!(
                "Ementa do conteúdo programático deve ter entre {min} e {max} caracteres"
            )));
        }

        Ok(Self { finalidade, ementa })
    }

    /// The purpose of the course.
    pub fn finalidade(&self) -> &str {
        &self.finalidade
    }

    /// The curriculum summary.
    pub fn ementa(&self) -> &str {
        &self.ementa
    }
}

impl fmt::Display for ConteudoProgramatico {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Conteúdo programático: {}", self.finalidade)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    const FINALIDADE_VALIDA: &str = "Formar o aluno em conceitos de DDD";
    const EMENTA_VALIDA: &str = "Conceitos básicos e avançados de Domain Driven Design, com \
                                 suporte a CQRS e mais um monte de coisas que você não pode perder";

    fn criar_conteudo(finalidade: &str, ementa: &str) -> Result<ConteudoProgramatico, DomainError> {
        ConteudoProgramatico::new(finalidade, ementa)
    }

    fn hash_of(value: &ConteudoProgramatico) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn deve_criar_conteudo_programatico_valido() {
        let conteudo = criar_conteudo(FINALIDADE_VALIDA, EMENTA_VALIDA).unwrap();

        assert_eq!(conteudo.finalidade(), FINALIDADE_VALIDA);
        assert_eq!(conteudo.ementa(), EMENTA_VALIDA);
    }

    #[test]
    fn nao_deve_criar_conteudo_invalido() {
        let casos = [
            ("", EMENTA_VALIDA, "Finalidade não pode ser vazia ou nula"),
            (
                "abc",
                EMENTA_VALIDA,
                "Finalidade do conteúdo programático deve ter entre 10 e 100 caracteres",
            ),
            (
                FINALIDADE_VALIDA,
                "",
                "Ementa do conteúdo programático não pode ser vazia ou nula",
            ),
            (
                FINALIDADE_VALIDA,
                "abc",
                "Ementa do conteúdo programático deve ter entre 50 e 4000 caracteres",
            ),
        ];

        for (finalidade, ementa, mensagem) in casos {
            let err = criar_conteudo(finalidade, ementa).unwrap_err();
            assert_eq!(err.to_string(), mensagem);
        }
    }

    #[test]
    fn aceita_valores_exatamente_nos_limites() {
        let finalidade_min = "a".repeat(10);
        let finalidade_max = "a".repeat(100);
        let ementa_min = "e".repeat(50);
        let ementa_max = "e".repeat(4000);

        assert!(criar_conteudo(&finalidade_min, &ementa_min).is_ok());
        assert!(criar_conteudo(&finalidade_max, &ementa_max).is_ok());
        assert!(criar_conteudo(&"a".repeat(9), &ementa_min).is_err());
        assert!(criar_conteudo(&"a".repeat(101), &ementa_min).is_err());
        assert!(criar_conteudo(&finalidade_min, &"e".repeat(49)).is_err());
        assert!(criar_conteudo(&finalidade_min, &"e".repeat(4001)).is_err());
    }

    #[test]
    fn limites_contam_caracteres_e_nao_bytes() {
        // 10 accented characters occupy 20 bytes in UTF-8
        let finalidade = "ãçéíõúâêôà";
        assert_eq!(finalidade.chars().count(), 10);
        assert!(criar_conteudo(finalidade, &"e".repeat(50)).is_ok());
    }

    #[test]
    fn conteudos_iguais_devem_ser_tratados_como_iguais() {
        let conteudo1 = criar_conteudo(FINALIDADE_VALIDA, EMENTA_VALIDA).unwrap();
        let conteudo2 = criar_conteudo(FINALIDADE_VALIDA, EMENTA_VALIDA).unwrap();

        assert_eq!(conteudo1, conteudo2);
        assert_eq!(hash_of(&conteudo1), hash_of(&conteudo2));
    }

    #[test]
    fn conteudos_diferentes_nao_devem_ser_iguais() {
        let conteudo1 = criar_conteudo(FINALIDADE_VALIDA, EMENTA_VALIDA).unwrap();
        let conteudo2 = criar_conteudo("Nova finalidade valida", EMENTA_VALIDA).unwrap();

        assert_ne!(conteudo1, conteudo2);
    }

    #[test]
    fn display_contem_finalidade() {
        let conteudo = criar_conteudo(FINALIDADE_VALIDA, EMENTA_VALIDA).unwrap();
        assert!(conteudo.to_string().contains(FINALIDADE_VALIDA));
    }
}
