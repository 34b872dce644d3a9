/// Resultado de uma consulta ao cadastro público da Receita.
///
/// Os três desfechos são variantes explícitas para que quem consome
/// seja obrigado a tratar cadastro encontrado, CNPJ não encontrado e
/// falha de consulta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceitaRecord {
    Found {
        cnpj: String,
        razao_social: String,
        municipio: String,
        situacao: String,
    },
    NotFound {
        cnpj: String,
    },
    Failed {
        cnpj: String,
        message: String,
    },
}

impl ReceitaRecord {
    pub fn cnpj(&self) -> &str {
        match self {
            ReceitaRecord::Found { cnpj, .. }
            | ReceitaRecord::NotFound { cnpj }
            | ReceitaRecord::Failed { cnpj, .. } => cnpj,
        }
    }

    /// Razão social informada pela Receita; vazia quando o cadastro
    /// não foi encontrado ou a consulta falhou.
    pub fn razao_social(&self) -> &str {
        match self {
            ReceitaRecord::Found { razao_social, .. } => razao_social,
            _ => "",
        }
    }

    pub fn municipio(&self) -> &str {
        match self {
            ReceitaRecord::Found { municipio, .. } => municipio,
            _ => "",
        }
    }

    /// Texto da situação cadastral para exibição. Não carrega veredito.
    pub fn situacao(&self) -> String {
        match self {
            ReceitaRecord::Found { situacao, .. } => situacao.clone(),
            ReceitaRecord::NotFound { .. } => "Não encontrado na Receita".to_string(),
            ReceitaRecord::Failed { message, .. } => format!("Erro: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_accessors() {
        let record = ReceitaRecord::Found {
            cnpj: "12.345.678/0001-95".into(),
            razao_social: "ACME LTDA".into(),
            municipio: "São Paulo".into(),
            situacao: "Ativa".into(),
        };

        assert_eq!(record.cnpj(), "12.345.678/0001-95");
        assert_eq!(record.razao_social(), "ACME LTDA");
        assert_eq!(record.municipio(), "São Paulo");
        assert_eq!(record.situacao(), "Ativa");
    }

    #[test]
    fn test_not_found_display() {
        let record = ReceitaRecord::NotFound {
            cnpj: "12.345.678/0001-95".into(),
        };

        assert_eq!(record.razao_social(), "");
        assert_eq!(record.municipio(), "");
        assert_eq!(record.situacao(), "Não encontrado na Receita");
    }

    #[test]
    fn test_failed_display_embeds_message() {
        let record = ReceitaRecord::Failed {
            cnpj: "12.345.678/0001-95".into(),
            message: "operation timed out".into(),
        };

        assert_eq!(record.situacao(), "Erro: operation timed out");
        assert_eq!(record.razao_social(), "");
    }
}
