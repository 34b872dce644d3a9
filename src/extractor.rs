//! Extração de CNPJs do texto das células.
//!
//! Só interessa a forma sintática `00.000.000/0000-00`; dígitos
//! verificadores não são validados aqui.

use crate::sheet::CellTable;
use regex::Regex;
use std::collections::HashSet;

/// Todas as ocorrências do padrão de CNPJ, da esquerda para a direita.
/// Nunca falha; texto sem ocorrências devolve um vetor vazio.
pub fn extract_cnpjs(text: &str) -> Vec<String> {
    lazy_static::lazy_static! {
        static ref CNPJ_RE: Regex = Regex::new(r"\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}").unwrap();
    }

    CNPJ_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// CNPJs de toda a tabela, sem repetição, na ordem da primeira ocorrência.
pub fn unique_cnpjs(table: &CellTable) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for cell in &table.cells {
        for cnpj in extract_cnpjs(cell) {
            if seen.insert(cnpj.clone()) {
                unique.push(cnpj);
            }
        }
    }

    unique
}
