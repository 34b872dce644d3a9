//! Conferência dos dados da Receita contra a planilha.
//!
//! Um campo "confere" quando o valor devolvido pela Receita aparece como
//! substring de alguma célula da tabela inteira, não só da linha onde o
//! CNPJ foi encontrado. Sempre substring, nunca igualdade exata.

mod types;

pub use types::FieldVerdict;

use crate::receita::ReceitaRecord;
use crate::sheet::CellTable;

/// Produz os quatro vereditos de um registro, na ordem fixa do relatório:
/// CNPJ, razão social, município e situação cadastral.
pub fn reconcile(record: &ReceitaRecord, table: &CellTable) -> Vec<FieldVerdict> {
    vec![
        FieldVerdict {
            label: "CNPJ",
            value: record.cnpj().to_string(),
            verdict: Some(contains_exact(table, record.cnpj())),
        },
        FieldVerdict {
            label: "Razão Social",
            value: record.razao_social().to_string(),
            verdict: Some(contains_ci(table, record.razao_social())),
        },
        FieldVerdict {
            label: "Município",
            value: record.municipio().to_string(),
            verdict: Some(contains_ci(table, record.municipio())),
        },
        FieldVerdict {
            label: "Situação Cadastral",
            value: record.situacao(),
            verdict: None,
        },
    ]
}

/// CNPJ compara byte a byte; só tem dígito e pontuação.
/// Valor vazio nunca confere.
fn contains_exact(table: &CellTable, needle: &str) -> bool {
    !needle.is_empty() && table.cells.iter().any(|cell| cell.contains(needle))
}

/// Razão social e município comparam sem diferenciar caixa.
/// Valor vazio nunca confere.
fn contains_ci(table: &CellTable, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    let needle = needle.to_lowercase();
    table
        .cells
        .iter()
        .any(|cell| cell.to_lowercase().contains(&needle))
}
