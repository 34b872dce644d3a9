//! Montagem do relatório final.
//!
//! Quatro linhas por CNPJ, sempre na mesma ordem; valores vazios viram
//! o marcador `-` e vereditos viram `Sim`/`Não`.

use crate::matcher::{self, FieldVerdict};
use crate::receita::ReceitaRecord;
use crate::sheet::CellTable;
use serde::Serialize;

/// Linha do relatório, no mesmo formato do CSV exportado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Informação")]
    pub informacao: String,

    #[serde(rename = "Confere")]
    pub confere: String,
}

/// Converte os vereditos de um CNPJ nas quatro linhas do relatório.
pub fn aggregate(verdicts: &[FieldVerdict]) -> Vec<ReportRow> {
    verdicts
        .iter()
        .map(|v| {
            let value = if v.value.is_empty() {
                "-"
            } else {
                v.value.as_str()
            };

            ReportRow {
                informacao: format!("{}: {}", v.label, value),
                confere: match v.verdict {
                    Some(true) => "Sim".to_string(),
                    Some(false) => "Não".to_string(),
                    None => String::new(),
                },
            }
        })
        .collect()
}

/// Relatório completo, concatenando os registros na ordem de consulta.
pub fn build_report(records: &[ReceitaRecord], table: &CellTable) -> Vec<ReportRow> {
    records
        .iter()
        .flat_map(|record| aggregate(&matcher::reconcile(record, table)))
        .collect()
}
