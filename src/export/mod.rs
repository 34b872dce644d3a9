//! Saída do relatório: CSV para arquivo e tabela para o terminal.

use crate::error::Result;
use crate::report::ReportRow;
use std::path::Path;

/// Grava o relatório em CSV UTF-8 com o cabeçalho fixo
/// `Informação,Confere`.
pub fn write_csv(rows: &[ReportRow], output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)?;

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Imprime o relatório alinhado em duas colunas.
pub fn print_table(rows: &[ReportRow]) {
    let header = "Informação";
    let width = rows
        .iter()
        .map(|r| r.informacao.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0);

    println!("{:<width$}  Confere", header, width = width);
    println!("{}", "-".repeat(width + 9));

    for row in rows {
        println!("{:<width$}  {}", row.informacao, row.confere, width = width);
    }
}
