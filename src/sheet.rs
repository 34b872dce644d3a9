//! Leitura da planilha de entrada.
//!
//! Converte a primeira aba do arquivo Excel em uma tabela plana de texto.
//! A primeira coluna é descartada, seguindo o layout do relatório de
//! ordem de venda de onde esses arquivos vêm.

use crate::error::{Result, ValidadorError};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Tabela de células já convertidas para texto. Somente leitura
/// depois de carregada.
#[derive(Debug, Clone)]
pub struct CellTable {
    pub cells: Vec<String>,
    pub rows: usize,
    pub cols: usize,
}

impl CellTable {
    pub fn from_cells(cells: Vec<String>) -> Self {
        let rows = cells.len();
        Self {
            cells,
            rows,
            cols: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

pub fn load_table(path: &Path) -> Result<CellTable> {
    if !path.exists() {
        return Err(ValidadorError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ValidadorError::NoWorksheet(path.display().to_string()))?;

    let range = workbook.worksheet_range(&sheet_name)?;

    // Descarta a primeira coluna quando há mais de uma
    let skip = if range.width() > 1 { 1 } else { 0 };

    let mut cells = Vec::new();
    let mut rows = 0;

    for row in range.rows() {
        for cell in row.iter().skip(skip) {
            cells.push(cell_to_text(cell));
        }
        rows += 1;
    }

    Ok(CellTable {
        cells,
        rows,
        cols: range.width() - skip,
    })
}

/// Representação textual de uma célula, igual para qualquer tipo original.
/// Números inteiros saem sem o `.0` que o Excel acrescenta a floats.
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.is_finite() && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}
