use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidadorError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Arquivo não encontrado: {0}")]
    FileNotFound(String),

    #[error("Erro ao ler a planilha: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("A planilha não contém nenhuma aba: {0}")]
    NoWorksheet(String),

    #[error("Erro ao montar o cliente HTTP: {0}")]
    HttpClient(String),

    #[error("Erro ao gravar o CSV: {0}")]
    CsvWrite(#[from] csv::Error),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ValidadorError>;
