//! Testes de condições de erro.

use std::path::Path;
use tempfile::tempdir;
use validador_cnpj::error::ValidadorError;
use validador_cnpj::sheet;

/// Planilha inexistente
#[test]
fn test_load_table_arquivo_inexistente() {
    let result = sheet::load_table(Path::new("/caminho/inexistente/planilha.xlsx"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, ValidadorError::FileNotFound(_)));
}

/// Arquivo que existe mas não é uma planilha
#[test]
fn test_load_table_arquivo_invalido() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nao_e_planilha.xlsx");
    std::fs::write(&path, "isto não é um xlsx").unwrap();

    let result = sheet::load_table(&path);
    assert!(result.is_err());
}

/// Mensagens do Display ficam em português e carregam o contexto
#[test]
fn test_error_display() {
    let errors = vec![
        ValidadorError::Config("home não encontrado".to_string()),
        ValidadorError::FileNotFound("planilha.xlsx".to_string()),
        ValidadorError::HttpClient("builder inválido".to_string()),
        ValidadorError::NoWorksheet("vazia.xlsx".to_string()),
    ];

    for err in errors {
        let msg = err.to_string();
        assert!(!msg.is_empty());
    }

    assert_eq!(
        ValidadorError::FileNotFound("planilha.xlsx".into()).to_string(),
        "Arquivo não encontrado: planilha.xlsx"
    );
    assert_eq!(
        ValidadorError::Config("sem home".into()).to_string(),
        "Erro de configuração: sem home"
    );
}

/// Erros de E/S convertem via From
#[test]
fn test_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "negado");
    let err: ValidadorError = io_err.into();
    assert!(matches!(err, ValidadorError::Io(_)));
    assert!(err.to_string().starts_with("Erro de E/S"));
}
