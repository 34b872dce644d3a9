//! Cliente HTTP da API pública da Receita (publica.cnpj.ws).
//!
//! Uma requisição por CNPJ, bloqueante, com timeout fixo e sem retry.
//! Qualquer falha vira dado no registro; a consulta de um CNPJ nunca
//! derruba a validação dos demais.

use super::types::ReceitaRecord;
use crate::error::{Result, ValidadorError};
use serde_json::Value;
use std::time::Duration;

pub struct ReceitaClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ReceitaClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ValidadorError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Consulta um CNPJ no cadastro da Receita.
    ///
    /// Status 200 vira `Found`, qualquer outro status vira `NotFound`
    /// e erro de transporte ou de parse vira `Failed`.
    pub fn consultar(&self, cnpj: &str) -> ReceitaRecord {
        match self.request(cnpj) {
            Ok(record) => record,
            Err(e) => ReceitaRecord::Failed {
                cnpj: cnpj.to_string(),
                message: e.to_string(),
            },
        }
    }

    fn request(&self, cnpj: &str) -> std::result::Result<ReceitaRecord, reqwest::Error> {
        let response = self.http.get(self.lookup_url(cnpj)).send()?;

        if response.status() != reqwest::StatusCode::OK {
            return Ok(ReceitaRecord::NotFound {
                cnpj: cnpj.to_string(),
            });
        }

        let body: Value = response.json()?;
        Ok(parse_record(cnpj, &body))
    }

    fn lookup_url(&self, cnpj: &str) -> String {
        format!("{}/cnpj/{}", self.base_url, somente_digitos(cnpj))
    }
}

/// A API espera o CNPJ sem pontuação.
pub fn somente_digitos(cnpj: &str) -> String {
    cnpj.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn parse_record(cnpj: &str, body: &Value) -> ReceitaRecord {
    let razao_social = body
        .get("razao_social")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    // Município: primeiro o campo aninhado do estabelecimento, depois o
    // campo de topo; o primeiro não vazio vence
    let municipio = body
        .pointer("/estabelecimento/cidade/nome")
        .and_then(Value::as_str)
        .filter(|nome| !nome.is_empty())
        .or_else(|| {
            body.get("municipio")
                .and_then(Value::as_str)
                .filter(|nome| !nome.is_empty())
        })
        .unwrap_or_default()
        .to_string();

    // Situação ausente ou vazia é tratada como cadastro ativo
    let situacao = body
        .get("descricao_situacao_cadastral")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("Ativo")
        .to_string();

    ReceitaRecord::Found {
        cnpj: cnpj.to_string(),
        razao_social,
        municipio,
        situacao,
    }
}
