use crate::error::{Result, ValidadorError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// URL base da API pública da Receita.
pub const DEFAULT_BASE_URL: &str = "https://publica.cnpj.ws";

/// Timeout por consulta, em segundos.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ValidadorError::Config("diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("validador-cnpj").join("config.json"))
    }

    /// URL base efetiva. A variável de ambiente tem prioridade sobre o arquivo.
    pub fn resolved_base_url(&self) -> String {
        if let Ok(url) = std::env::var("RECEITA_BASE_URL") {
            if !url.trim().is_empty() {
                return url.trim().to_string();
            }
        }

        self.base_url.clone()
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        self.base_url = url;
        self.save()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}
