// src/config.rs

use std::{env, path::PathBuf, time::Duration};

use anyhow::{bail, Context};

pub const DEFAULT_API_URL: &str = "http://localhost:8082";
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_SESSION_FILE: &str = ".backoffice-session.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Configuração do console, lida do ambiente (e do .env, se existir)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: usize,
    pub session_file: PathBuf,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(url) = env::var("BACKOFFICE_API_URL") {
            config.api_base_url = url;
        }

        if let Ok(raw) = env::var("BACKOFFICE_PAGE_SIZE") {
            config.page_size = raw
                .parse()
                .with_context(|| format!("BACKOFFICE_PAGE_SIZE inválido: {raw}"))?;
        }

        if let Ok(path) = env::var("BACKOFFICE_SESSION_FILE") {
            config.session_file = PathBuf::from(path);
        }

        if let Ok(raw) = env::var("BACKOFFICE_TIMEOUT_SECS") {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("BACKOFFICE_TIMEOUT_SECS inválido: {raw}"))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        tracing::debug!(api = %config.api_base_url, page_size = config.page_size, "Configuração carregada");
        Ok(config)
    }

    /// Configuração apontando para outra API, com o resto padrão.
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            api_base_url: url.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.page_size == 0 {
            bail!("O tamanho da página deve ser no mínimo 1");
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            bail!("URL da API inválida: {}", self.api_base_url);
        }
        Ok(())
    }

    // Monta a URL completa de um endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_without_double_slash() {
        let config = AppConfig::with_base_url("http://localhost:8082/");
        assert_eq!(config.api_url("/api/users"), "http://localhost:8082/api/users");
    }

    #[test]
    fn rejects_zero_page_size() {
        let config = AppConfig {
            page_size: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_url_without_scheme() {
        assert!(AppConfig::with_base_url("localhost:8082").validate().is_err());
        assert!(AppConfig::default().validate().is_ok());
    }
}
