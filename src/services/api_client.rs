// src/services/api_client.rs

use std::sync::Arc;

use reqwest::{header, Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    common::error::AppError,
    config::AppConfig,
    guards::navigator::{Navigator, LOGIN},
    session::Session,
};

/// Cliente HTTP do console. Anexa o token da sessão em toda chamada e faz
/// o papel do interceptador global: um 401 derruba a sessão e manda para o
/// login antes de devolver o erro.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: AppConfig,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: AppConfig,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { http, config, session, navigator })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.api_url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // --- Verbos ---

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let body = self.execute(self.request(Method::GET, path)).await?;
        decode(&body)
    }

    pub async fn post<B, T>(&self, path: &str, payload: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.execute(self.request(Method::POST, path).json(payload)).await?;
        decode(&body)
    }

    /// POST cuja resposta não interessa.
    pub async fn post_discard<B: Serialize + ?Sized>(&self, path: &str, payload: &B) -> Result<(), AppError> {
        self.execute(self.request(Method::POST, path).json(payload)).await?;
        Ok(())
    }

    pub async fn put<B, T>(&self, path: &str, payload: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.execute(self.request(Method::PUT, path).json(payload)).await?;
        decode(&body)
    }

    /// PUT com corpo em texto puro, como o endpoint de troca de senha espera.
    pub async fn put_text(&self, path: &str, text: String) -> Result<String, AppError> {
        let request = self
            .request(Method::PUT, path)
            .header(header::CONTENT_TYPE, "text/plain")
            .body(text);
        self.execute(request).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    async fn execute(&self, request: RequestBuilder) -> Result<String, AppError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        match status {
            StatusCode::UNAUTHORIZED => self.expire_session(),
            StatusCode::FORBIDDEN => tracing::warn!("Acesso negado pelo backend"),
            s if s.is_server_error() => tracing::error!(status = %s, "Erro no servidor: {}", body),
            s => tracing::debug!(status = %s, "Resposta de erro: {}", body),
        }

        Err(AppError::from_status(status, body))
    }

    // 401: Autenticado -> Anônimo
    fn expire_session(&self) {
        tracing::warn!("Sessão expirada ou inválida (401), redirecionando para o login");
        if let Err(e) = self.session.clear() {
            tracing::error!("Falha ao limpar a sessão: {}", e);
        }
        self.navigator.navigate(LOGIN);
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    Ok(serde_json::from_str(body)?)
}
