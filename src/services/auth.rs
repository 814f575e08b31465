// src/services/auth.rs

use validator::Validate;

use super::api_client::ApiClient;
use crate::{
    common::error::AppError,
    guards::navigator::LOGIN,
    models::auth::{LoginPayload, LoginResponse, RegisterPayload},
};

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/api/users/save";

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Autentica e grava a sessão. Payload inválido não chega à rede.
    pub async fn login(&self, payload: LoginPayload) -> Result<LoginResponse, AppError> {
        payload.validate()?;

        let response: LoginResponse = self.api.post(LOGIN_PATH, &payload).await?;
        self.api.session().start(&response)?;

        tracing::info!("✅ Login realizado: {} ({})", response.username, response.role);
        Ok(response)
    }

    pub fn logout(&self) -> Result<(), AppError> {
        self.api.session().clear()?;
        tracing::info!("✅ Logout realizado");
        self.api.navigator().navigate(LOGIN);
        Ok(())
    }

    // Autocadastro público
    pub async fn register(&self, payload: RegisterPayload) -> Result<(), AppError> {
        payload.validate()?;

        self.api.post_discard(REGISTER_PATH, &payload).await?;
        tracing::info!("✅ Usuário {} cadastrado", payload.name);
        Ok(())
    }
}
