// src/services/user_service.rs

use super::api_client::ApiClient;
use crate::{
    common::error::AppError,
    models::{resource::Resource, user::{User, Users}},
};

// Operações de usuário que fogem do CRUD genérico
#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<User, AppError> {
        self.api
            .get(&format!("{}/username/{}", Users::PATH, username))
            .await
    }

    /// Troca a senha. O backend recebe a nova senha crua no corpo.
    pub async fn update_password(&self, id: i64, new_password: &str) -> Result<(), AppError> {
        self.api
            .put_text(
                &format!("{}/usuario/{}/senha", Users::PATH, id),
                new_password.to_string(),
            )
            .await?;
        tracing::info!("✅ Senha do usuário {} alterada", id);
        Ok(())
    }
}
