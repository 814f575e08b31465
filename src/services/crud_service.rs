// src/services/crud_service.rs

use std::marker::PhantomData;

use super::api_client::ApiClient;
use crate::{common::error::AppError, models::resource::Resource};

/// Serviço REST genérico: lista, cria, atualiza e exclui registros de um
/// recurso descrito por `R`.
pub struct CrudService<R: Resource> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for CrudService<R> {
    fn clone(&self) -> Self {
        Self::new(self.api.clone())
    }
}

impl<R: Resource> CrudService<R> {
    pub fn new(api: ApiClient) -> Self {
        Self { api, _resource: PhantomData }
    }

    fn item_path(id: i64) -> String {
        format!("{}/{}", R::PATH, id)
    }

    pub async fn list(&self) -> Result<Vec<R::Record>, AppError> {
        self.api.get(R::PATH).await
    }

    pub async fn create(&self, payload: &R::Create) -> Result<R::Record, AppError> {
        self.api.post(R::PATH, payload).await
    }

    pub async fn update(&self, id: i64, payload: &R::Update) -> Result<R::Record, AppError> {
        self.api.put(&Self::item_path(id), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !R::DELETABLE {
            return Err(AppError::Unsupported("este cadastro não permite exclusão"));
        }
        self.api.delete(&Self::item_path(id)).await
    }
}
