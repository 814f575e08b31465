// src/session.rs

pub mod storage;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use storage::{FileStorage, MemoryStorage, SessionStorage};

use crate::{
    common::error::AppError,
    models::auth::{LoginResponse, Role},
};

// Chaves gravadas no armazenamento da sessão
pub const KEY_TOKEN: &str = "auth-token";
pub const KEY_NAME: &str = "name";
pub const KEY_ROLE: &str = "role";
pub const KEY_USERNAME: &str = "username";

pub const SESSION_KEYS: [&str; 4] = [KEY_TOKEN, KEY_NAME, KEY_ROLE, KEY_USERNAME];

// Dados da sessão autenticada
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInfo {
    pub token: String,
    pub display_name: Option<String>,
    pub role: Option<String>,
    pub username: Option<String>,
}

/// Contexto de sessão injetável. Clonar é barato: todos os clones
/// compartilham o mesmo armazenamento.
#[derive(Clone)]
pub struct Session {
    storage: Arc<RwLock<Box<dyn SessionStorage>>>,
}

impl Session {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Arc::new(RwLock::new(Box::new(storage))),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    fn read(&self) -> RwLockReadGuard<'_, Box<dyn SessionStorage>> {
        self.storage.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Box<dyn SessionStorage>> {
        self.storage.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Anônimo -> Autenticado: grava os dados devolvidos pelo login.
    /// Se uma escrita falhar, nada fica gravado.
    pub fn start(&self, login: &LoginResponse) -> Result<(), AppError> {
        let mut storage = self.write();
        let entries = [
            (KEY_TOKEN, &login.token),
            (KEY_NAME, &login.name),
            (KEY_ROLE, &login.role),
            (KEY_USERNAME, &login.username),
        ];

        let result = entries
            .into_iter()
            .try_for_each(|(key, value)| storage.set(key, value));

        if let Err(e) = result {
            tracing::error!("Falha ao gravar a sessão: {}", e);
            if let Err(clear_err) = storage.clear() {
                tracing::error!("Falha ao limpar a sessão incompleta: {}", clear_err);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Autenticado -> Anônimo: apaga tudo.
    pub fn clear(&self) -> Result<(), AppError> {
        self.write().clear()
    }

    pub fn token(&self) -> Option<String> {
        self.read().get(KEY_TOKEN).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn display_name(&self) -> Option<String> {
        self.read().get(KEY_NAME)
    }

    pub fn username(&self) -> Option<String> {
        self.read().get(KEY_USERNAME)
    }

    pub fn role_label(&self) -> Option<String> {
        self.read().get(KEY_ROLE)
    }

    // Perfil desconhecido conta como ausente
    pub fn role(&self) -> Option<Role> {
        self.role_label().and_then(|label| label.parse().ok())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.read().get(key)
    }

    pub fn info(&self) -> Option<SessionInfo> {
        let storage = self.read();
        let token = storage.get(KEY_TOKEN).filter(|t| !t.is_empty())?;
        Some(SessionInfo {
            token,
            display_name: storage.get(KEY_NAME),
            role: storage.get(KEY_ROLE),
            username: storage.get(KEY_USERNAME),
        })
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Nunca imprime o token
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("role", &self.role_label())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(role: &str) -> LoginResponse {
        LoginResponse {
            token: "jwt-123".into(),
            name: "Maria Souza".into(),
            role: role.into(),
            username: "maria".into(),
        }
    }

    #[test]
    fn start_stores_the_four_keys() {
        let session = Session::in_memory();
        session.start(&login("Gerente")).unwrap();

        assert_eq!(session.token().as_deref(), Some("jwt-123"));
        assert_eq!(session.display_name().as_deref(), Some("Maria Souza"));
        assert_eq!(session.role(), Some(Role::Manager));
        assert_eq!(session.username().as_deref(), Some("maria"));
    }

    #[test]
    fn clear_removes_every_key() {
        let session = Session::in_memory();
        session.start(&login("Administrador")).unwrap();
        session.clear().unwrap();

        for key in SESSION_KEYS {
            assert!(session.get(key).is_none(), "{key} ainda presente");
        }
        assert!(!session.is_authenticated());
        assert!(session.info().is_none());
    }

    #[test]
    fn clones_share_state() {
        let session = Session::in_memory();
        let other = session.clone();
        session.start(&login("Comercial")).unwrap();
        assert_eq!(other.role(), Some(Role::Sales));
    }

    #[test]
    fn unknown_role_reads_as_none() {
        let session = Session::in_memory();
        session.start(&login("USER")).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.role(), None);
        assert_eq!(session.role_label().as_deref(), Some("USER"));
    }

    // Armazenamento que falha ao gravar o perfil
    #[derive(Default)]
    struct FailsOnRole {
        inner: MemoryStorage,
    }

    impl SessionStorage for FailsOnRole {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
            if key == KEY_ROLE {
                return Err(AppError::Storage(std::io::Error::other("disco cheio")));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), AppError> {
            self.inner.remove(key)
        }

        fn clear(&mut self) -> Result<(), AppError> {
            self.inner.clear()
        }
    }

    #[test]
    fn failed_write_leaves_no_partial_session() {
        let session = Session::new(FailsOnRole::default());
        assert!(matches!(session.start(&login("Gerente")), Err(AppError::Storage(_))));

        for key in SESSION_KEYS {
            assert!(session.get(key).is_none(), "{key} ficou gravada");
        }
        assert!(!session.is_authenticated());
    }

    #[test]
    fn debug_hides_token() {
        let session = Session::in_memory();
        session.start(&login("Gerente")).unwrap();
        assert!(!format!("{session:?}").contains("jwt-123"));
    }
}
