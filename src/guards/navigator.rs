// src/guards/navigator.rs

use std::sync::Mutex;

pub const LOGIN: &str = "/login";
pub const HOME: &str = "/home";

/// Quem executa os redirecionamentos pedidos pelos guards e pelo
/// interceptador de 401.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

// Histórico de navegação em memória
#[derive(Debug, Default)]
pub struct History {
    visited: Mutex<Vec<String>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    pub fn visited(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.visited.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Navigator for History {
    fn navigate(&self, path: &str) {
        tracing::debug!("Navegando para {}", path);
        self.lock().push(path.to_string());
    }
}
