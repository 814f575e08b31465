// src/pages/toasts.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// Fila de notificações da página. Quem exibe consome com `drain`.
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn success(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("✅ {}", message);
        self.items.push(Toast { level: ToastLevel::Success, message });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("❌ {}", message);
        self.items.push(Toast { level: ToastLevel::Error, message });
    }

    pub fn last(&self) -> Option<&Toast> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.items)
    }
}
