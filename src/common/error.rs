// src/common/error.rs

use reqwest::StatusCode;
use thiserror::Error;

use crate::forms::FieldErrors;

// Mensagens exibidas nos toasts quando o backend devolve um status conhecido.
pub const MSG_FORBIDDEN: &str = "Você não tem permissão para acessar esta funcionalidade";
pub const MSG_NOT_FOUND: &str = "Recurso não encontrado";
pub const MSG_SERVER: &str = "Erro no servidor. Tente novamente mais tarde.";

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    // Erros de formulário: nunca chegam à rede.
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Formulário com campos inválidos: submit bloqueado
    #[error("Formulário inválido: {0}")]
    InvalidForm(FieldErrors),

    #[error("Sessão expirada ou inválida")]
    Unauthorized,

    #[error("Acesso negado")]
    Forbidden,

    #[error("Recurso não encontrado")]
    NotFound,

    #[error("Erro no servidor ({status})")]
    Server { status: StatusCode, body: String },

    #[error("Resposta inesperada do servidor ({status})")]
    Http { status: StatusCode, body: String },

    // Falha de conexão, timeout, DNS...
    #[error("Erro de rede: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Resposta inválida: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Erro ao acessar o armazenamento da sessão: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Operação não suportada: {0}")]
    Unsupported(&'static str),
}

impl AppError {
    /// Converte um status HTTP de erro na variante correspondente.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::FORBIDDEN => AppError::Forbidden,
            StatusCode::NOT_FOUND => AppError::NotFound,
            s if s.is_server_error() => AppError::Server { status: s, body },
            s => AppError::Http { status: s, body },
        }
    }

    /// Texto do toast para este erro. Status conhecidos têm mensagem própria,
    /// o resto cai na mensagem padrão da operação.
    pub fn toast_message(&self, default_message: &str) -> String {
        match self {
            AppError::Forbidden => MSG_FORBIDDEN.to_string(),
            AppError::NotFound => MSG_NOT_FOUND.to_string(),
            AppError::Server { .. } => MSG_SERVER.to_string(),
            _ => default_message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_statuses_to_variants() {
        assert!(matches!(
            AppError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            AppError::Unauthorized
        ));
        assert!(matches!(
            AppError::from_status(StatusCode::FORBIDDEN, String::new()),
            AppError::Forbidden
        ));
        assert!(matches!(
            AppError::from_status(StatusCode::BAD_GATEWAY, String::new()),
            AppError::Server { .. }
        ));
        assert!(matches!(
            AppError::from_status(StatusCode::CONFLICT, String::new()),
            AppError::Http { .. }
        ));
    }

    #[test]
    fn toast_message_prefers_known_statuses() {
        let default = "Erro ao carregar usuários";
        assert_eq!(AppError::Forbidden.toast_message(default), MSG_FORBIDDEN);
        assert_eq!(AppError::NotFound.toast_message(default), MSG_NOT_FOUND);
        assert_eq!(
            AppError::from_status(StatusCode::INTERNAL_SERVER_ERROR, String::new())
                .toast_message(default),
            MSG_SERVER
        );
        assert_eq!(AppError::Unsupported("x").toast_message(default), default);
    }
}
