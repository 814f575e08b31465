// src/guards/auth.rs

use super::navigator::{Navigator, LOGIN};
use crate::session::Session;

/// Passa se existe token na sessão. Sem token, manda para o login.
pub fn auth_guard(session: &Session, navigator: &dyn Navigator) -> bool {
    if session.is_authenticated() {
        return true;
    }

    tracing::debug!("Acesso sem token, redirecionando para o login");
    navigator.navigate(LOGIN);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{guards::navigator::History, models::auth::LoginResponse};

    #[test]
    fn without_token_redirects_to_login() {
        let session = Session::in_memory();
        let history = History::new();

        assert!(!auth_guard(&session, &history));
        assert_eq!(history.visited(), vec!["/login".to_string()]);
    }

    #[test]
    fn with_token_passes_silently() {
        let session = Session::in_memory();
        session
            .start(&LoginResponse {
                token: "t".into(),
                name: "Ana".into(),
                role: "Comercial".into(),
                username: "ana".into(),
            })
            .unwrap();
        let history = History::new();

        assert!(auth_guard(&session, &history));
        assert!(history.visited().is_empty());
    }
}
