// src/guards/rbac.rs

use super::navigator::{Navigator, HOME, LOGIN};
use crate::{models::auth::Role, session::Session};

/// Passa se há token e o perfil da sessão está entre os permitidos.
/// Sem token vai para o login; perfil não permitido volta para a home.
pub fn role_guard(allowed: &[Role], session: &Session, navigator: &dyn Navigator) -> bool {
    if !session.is_authenticated() {
        navigator.navigate(LOGIN);
        return false;
    }

    match session.role() {
        Some(role) if allowed.contains(&role) => true,
        _ => {
            tracing::warn!(
                role = ?session.role_label(),
                "Perfil sem permissão para a página, redirecionando para a home"
            );
            navigator.navigate(HOME);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{guards::navigator::History, models::auth::LoginResponse};

    fn session_with(role: &str) -> Session {
        let session = Session::in_memory();
        session
            .start(&LoginResponse {
                token: "t".into(),
                name: "Nome".into(),
                role: role.into(),
                username: "user".into(),
            })
            .unwrap();
        session
    }

    #[test]
    fn disallowed_role_goes_home() {
        let session = session_with("Orçamentista");
        let history = History::new();

        assert!(!role_guard(&[Role::Administrator], &session, &history));
        assert_eq!(history.visited(), vec!["/home".to_string()]);
    }

    #[test]
    fn allowed_role_passes_without_navigation() {
        let session = session_with("Administrador");
        let history = History::new();

        assert!(role_guard(&[Role::Administrator], &session, &history));
        assert!(history.visited().is_empty());
    }

    #[test]
    fn missing_token_goes_to_login() {
        let session = Session::in_memory();
        let history = History::new();

        assert!(!role_guard(&Role::ALL, &session, &history));
        assert_eq!(history.current().as_deref(), Some("/login"));
    }

    #[test]
    fn unknown_role_is_treated_as_disallowed() {
        let session = session_with("USER");
        let history = History::new();

        assert!(!role_guard(&Role::ALL, &session, &history));
        assert_eq!(history.current().as_deref(), Some("/home"));
    }
}
