// src/guards/router.rs

use super::{
    auth::auth_guard,
    navigator::{Navigator, HOME, LOGIN},
    rbac::role_guard,
};
use crate::{models::auth::Role, session::Session};

// --- Caminhos das páginas ---
pub const BUDGETS: &str = "/budgets";
pub const PRODUCT_ITEMS: &str = "/productItems";
pub const CUSTOMERS: &str = "/customers";
pub const SUPPLIERS: &str = "/suppliers";
pub const MATERIALS: &str = "/materials";
pub const CONFIG: &str = "/config";
pub const USERS: &str = "/users";

const CONFIG_ROLES: [Role; 2] = [Role::Administrator, Role::Manager];
const ADMIN_ONLY: [Role; 1] = [Role::Administrator];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    Auth,
    Roles(Vec<Role>),
}

impl Guard {
    pub fn check(&self, session: &Session, navigator: &dyn Navigator) -> bool {
        match self {
            Guard::Auth => auth_guard(session, navigator),
            Guard::Roles(allowed) => role_guard(allowed, session, navigator),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub guards: Vec<Guard>,
}

impl Route {
    pub fn public(path: &'static str) -> Self {
        Self { path, guards: Vec::new() }
    }

    pub fn authenticated(path: &'static str) -> Self {
        Self { path, guards: vec![Guard::Auth] }
    }

    pub fn restricted(path: &'static str, roles: &[Role]) -> Self {
        Self {
            path,
            guards: vec![Guard::Auth, Guard::Roles(roles.to_vec())],
        }
    }

    // Todos precisam passar; o primeiro que falha interrompe a avaliação
    fn admits(&self, session: &Session, navigator: &dyn Navigator) -> bool {
        self.guards.iter().all(|guard| guard.check(session, navigator))
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(vec![
            Route::public(LOGIN),
            Route::authenticated(HOME),
            Route::authenticated(BUDGETS),
            Route::authenticated(PRODUCT_ITEMS),
            Route::restricted(CUSTOMERS, &Role::ALL),
            Route::restricted(SUPPLIERS, &Role::ALL),
            Route::restricted(MATERIALS, &Role::ALL),
            Route::restricted(CONFIG, &CONFIG_ROLES),
            Route::restricted(USERS, &ADMIN_ONLY),
        ])
    }
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn route(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// Tenta abrir `path`. Se os guards passarem, navega para ele e devolve
    /// `true`. Caso contrário os próprios guards já redirecionaram.
    /// Caminhos desconhecidos caem na home.
    pub fn navigate(&self, path: &str, session: &Session, navigator: &dyn Navigator) -> bool {
        let Some(route) = self.route(path) else {
            tracing::debug!("Rota desconhecida {}, redirecionando para a home", path);
            if path != HOME {
                self.navigate(HOME, session, navigator);
            }
            return false;
        };

        if !route.admits(session, navigator) {
            return false;
        }

        navigator.navigate(route.path);
        true
    }
}
