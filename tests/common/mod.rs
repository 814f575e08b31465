// tests/common/mod.rs
//
// Backend falso em axum, servido numa porta efêmera, e helpers para montar
// o cliente do console apontando para ele.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use tokio::net::TcpListener;

use backoffice::{
    config::AppConfig,
    guards::History,
    models::auth::LoginResponse,
    services::ApiClient,
    session::Session,
};

pub struct Harness {
    pub api: ApiClient,
    pub session: Session,
    pub history: Arc<History>,
}

/// Sobe o router numa porta livre e devolve a URL base.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn harness_with(base_url: &str, session: Session) -> Harness {
    let history = Arc::new(History::new());
    let api = ApiClient::new(AppConfig::with_base_url(base_url), session.clone(), history.clone()).unwrap();
    Harness { api, session, history }
}

pub fn harness(base_url: &str) -> Harness {
    harness_with(base_url, Session::in_memory())
}

/// Cliente para testes que nunca chegam à rede.
pub fn offline() -> Harness {
    harness("http://127.0.0.1:9")
}

pub fn login_response(role: &str) -> LoginResponse {
    LoginResponse {
        token: "tok-123".into(),
        name: "Maria Souza".into(),
        role: role.into(),
        username: "maria".into(),
    }
}

pub fn sign_in(session: &Session, role: &str) {
    session.start(&login_response(role)).unwrap();
}

/// Guarda o que o backend recebeu.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<String>>>);

impl Captured {
    pub fn push(&self, value: impl Into<String>) {
        self.0.lock().unwrap().push(value.into());
    }

    pub fn all(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}
