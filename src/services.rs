// src/services.rs

pub mod api_client;
pub mod auth;
pub mod crud_service;
pub mod user_service;

pub use api_client::ApiClient;
pub use auth::AuthService;
pub use crud_service::CrudService;
pub use user_service::UserService;
