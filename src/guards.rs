// src/guards.rs

pub mod auth;
pub mod navigator;
pub mod rbac;
pub mod router;

pub use auth::auth_guard;
pub use navigator::{History, Navigator, HOME, LOGIN};
pub use rbac::role_guard;
pub use router::{Guard, Route, Router};
