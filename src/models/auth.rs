// src/models/auth.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

// Perfis de acesso do console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Administrador")]
    Administrator,
    #[serde(rename = "Gerente")]
    Manager,
    #[serde(rename = "Orçamentista")]
    Estimator,
    #[serde(rename = "Comercial")]
    Sales,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Administrator, Role::Manager, Role::Estimator, Role::Sales];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrador",
            Role::Manager => "Gerente",
            Role::Estimator => "Orçamentista",
            Role::Sales => "Comercial",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("perfil desconhecido: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

// Dados para login
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginPayload {
    #[validate(length(min = 1, message = "Campo obrigatório"))]
    pub username: String,
    #[validate(length(min = 1, message = "Campo obrigatório"))]
    pub password: String,
}

// Resposta do /auth/login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub name: String,
    pub role: String,
    pub username: String,
}

// Autocadastro (POST /api/users/save, sem token)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
    pub role: Role,
    #[validate(length(min = 3, message = "Mínimo de caracteres não atendido"))]
    pub name: String,
    #[validate(length(min = 1, message = "Campo obrigatório"))]
    pub phone_number: String,
    #[validate(email(message = "E-mail inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "Campo obrigatório"))]
    pub address: String,
    #[validate(length(min = 1, message = "Campo obrigatório"))]
    pub city: String,
    #[validate(custom(function = "crate::forms::rules::uf"))]
    pub uf: String,
}
