// src/models/user.rs

use serde::{Deserialize, Serialize};

use super::{
    auth::Role,
    resource::{Labels, Record, Resource},
};
use crate::table::{audit_columns, ColumnConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub role: String,
    pub name: String,
    #[serde(default)]
    pub cnpj_cpf: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub uf: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

// POST /api/users
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub role: Role,
    pub name: String,
    pub cnpj_cpf: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub uf: String,
}

// PUT /api/users/{id}
// A senha vai sempre vazia: a troca de senha tem endpoint próprio.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub password: String,
    pub role: String,
    pub name: String,
    pub cnpj_cpf: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub uf: String,
    pub active: bool,
}

/// Pedido de troca de senha emitido pelo formulário de usuário.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordChange {
    pub user_id: i64,
    pub current_password: Option<String>,
    pub new_password: String,
}

impl Record for User {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

pub struct Users;

impl Resource for Users {
    type Record = User;
    type Create = UserCreate;
    type Update = UserUpdate;

    const PATH: &'static str = "/api/users";
    const LABELS: Labels = Labels {
        singular: "Usuário",
        plural: "Usuários",
        feminine: false,
    };

    fn columns() -> Vec<ColumnConfig> {
        let mut columns = vec![
            ColumnConfig::field("id", "ID"),
            ColumnConfig::field("role", "Permissão"),
            ColumnConfig::field("name", "Nome"),
            ColumnConfig::field("cnpjCpf", "CNPJ / CPF"),
            ColumnConfig::field("phoneNumber", "Celular"),
            ColumnConfig::field("email", "E-mail"),
            ColumnConfig::field("address", "Endereço"),
            ColumnConfig::field("city", "Cidade"),
            ColumnConfig::field("uf", "UF"),
        ];
        columns.extend(audit_columns());
        columns
    }

    fn toggled(user: &User) -> UserUpdate {
        UserUpdate {
            password: String::new(),
            role: user.role.clone(),
            name: user.name.clone(),
            cnpj_cpf: user.cnpj_cpf.clone(),
            phone_number: user.phone_number.clone(),
            email: user.email.clone(),
            address: user.address.clone(),
            city: user.city.clone(),
            uf: user.uf.clone(),
            active: !user.active,
        }
    }
}
