// src/models/party.rs
//
// Clientes e fornecedores: cadastros de terceiros com os mesmos dados de
// contato. Nenhum dos dois tem DELETE na API.

use serde::{Deserialize, Serialize};

use super::resource::{Labels, Record, Resource};
use crate::table::{audit_columns, ColumnConfig};

// Tipos de cliente aceitos pelo formulário
pub const CUSTOMER_TYPES: [&str; 3] = ["Público", "Corporativo", "Particular"];

// --- CLIENTES ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub cnpj_cpf: String,
    pub phone_number: String,
    pub contact_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub uf: String,
    pub active: bool,
    pub customer_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    pub name: String,
    pub cnpj_cpf: String,
    pub phone_number: String,
    pub contact_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub uf: String,
    pub customer_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    pub name: String,
    pub cnpj_cpf: String,
    pub phone_number: String,
    pub contact_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub uf: String,
    pub customer_type: String,
    pub active: bool,
}

impl Record for Customer {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

pub struct Customers;

impl Resource for Customers {
    type Record = Customer;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;

    const PATH: &'static str = "/api/customers";
    const LABELS: Labels = Labels {
        singular: "Cliente",
        plural: "Clientes",
        feminine: false,
    };
    const DELETABLE: bool = false;

    fn columns() -> Vec<ColumnConfig> {
        let mut columns = contact_columns();
        columns.push(ColumnConfig::field("customerType", "Tipo").filterable());
        columns.extend(audit_columns());
        columns
    }

    fn toggled(c: &Customer) -> CustomerUpdate {
        CustomerUpdate {
            name: c.name.clone(),
            cnpj_cpf: c.cnpj_cpf.clone(),
            phone_number: c.phone_number.clone(),
            contact_name: c.contact_name.clone(),
            email: c.email.clone(),
            address: c.address.clone(),
            city: c.city.clone(),
            uf: c.uf.clone(),
            customer_type: c.customer_type.clone(),
            active: !c.active,
        }
    }
}

// --- FORNECEDORES ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub cnpj_cpf: String,
    pub phone_number: String,
    pub contact_name: String,
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

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierCreate {
    pub name: String,
    pub cnpj_cpf: String,
    pub phone_number: String,
    pub contact_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub uf: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierUpdate {
    pub name: String,
    pub cnpj_cpf: String,
    pub phone_number: String,
    pub contact_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub uf: String,
    pub active: bool,
}

impl Record for Supplier {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

pub struct Suppliers;

impl Resource for Suppliers {
    type Record = Supplier;
    type Create = SupplierCreate;
    type Update = SupplierUpdate;

    const PATH: &'static str = "/api/suppliers";
    const LABELS: Labels = Labels {
        singular: "Fornecedor",
        plural: "Fornecedores",
        feminine: false,
    };
    const DELETABLE: bool = false;

    fn columns() -> Vec<ColumnConfig> {
        let mut columns = contact_columns();
        columns.extend(audit_columns());
        columns
    }

    fn toggled(s: &Supplier) -> SupplierUpdate {
        SupplierUpdate {
            name: s.name.clone(),
            cnpj_cpf: s.cnpj_cpf.clone(),
            phone_number: s.phone_number.clone(),
            contact_name: s.contact_name.clone(),
            email: s.email.clone(),
            address: s.address.clone(),
            city: s.city.clone(),
            uf: s.uf.clone(),
            active: !s.active,
        }
    }
}

fn contact_columns() -> Vec<ColumnConfig> {
    vec![
        ColumnConfig::field("id", "ID"),
        ColumnConfig::field("name", "Nome"),
        ColumnConfig::field("cnpjCpf", "CNPJ / CPF"),
        ColumnConfig::field("phoneNumber", "Celular"),
        ColumnConfig::field("contactName", "Nome do Contato"),
        ColumnConfig::field("email", "E-mail"),
        ColumnConfig::field("address", "Endereço"),
        ColumnConfig::field("city", "Cidade").filterable(),
        ColumnConfig::field("uf", "UF").filterable(),
    ]
}
