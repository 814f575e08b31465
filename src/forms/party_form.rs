// src/forms/party_form.rs
//
// Formulários de cliente e fornecedor. Mesmos campos de contato do usuário,
// sem perfil e sem senha, com o nome do contato.

use validator::Validate;

use super::{field_errors::FieldErrors, masks, modal::FormSchema, rules::{self, PHONE_PATTERN}};
use crate::models::party::{
    Customer, CustomerCreate, CustomerUpdate, Customers, Supplier, SupplierCreate, SupplierUpdate,
    Suppliers,
};

fn checked(result: Result<(), validator::ValidationErrors>) -> Result<(), FieldErrors> {
    result.map_err(FieldErrors::from)
}

// ---
// Cliente
// ---
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct CustomerForm {
    #[validate(
        custom(function = "rules::required"),
        length(min = 3, message = "Mínimo de caracteres não atendido")
    )]
    pub name: String,
    #[validate(custom(function = "rules::required"))]
    pub cnpj_cpf: String,
    #[validate(
        custom(function = "rules::required"),
        regex(path = *PHONE_PATTERN, message = "Formato inválido")
    )]
    pub phone_number: String,
    #[validate(custom(function = "rules::required"))]
    pub contact_name: String,
    #[validate(custom(function = "rules::required"), email(message = "E-mail inválido"))]
    pub email: String,
    #[validate(custom(function = "rules::required"))]
    pub address: String,
    #[validate(custom(function = "rules::required"))]
    pub city: String,
    #[validate(custom(function = "rules::uf"))]
    pub uf: String,
    #[validate(custom(function = "rules::required"))]
    pub customer_type: String,
    pub active: bool,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            cnpj_cpf: String::new(),
            phone_number: String::new(),
            contact_name: String::new(),
            email: String::new(),
            address: String::new(),
            city: String::new(),
            uf: String::new(),
            customer_type: String::new(),
            active: true,
        }
    }
}

impl CustomerForm {
    pub fn set_phone(&mut self, raw: &str) {
        self.phone_number = masks::phone(raw);
    }

    pub fn set_cnpj_cpf(&mut self, raw: &str) {
        self.cnpj_cpf = masks::cnpj_cpf(raw);
    }
}

impl FormSchema for CustomerForm {
    type Resource = Customers;

    fn from_record(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            cnpj_cpf: masks::cnpj_cpf(&customer.cnpj_cpf),
            phone_number: masks::phone(&customer.phone_number),
            contact_name: customer.contact_name.clone(),
            email: customer.email.clone(),
            address: customer.address.clone(),
            city: customer.city.clone(),
            uf: customer.uf.clone(),
            customer_type: customer.customer_type.clone(),
            active: customer.active,
        }
    }

    fn check(&self) -> Result<(), FieldErrors> {
        checked(self.validate())
    }

    fn create_payload(&self) -> Result<CustomerCreate, FieldErrors> {
        Ok(CustomerCreate {
            name: self.name.clone(),
            cnpj_cpf: self.cnpj_cpf.clone(),
            phone_number: self.phone_number.clone(),
            contact_name: self.contact_name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            uf: self.uf.clone(),
            customer_type: self.customer_type.clone(),
        })
    }

    fn update_payload(&self) -> Result<CustomerUpdate, FieldErrors> {
        Ok(CustomerUpdate {
            name: self.name.clone(),
            cnpj_cpf: self.cnpj_cpf.clone(),
            phone_number: self.phone_number.clone(),
            contact_name: self.contact_name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            uf: self.uf.clone(),
            customer_type: self.customer_type.clone(),
            active: self.active,
        })
    }
}

// ---
// Fornecedor
// ---
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct SupplierForm {
    #[validate(
        custom(function = "rules::required"),
        length(min = 3, message = "Mínimo de caracteres não atendido")
    )]
    pub name: String,
    #[validate(custom(function = "rules::required"))]
    pub cnpj_cpf: String,
    #[validate(
        custom(function = "rules::required"),
        regex(path = *PHONE_PATTERN, message = "Formato inválido")
    )]
    pub phone_number: String,
    #[validate(custom(function = "rules::required"))]
    pub contact_name: String,
    #[validate(custom(function = "rules::required"), email(message = "E-mail inválido"))]
    pub email: String,
    #[validate(custom(function = "rules::required"))]
    pub address: String,
    #[validate(custom(function = "rules::required"))]
    pub city: String,
    #[validate(custom(function = "rules::uf"))]
    pub uf: String,
    pub active: bool,
}

impl Default for SupplierForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            cnpj_cpf: String::new(),
            phone_number: String::new(),
            contact_name: String::new(),
            email: String::new(),
            address: String::new(),
            city: String::new(),
            uf: String::new(),
            active: true,
        }
    }
}

impl SupplierForm {
    pub fn set_phone(&mut self, raw: &str) {
        self.phone_number = masks::phone(raw);
    }

    pub fn set_cnpj_cpf(&mut self, raw: &str) {
        self.cnpj_cpf = masks::cnpj_cpf(raw);
    }
}

impl FormSchema for SupplierForm {
    type Resource = Suppliers;

    fn from_record(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            cnpj_cpf: masks::cnpj_cpf(&supplier.cnpj_cpf),
            phone_number: masks::phone(&supplier.phone_number),
            contact_name: supplier.contact_name.clone(),
            email: supplier.email.clone(),
            address: supplier.address.clone(),
            city: supplier.city.clone(),
            uf: supplier.uf.clone(),
            active: supplier.active,
        }
    }

    fn check(&self) -> Result<(), FieldErrors> {
        checked(self.validate())
    }

    fn create_payload(&self) -> Result<SupplierCreate, FieldErrors> {
        Ok(SupplierCreate {
            name: self.name.clone(),
            cnpj_cpf: self.cnpj_cpf.clone(),
            phone_number: self.phone_number.clone(),
            contact_name: self.contact_name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            uf: self.uf.clone(),
        })
    }

    fn update_payload(&self) -> Result<SupplierUpdate, FieldErrors> {
        Ok(SupplierUpdate {
            name: self.name.clone(),
            cnpj_cpf: self.cnpj_cpf.clone(),
            phone_number: self.phone_number.clone(),
            contact_name: self.contact_name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            uf: self.uf.clone(),
            active: self.active,
        })
    }
}
