// src/forms/lookup_form.rs

use std::marker::PhantomData;

use validator::Validate;

use super::{field_errors::FieldErrors, modal::FormSchema, rules};
use crate::models::{
    lookup::{Lookup, LookupCreate, LookupUpdate},
    resource::Resource,
};

/// Formulário das tabelas auxiliares (unidade de medida, tipo de material,
/// tipo de item). `R` só escolhe o recurso de destino.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct LookupForm<R> {
    #[validate(custom(function = "rules::required"))]
    pub name: String,

    #[validate(
        custom(function = "rules::required"),
        length(min = 3, message = "Mínimo de caracteres não atendido")
    )]
    pub description: String,

    pub active: bool,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Default for LookupForm<R> {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            active: true,
            _resource: PhantomData,
        }
    }
}

impl<R> LookupForm<R> {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

impl<R> FormSchema for LookupForm<R>
where
    R: Resource<Record = Lookup, Create = LookupCreate, Update = LookupUpdate>,
{
    type Resource = R;

    fn from_record(item: &Lookup) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            active: item.active,
            _resource: PhantomData,
        }
    }

    fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }

    fn create_payload(&self) -> Result<LookupCreate, FieldErrors> {
        Ok(LookupCreate {
            name: self.name.clone(),
            description: self.description.clone(),
        })
    }

    fn update_payload(&self) -> Result<LookupUpdate, FieldErrors> {
        Ok(LookupUpdate {
            name: self.name.clone(),
            description: self.description.clone(),
            active: self.active,
        })
    }
}
