// src/forms/material_form.rs

use rust_decimal::Decimal;
use validator::Validate;

use super::{
    field_errors::{required_value, FieldErrors},
    masks,
    modal::FormSchema,
    rules,
};
use crate::models::material::{Material, MaterialCreate, MaterialUpdate, Materials};

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct MaterialForm {
    #[validate(
        custom(function = "rules::required"),
        length(min = 3, message = "Mínimo de caracteres não atendido")
    )]
    pub description: String,

    #[validate(required(message = "Campo obrigatório"))]
    pub material_type_id: Option<i64>,

    #[validate(required(message = "Campo obrigatório"))]
    pub unit_measure_id: Option<i64>,

    #[validate(required(message = "Campo obrigatório"), custom(function = "rules::price"))]
    pub current_price: Option<Decimal>,

    /// Texto exibido no campo de preço (`1.234,56`).
    pub price_display: String,

    pub active: bool,
}

impl Default for MaterialForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            material_type_id: None,
            unit_measure_id: None,
            current_price: None,
            price_display: String::new(),
            active: true,
        }
    }
}

impl MaterialForm {
    /// Aplica a máscara de preço ao que foi digitado.
    pub fn set_price(&mut self, raw: &str) {
        match masks::price(raw) {
            Some(input) => {
                self.price_display = input.display;
                self.current_price = Some(input.value);
            }
            None => {
                self.price_display.clear();
                self.current_price = None;
            }
        }
    }
}

impl FormSchema for MaterialForm {
    type Resource = Materials;

    fn from_record(material: &Material) -> Self {
        Self {
            description: material.description.clone(),
            material_type_id: Some(material.material_type_id),
            unit_measure_id: Some(material.unit_measure_id),
            current_price: Some(material.current_price),
            price_display: masks::format_pt_br(material.current_price),
            active: material.active,
        }
    }

    fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }

    fn create_payload(&self) -> Result<MaterialCreate, FieldErrors> {
        Ok(MaterialCreate {
            description: self.description.clone(),
            material_type_id: required_value(self.material_type_id, "materialTypeId")?,
            unit_measure_id: required_value(self.unit_measure_id, "unitMeasureId")?,
            current_price: required_value(self.current_price, "currentPrice")?,
        })
    }

    fn update_payload(&self) -> Result<MaterialUpdate, FieldErrors> {
        let MaterialCreate {
            description,
            material_type_id,
            unit_measure_id,
            current_price,
        } = self.create_payload()?;

        Ok(MaterialUpdate {
            description,
            material_type_id,
            unit_measure_id,
            current_price,
            active: self.active,
        })
    }
}
