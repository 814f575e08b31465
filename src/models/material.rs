// src/models/material.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::resource::{Labels, Record, Resource};
use crate::table::{audit_columns, ColumnConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub description: String,
    pub material_type_id: i64,
    #[serde(default)]
    pub material_type_description: String,
    pub unit_measure_id: i64,
    #[serde(default)]
    pub unit_measure_description: String,
    pub current_price: Decimal,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCreate {
    pub description: String,
    pub material_type_id: i64,
    pub unit_measure_id: i64,
    pub current_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialUpdate {
    pub description: String,
    pub material_type_id: i64,
    pub unit_measure_id: i64,
    pub current_price: Decimal,
    pub active: bool,
}

impl Record for Material {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

pub struct Materials;

impl Resource for Materials {
    type Record = Material;
    type Create = MaterialCreate;
    type Update = MaterialUpdate;

    const PATH: &'static str = "/api/materials";
    const LABELS: Labels = Labels {
        singular: "Material",
        plural: "Materiais",
        feminine: false,
    };

    fn columns() -> Vec<ColumnConfig> {
        let mut columns = vec![
            ColumnConfig::field("id", "ID"),
            ColumnConfig::field("description", "Descrição"),
            ColumnConfig::field("materialTypeDescription", "Tipo de material").filterable(),
            ColumnConfig::field("unitMeasureDescription", "Unidade de medida").filterable(),
            ColumnConfig::field("currentPrice", "Preço atual"),
        ];
        columns.extend(audit_columns());
        columns
    }

    fn toggled(m: &Material) -> MaterialUpdate {
        MaterialUpdate {
            description: m.description.clone(),
            material_type_id: m.material_type_id,
            unit_measure_id: m.unit_measure_id,
            current_price: m.current_price,
            active: !m.active,
        }
    }
}
