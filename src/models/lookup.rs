// src/models/lookup.rs
//
// Cadastros auxiliares da tela de configurações: unidades de medida, tipos
// de material e tipos de item. Os três têm o mesmo formato.

use serde::{Deserialize, Serialize};

use super::resource::{Labels, Record, Resource};
use crate::table::{audit_columns, ColumnConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lookup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub active: bool,
    // Datas no texto enviado pelo servidor; a busca da tabela compara esse texto
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupCreate {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupUpdate {
    pub name: String,
    pub description: String,
    pub active: bool,
}

impl Record for Lookup {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

fn lookup_columns() -> Vec<ColumnConfig> {
    let mut columns = vec![
        ColumnConfig::field("id", "ID"),
        ColumnConfig::field("name", "Nome"),
        ColumnConfig::field("description", "Descrição"),
    ];
    columns.extend(audit_columns());
    columns
}

fn toggled_lookup(item: &Lookup) -> LookupUpdate {
    LookupUpdate {
        name: item.name.clone(),
        description: item.description.clone(),
        active: !item.active,
    }
}

pub struct UnitMeasures;

impl Resource for UnitMeasures {
    type Record = Lookup;
    type Create = LookupCreate;
    type Update = LookupUpdate;

    const PATH: &'static str = "/config/unit-measures";
    const LABELS: Labels = Labels {
        singular: "Unidade de medida",
        plural: "Unidades de medida",
        feminine: true,
    };

    fn columns() -> Vec<ColumnConfig> {
        lookup_columns()
    }

    fn toggled(item: &Lookup) -> LookupUpdate {
        toggled_lookup(item)
    }
}

pub struct MaterialTypes;

impl Resource for MaterialTypes {
    type Record = Lookup;
    type Create = LookupCreate;
    type Update = LookupUpdate;

    const PATH: &'static str = "/config/material-types";
    const LABELS: Labels = Labels {
        singular: "Tipo de material",
        plural: "Tipos de material",
        feminine: false,
    };

    fn columns() -> Vec<ColumnConfig> {
        lookup_columns()
    }

    fn toggled(item: &Lookup) -> LookupUpdate {
        toggled_lookup(item)
    }
}

pub struct ItemTypes;

impl Resource for ItemTypes {
    type Record = Lookup;
    type Create = LookupCreate;
    type Update = LookupUpdate;

    const PATH: &'static str = "/config/items-types";
    const LABELS: Labels = Labels {
        singular: "Tipo de item",
        plural: "Tipos de item",
        feminine: false,
    };

    fn columns() -> Vec<ColumnConfig> {
        lookup_columns()
    }

    fn toggled(item: &Lookup) -> LookupUpdate {
        toggled_lookup(item)
    }
}
