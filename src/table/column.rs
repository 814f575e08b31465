// src/table/column.rs

use std::fmt;

// Chave de uma coluna: um campo do registro ou a coluna de ações
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Field(String),
    Actions,
}

impl ColumnKey {
    pub const ACTIONS: &'static str = "actions";

    pub fn field(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == Self::ACTIONS {
            ColumnKey::Actions
        } else {
            ColumnKey::Field(name)
        }
    }

    pub fn as_field(&self) -> Option<&str> {
        match self {
            ColumnKey::Field(name) => Some(name),
            ColumnKey::Actions => None,
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKey::Field(name) => f.write_str(name),
            ColumnKey::Actions => f.write_str(Self::ACTIONS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    #[default]
    Text,
    Boolean,
    Toggle,
    Date,
    Actions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConfig {
    pub key: ColumnKey,
    pub label: String,
    pub searchable: bool,
    pub filterable: bool,
    pub kind: CellKind,
}

impl ColumnConfig {
    /// Coluna de dado comum: pesquisável, sem filtro próprio.
    pub fn field(key: &str, label: &str) -> Self {
        Self {
            key: ColumnKey::field(key),
            label: label.to_string(),
            searchable: true,
            filterable: false,
            kind: CellKind::Text,
        }
    }

    pub fn actions(label: &str) -> Self {
        Self {
            key: ColumnKey::Actions,
            label: label.to_string(),
            searchable: false,
            filterable: false,
            kind: CellKind::Actions,
        }
    }

    pub fn toggle(mut self) -> Self {
        self.kind = CellKind::Toggle;
        self
    }

    pub fn date(mut self) -> Self {
        self.kind = CellKind::Date;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn is_data(&self) -> bool {
        self.key != ColumnKey::Actions
    }
}

// Colunas de auditoria presentes em todas as entidades
pub fn audit_columns() -> Vec<ColumnConfig> {
    vec![
        ColumnConfig::field("active", "Ativo").toggle(),
        ColumnConfig::field("registeredAt", "Data de registro").date(),
        ColumnConfig::field("updatedAt", "Última atualização").date(),
        ColumnConfig::actions("Ações"),
    ]
}
