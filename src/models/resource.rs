// src/models/resource.rs

use serde::{de::DeserializeOwned, Serialize};

use crate::table::ColumnConfig;

/// Registro vindo da API. O id só existe depois de persistido.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    fn id(&self) -> Option<i64>;
    fn is_active(&self) -> bool;
}

// Rótulos usados nos toasts e títulos de cada página
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub singular: &'static str,
    pub plural: &'static str,
    pub feminine: bool,
}

impl Labels {
    fn suffix(&self) -> &'static str {
        if self.feminine { "a" } else { "o" }
    }

    pub fn created(&self) -> String {
        format!("{} criad{} com sucesso!", self.singular, self.suffix())
    }

    pub fn updated(&self) -> String {
        format!("{} atualizad{} com sucesso!", self.singular, self.suffix())
    }

    pub fn deleted(&self) -> String {
        format!("{} deletad{} com sucesso!", self.singular, self.suffix())
    }

    pub fn create_failed(&self) -> String {
        format!("Erro ao criar {}. Tente novamente.", self.singular.to_lowercase())
    }

    pub fn update_failed(&self) -> String {
        format!("Erro ao atualizar {}. Tente novamente.", self.singular.to_lowercase())
    }

    pub fn delete_failed(&self) -> String {
        format!("Erro ao deletar {}. Tente novamente.", self.singular.to_lowercase())
    }

    pub fn load_failed(&self) -> String {
        format!("Erro ao carregar {}", self.plural.to_lowercase())
    }
}

/// Descreve um recurso REST: o registro, os payloads de criação e
/// atualização, o caminho base e as colunas da tabela.
pub trait Resource: Send + Sync + 'static {
    type Record: Record;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;

    const PATH: &'static str;
    const LABELS: Labels;
    const DELETABLE: bool = true;

    fn columns() -> Vec<ColumnConfig>;

    /// Payload de atualização que só inverte o `active` do registro.
    fn toggled(record: &Self::Record) -> Self::Update;
}
