// src/pages/configs_page.rs

use std::collections::BTreeSet;

use super::{crud_page::CrudPage, toasts::Toasts};
use crate::{
    common::error::AppError,
    forms::LookupForm,
    models::lookup::{ItemTypes, MaterialTypes, UnitMeasures},
    services::ApiClient,
};

const MSG_LOAD_FAILED: &str = "Erro ao carregar dados nas tabelas";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigSection {
    UnitMeasures,
    MaterialTypes,
    ItemTypes,
}

impl ConfigSection {
    pub const ALL: [ConfigSection; 3] = [
        ConfigSection::UnitMeasures,
        ConfigSection::MaterialTypes,
        ConfigSection::ItemTypes,
    ];
}

/// Tela de configurações: três cadastros auxiliares em seções
/// recolhíveis, carregados juntos.
pub struct ConfigsPage {
    pub unit_measures: CrudPage<LookupForm<UnitMeasures>>,
    pub material_types: CrudPage<LookupForm<MaterialTypes>>,
    pub item_types: CrudPage<LookupForm<ItemTypes>>,
    expanded: BTreeSet<ConfigSection>,
    toasts: Toasts,
    loading: bool,
}

impl ConfigsPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            unit_measures: CrudPage::new(api.clone()),
            material_types: CrudPage::new(api.clone()),
            item_types: CrudPage::new(api),
            expanded: BTreeSet::new(),
            toasts: Toasts::default(),
            loading: false,
        }
    }

    /// Carrega as três listas ao mesmo tempo. Se qualquer uma falhar,
    /// nenhuma é aplicada.
    pub async fn load_all(&mut self) -> Result<(), AppError> {
        self.loading = true;
        let result = tokio::try_join!(
            self.unit_measures.service().list(),
            self.material_types.service().list(),
            self.item_types.service().list()
        );
        self.loading = false;

        match result {
            Ok((unit_measures, material_types, item_types)) => {
                self.unit_measures.set_records(unit_measures);
                self.material_types.set_records(material_types);
                self.item_types.set_records(item_types);
                tracing::info!("✅ Todos os dados carregados com sucesso");
                Ok(())
            }
            Err(e) => {
                self.toasts.error(e.toast_message(MSG_LOAD_FAILED));
                Err(e)
            }
        }
    }

    pub fn toggle_section(&mut self, section: ConfigSection) {
        if !self.expanded.remove(&section) {
            self.expanded.insert(section);
        }
    }

    pub fn is_expanded(&self, section: ConfigSection) -> bool {
        self.expanded.contains(&section)
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{config::AppConfig, guards::History, session::Session};

    fn page() -> ConfigsPage {
        let api = ApiClient::new(AppConfig::default(), Session::in_memory(), Arc::new(History::new()))
            .unwrap();
        ConfigsPage::new(api)
    }

    #[test]
    fn sections_start_collapsed_and_toggle_independently() {
        let mut page = page();
        assert!(ConfigSection::ALL.iter().all(|s| !page.is_expanded(*s)));

        page.toggle_section(ConfigSection::ItemTypes);
        assert!(page.is_expanded(ConfigSection::ItemTypes));
        assert!(!page.is_expanded(ConfigSection::UnitMeasures));

        page.toggle_section(ConfigSection::ItemTypes);
        assert!(!page.is_expanded(ConfigSection::ItemTypes));
    }
}
