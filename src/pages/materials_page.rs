// src/pages/materials_page.rs

use super::crud_page::CrudPage;
use crate::{
    common::error::AppError,
    forms::MaterialForm,
    models::lookup::{Lookup, MaterialTypes, UnitMeasures},
    services::{ApiClient, CrudService},
};

const MSG_OPTIONS_FAILED: &str = "Erro ao carregar tipos de material e unidades de medida";

/// Página de materiais. Além do CRUD, carrega as opções dos selects de
/// tipo de material e unidade de medida.
pub struct MaterialsPage {
    page: CrudPage<MaterialForm>,
    material_types_service: CrudService<MaterialTypes>,
    unit_measures_service: CrudService<UnitMeasures>,
    material_types: Vec<Lookup>,
    unit_measures: Vec<Lookup>,
}

impl MaterialsPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            material_types_service: CrudService::new(api.clone()),
            unit_measures_service: CrudService::new(api.clone()),
            page: CrudPage::new(api),
            material_types: Vec::new(),
            unit_measures: Vec::new(),
        }
    }

    pub fn page(&self) -> &CrudPage<MaterialForm> {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut CrudPage<MaterialForm> {
        &mut self.page
    }

    pub fn material_types(&self) -> &[Lookup] {
        &self.material_types
    }

    pub fn unit_measures(&self) -> &[Lookup] {
        &self.unit_measures
    }

    pub async fn load(&mut self) -> Result<(), AppError> {
        self.page.load().await
    }

    /// Opções dos selects, só as ativas.
    pub async fn load_options(&mut self) -> Result<(), AppError> {
        let result = tokio::try_join!(
            self.material_types_service.list(),
            self.unit_measures_service.list()
        );
        let (material_types, unit_measures) = match result {
            Ok(lists) => lists,
            Err(e) => {
                self.page
                    .toasts_mut()
                    .error(e.toast_message(MSG_OPTIONS_FAILED));
                return Err(e);
            }
        };

        self.material_types = material_types.into_iter().filter(|l| l.active).collect();
        self.unit_measures = unit_measures.into_iter().filter(|l| l.active).collect();
        Ok(())
    }
}
