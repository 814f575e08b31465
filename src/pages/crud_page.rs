// src/pages/crud_page.rs

use super::toasts::Toasts;
use crate::{
    common::error::AppError,
    forms::{
        modal::{FormSchema, RecordOf},
        ConfirmModal, Modal, Submission,
    },
    models::resource::{Labels, Record, Resource},
    services::{ApiClient, CrudService},
    table::{Table, TableEvent},
};

// Cartões do topo da página
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl Stats {
    pub fn of<T: Record>(records: &[T]) -> Self {
        let active = records.iter().filter(|r| r.is_active()).count();
        Self {
            total: records.len(),
            active,
            inactive: records.len() - active,
        }
    }
}

/// Página de cadastro genérica: lista, tabela, modal de edição e
/// confirmação de exclusão para o recurso do formulário `F`.
///
/// A página é dona da lista. Cada operação bem-sucedida aplica o resultado
/// localmente; uma falha deixa tudo como estava e gera um toast.
pub struct CrudPage<F: FormSchema> {
    service: CrudService<F::Resource>,
    records: Vec<RecordOf<F>>,
    table: Table<RecordOf<F>>,
    modal: Modal<F>,
    confirm: ConfirmModal<RecordOf<F>>,
    toasts: Toasts,
    loading: bool,
}

impl<F: FormSchema> CrudPage<F> {
    pub fn new(api: ApiClient) -> Self {
        let page_size = api.config().page_size;
        Self {
            service: CrudService::new(api),
            records: Vec::new(),
            table: Table::new(<F::Resource as Resource>::columns(), page_size),
            modal: Modal::new(),
            confirm: ConfirmModal::default(),
            toasts: Toasts::default(),
            loading: false,
        }
    }

    fn labels() -> Labels {
        <F::Resource as Resource>::LABELS
    }

    // --- Acesso ---

    pub fn service(&self) -> &CrudService<F::Resource> {
        &self.service
    }

    pub fn records(&self) -> &[RecordOf<F>] {
        &self.records
    }

    pub fn stats(&self) -> Stats {
        Stats::of(&self.records)
    }

    pub fn table(&self) -> &Table<RecordOf<F>> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut Table<RecordOf<F>> {
        &mut self.table
    }

    pub fn modal(&self) -> &Modal<F> {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut Modal<F> {
        &mut self.modal
    }

    pub fn confirm(&self) -> &ConfirmModal<RecordOf<F>> {
        &self.confirm
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Troca a lista inteira (carga inicial). O estado da tabela reinicia.
    pub fn set_records(&mut self, records: Vec<RecordOf<F>>) {
        self.records = records;
        self.table.set_data(self.records.clone());
    }

    fn sync_table(&mut self) {
        self.table.refresh(self.records.clone());
    }

    fn replace_record(&mut self, id: i64, record: RecordOf<F>) {
        if let Some(slot) = self.records.iter_mut().find(|r| r.id() == Some(id)) {
            *slot = record;
        }
        self.sync_table();
    }

    // --- Operações ---

    pub async fn load(&mut self) -> Result<(), AppError> {
        let labels = Self::labels();
        self.loading = true;
        let result = self.service.list().await;
        self.loading = false;

        match result {
            Ok(records) => {
                tracing::info!("✅ {}: {} registros carregados", labels.plural, records.len());
                self.set_records(records);
                Ok(())
            }
            Err(e) => {
                self.toasts.error(e.toast_message(&labels.load_failed()));
                Err(e)
            }
        }
    }

    /// Trata uma intenção vinda da tabela.
    pub async fn dispatch(&mut self, event: TableEvent<RecordOf<F>>) -> Result<(), AppError> {
        match event {
            TableEvent::Create => self.modal.open_create(),
            TableEvent::Edit(record) => self.modal.open_edit(record),
            TableEvent::Delete(record) => self.request_delete(record),
            TableEvent::ToggleStatus(record) => self.toggle_status(&record).await?,
        }
        Ok(())
    }

    /// Envia o formulário aberto. Criação acrescenta o registro devolvido,
    /// edição substitui o registro de mesmo id. O modal só fecha no sucesso.
    pub async fn save(&mut self) -> Result<RecordOf<F>, AppError> {
        let labels = Self::labels();
        let submission = self.modal.submit().map_err(AppError::InvalidForm)?;

        self.loading = true;
        let result = match &submission {
            Submission::Create(payload) => self.service.create(payload).await,
            Submission::Update { id, payload } => self.service.update(*id, payload).await,
        };
        self.loading = false;

        match (result, submission.id()) {
            (Ok(record), None) => {
                self.records.push(record.clone());
                self.sync_table();
                self.toasts.success(labels.created());
                self.modal.close();
                Ok(record)
            }
            (Ok(record), Some(id)) => {
                self.replace_record(id, record.clone());
                self.toasts.success(labels.updated());
                self.modal.close();
                Ok(record)
            }
            (Err(e), None) => {
                self.toasts.error(e.toast_message(&labels.create_failed()));
                Err(e)
            }
            (Err(e), Some(_)) => {
                self.toasts.error(e.toast_message(&labels.update_failed()));
                Err(e)
            }
        }
    }

    /// Inverte o `active` do registro com uma atualização completa.
    /// Registro sem id é ignorado.
    pub async fn toggle_status(&mut self, record: &RecordOf<F>) -> Result<(), AppError> {
        let Some(id) = record.id() else {
            return Ok(());
        };
        let labels = Self::labels();
        let payload = <F::Resource as Resource>::toggled(record);

        self.loading = true;
        let result = self.service.update(id, &payload).await;
        self.loading = false;

        match result {
            Ok(updated) => {
                self.replace_record(id, updated);
                self.toasts.success(labels.updated());
                Ok(())
            }
            Err(e) => {
                self.toasts.error(e.toast_message(&labels.update_failed()));
                Err(e)
            }
        }
    }

    // --- Exclusão em dois passos ---

    pub fn request_delete(&mut self, record: RecordOf<F>) {
        self.confirm.request(record);
    }

    pub fn cancel_delete(&mut self) {
        self.confirm.cancel();
    }

    /// Exclui o registro pendente. A seleção é limpa com sucesso ou falha.
    pub async fn confirm_delete(&mut self) -> Result<(), AppError> {
        let Some(id) = self.confirm.confirm().and_then(|r| r.id()) else {
            return Ok(());
        };
        let labels = Self::labels();

        self.loading = true;
        let result = self.service.delete(id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.records.retain(|r| r.id() != Some(id));
                self.sync_table();
                self.toasts.success(labels.deleted());
                Ok(())
            }
            Err(e) => {
                self.toasts.error(e.toast_message(&labels.delete_failed()));
                Err(e)
            }
        }
    }
}
