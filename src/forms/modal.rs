// src/forms/modal.rs

use super::field_errors::FieldErrors;
use crate::models::resource::{Record, Resource};

pub type RecordOf<F> = <<F as FormSchema>::Resource as Resource>::Record;
pub type CreateOf<F> = <<F as FormSchema>::Resource as Resource>::Create;
pub type UpdateOf<F> = <<F as FormSchema>::Resource as Resource>::Update;

/// Formulário de uma entidade: como nasce em branco, como é preenchido a
/// partir de um registro, quais regras valem e quais payloads emite.
pub trait FormSchema: Default {
    type Resource: Resource;

    fn from_record(record: &RecordOf<Self>) -> Self;

    fn check(&self) -> Result<(), FieldErrors>;

    fn create_payload(&self) -> Result<CreateOf<Self>, FieldErrors>;

    fn update_payload(&self) -> Result<UpdateOf<Self>, FieldErrors>;
}

pub enum Submission<R: Resource> {
    Create(R::Create),
    Update { id: i64, payload: R::Update },
}

impl<R: Resource> Submission<R> {
    pub fn id(&self) -> Option<i64> {
        match self {
            Submission::Create(_) => None,
            Submission::Update { id, .. } => Some(*id),
        }
    }
}

/// Modal de cadastro/edição. O formulário é recriado a cada abertura.
pub struct Modal<F: FormSchema> {
    open: bool,
    editing: Option<RecordOf<F>>,
    form: F,
    errors: FieldErrors,
}

impl<F: FormSchema> Default for Modal<F> {
    fn default() -> Self {
        Self {
            open: false,
            editing: None,
            form: F::default(),
            errors: FieldErrors::new(),
        }
    }
}

impl<F: FormSchema> Modal<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_create(&mut self) {
        self.open_with(None, F::default());
    }

    pub fn open_edit(&mut self, record: RecordOf<F>) {
        let form = F::from_record(&record);
        self.open_with(Some(record), form);
    }

    /// Abre com um formulário já montado (ex.: edição do próprio perfil).
    pub fn open_with(&mut self, record: Option<RecordOf<F>>, form: F) {
        self.editing = record;
        self.form = form;
        self.errors = FieldErrors::new();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.editing = None;
        self.form = F::default();
        self.errors = FieldErrors::new();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing(&self) -> Option<&RecordOf<F>> {
        self.editing.as_ref()
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn can_submit(&self) -> bool {
        self.form.check().is_ok()
    }

    /// Valida e emite o payload. O modal continua aberto: quem salva fecha
    /// depois que o backend confirmar. Com erro, os erros ficam disponíveis
    /// por campo.
    pub fn submit(&mut self) -> Result<Submission<F::Resource>, FieldErrors> {
        match self.build() {
            Ok(submission) => {
                self.errors = FieldErrors::new();
                Ok(submission)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    fn build(&self) -> Result<Submission<F::Resource>, FieldErrors> {
        self.form.check()?;

        match self.editing.as_ref().and_then(Record::id) {
            Some(id) => Ok(Submission::Update {
                id,
                payload: self.form.update_payload()?,
            }),
            None => Ok(Submission::Create(self.form.create_payload()?)),
        }
    }
}

// --- Confirmação de exclusão ---

/// Guarda o registro cuja exclusão aguarda confirmação.
#[derive(Debug)]
pub struct ConfirmModal<T> {
    pending: Option<T>,
}

impl<T> Default for ConfirmModal<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> ConfirmModal<T> {
    pub fn request(&mut self, item: T) {
        self.pending = Some(item);
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    pub fn confirm(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
