// src/forms.rs

pub mod field_errors;
pub mod lookup_form;
pub mod masks;
pub mod material_form;
pub mod modal;
pub mod party_form;
pub mod rules;
pub mod user_form;

pub use field_errors::FieldErrors;
pub use lookup_form::LookupForm;
pub use material_form::MaterialForm;
pub use modal::{ConfirmModal, FormSchema, Modal, Submission};
pub use party_form::{CustomerForm, SupplierForm};
pub use user_form::UserForm;
