// src/pages.rs

pub mod configs_page;
pub mod crud_page;
pub mod materials_page;
pub mod toasts;
pub mod users_page;

use crate::forms::{CustomerForm, SupplierForm};

pub use configs_page::{ConfigSection, ConfigsPage};
pub use crud_page::{CrudPage, Stats};
pub use materials_page::MaterialsPage;
pub use toasts::{Toast, ToastLevel, Toasts};
pub use users_page::UsersPage;

pub type CustomersPage = CrudPage<CustomerForm>;
pub type SuppliersPage = CrudPage<SupplierForm>;
