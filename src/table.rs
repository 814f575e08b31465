// src/table.rs

pub mod cell;
pub mod column;
pub mod view;

pub use column::{audit_columns, CellKind, ColumnConfig, ColumnKey};
pub use view::{SortDirection, Table, TableEvent, TableState};
