// src/table/view.rs

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::{
    cell::{cell_text, date_field_text, field_text},
    column::{CellKind, ColumnConfig, ColumnKey},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

// Estado de visualização: derivado, nunca persistido
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub search_term: String,
    pub column_filters: BTreeMap<String, String>,
    pub sort_key: Option<String>,
    pub sort_direction: SortDirection,
    pub current_page: usize,
    pub page_size: usize,
}

impl TableState {
    fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            column_filters: BTreeMap::new(),
            sort_key: None,
            sort_direction: SortDirection::Asc,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }
}

// Intenções do usuário emitidas pela tabela
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent<T> {
    Create,
    Edit(T),
    Delete(T),
    ToggleStatus(T),
}

struct Row<T> {
    record: T,
    // Snapshot JSON do registro, usado para busca, filtro e ordenação
    fields: Value,
}

/// Tabela genérica: busca, filtros por coluna, ordenação e paginação
/// sobre uma lista em memória.
pub struct Table<T> {
    columns: Vec<ColumnConfig>,
    rows: Vec<Row<T>>,
    state: TableState,
}

impl<T: Serialize + Clone> Table<T> {
    pub fn new(columns: Vec<ColumnConfig>, page_size: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            state: TableState::new(page_size),
        }
    }

    /// Troca o conjunto de dados. O estado de visualização volta ao inicial.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.load_rows(data);
        self.state = TableState::new(self.state.page_size);
    }

    /// Atualiza as linhas mantendo busca, filtros e ordenação. Se a página
    /// atual deixar de existir, volta para a última.
    pub fn refresh(&mut self, data: Vec<T>) {
        self.load_rows(data);
        let last_page = self.total_pages().max(1);
        self.state.current_page = self.state.current_page.min(last_page);
    }

    fn load_rows(&mut self, data: Vec<T>) {
        self.rows = data
            .into_iter()
            .map(|record| {
                let fields = serde_json::to_value(&record).unwrap_or_else(|e| {
                    tracing::warn!("Registro não serializável na tabela: {}", e);
                    Value::Null
                });
                Row { record, fields }
            })
            .collect();
    }

    pub fn data(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|row| &row.record)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[ColumnConfig] {
        &self.columns
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size
    }

    // ---
    // Entradas do usuário
    // ---

    pub fn on_search(&mut self, term: &str) {
        self.state.search_term = term.to_lowercase();
        self.state.current_page = 1;
    }

    pub fn on_filter(&mut self, key: &ColumnKey, value: &str) {
        let Some(field) = key.as_field() else {
            return;
        };
        self.state
            .column_filters
            .insert(field.to_string(), value.to_lowercase());
        self.state.current_page = 1;
    }

    /// Clique no cabeçalho: mesma coluna inverte a direção, outra coluna
    /// começa ascendente. A coluna de ações é ignorada.
    pub fn on_sort_click(&mut self, key: &ColumnKey) {
        let Some(field) = key.as_field() else {
            return;
        };

        if self.state.sort_key.as_deref() == Some(field) {
            self.state.sort_direction = self.state.sort_direction.flipped();
        } else {
            self.state.sort_direction = SortDirection::Asc;
        }
        self.state.sort_key = Some(field.to_string());
    }

    pub fn next_page(&mut self) {
        if self.state.current_page < self.total_pages() {
            self.state.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.state.current_page > 1 {
            self.state.current_page -= 1;
        }
    }

    /// Vai direto para uma página, limitada ao intervalo válido.
    pub fn go_to_page(&mut self, page: usize) {
        self.state.current_page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn create(&self) -> TableEvent<T> {
        TableEvent::Create
    }

    pub fn edit(&self, record: &T) -> TableEvent<T> {
        TableEvent::Edit(record.clone())
    }

    pub fn delete(&self, record: &T) -> TableEvent<T> {
        TableEvent::Delete(record.clone())
    }

    pub fn toggle_status(&self, record: &T) -> TableEvent<T> {
        TableEvent::ToggleStatus(record.clone())
    }

    // ---
    // Visões derivadas
    // ---

    pub fn filtered(&self) -> Vec<&T> {
        self.filtered_rows().into_iter().map(|row| &row.record).collect()
    }

    pub fn paginated(&self) -> Vec<&T> {
        let start = (self.state.current_page - 1) * self.state.page_size;
        self.filtered_rows()
            .into_iter()
            .skip(start)
            .take(self.state.page_size)
            .map(|row| &row.record)
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_rows().len().div_ceil(self.state.page_size)
    }

    /// Texto de uma célula como o console exibe e compara.
    fn cell(&self, record_fields: &Value, column: &ColumnConfig) -> String {
        match &column.key {
            ColumnKey::Field(name) if column.kind == CellKind::Date => {
                date_field_text(record_fields, name)
            }
            ColumnKey::Field(name) => field_text(record_fields, name),
            ColumnKey::Actions => String::new(),
        }
    }

    /// Linhas da página atual já convertidas em texto, uma por coluna de dado.
    pub fn page_cells(&self) -> Vec<Vec<String>> {
        let start = (self.state.current_page - 1) * self.state.page_size;
        self.filtered_rows()
            .into_iter()
            .skip(start)
            .take(self.state.page_size)
            .map(|row| {
                self.columns
                    .iter()
                    .filter(|c| c.is_data())
                    .map(|c| self.cell(&row.fields, c))
                    .collect()
            })
            .collect()
    }

    fn filtered_rows(&self) -> Vec<&Row<T>> {
        let mut rows: Vec<&Row<T>> = self.rows.iter().filter(|row| self.matches(row)).collect();

        if let Some(key) = &self.state.sort_key {
            let direction = self.state.sort_direction;
            // sort_by é estável: empates mantêm a ordem de entrada
            rows.sort_by(|a, b| {
                let va = field_text(&a.fields, key).to_lowercase();
                let vb = field_text(&b.fields, key).to_lowercase();
                let ord = va.cmp(&vb);
                match direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }

        rows
    }

    fn matches(&self, row: &Row<T>) -> bool {
        // Busca geral: basta um campo qualquer conter o termo
        if !self.state.search_term.is_empty() {
            let hit = match &row.fields {
                Value::Object(map) => map.values().any(|v| {
                    cell_text(v).to_lowercase().contains(&self.state.search_term)
                }),
                _ => false,
            };
            if !hit {
                return false;
            }
        }

        // Filtros por coluna
        for (col, value) in &self.state.column_filters {
            if !value.is_empty() && !field_text(&row.fields, col).to_lowercase().contains(value) {
                return false;
            }
        }

        true
    }
}

impl<T> Table<T> {
    pub fn sort_state(&self) -> (Option<&str>, SortDirection) {
        (self.state.sort_key.as_deref(), self.state.sort_direction)
    }
}
