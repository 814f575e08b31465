// src/table/cell.rs

use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

// Texto usado quando o registro não tem o campo pedido
pub const MISSING: &str = "undefined";

/// Representação textual de um valor, do jeito que o console compara
/// células: strings como estão, `null`, `true`/`false`, listas separadas
/// por vírgula e objetos como `[object Object]`.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // Dentro de listas, null vira vazio
                Value::Null => String::new(),
                other => cell_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Texto de um campo do registro; campo inexistente vira `undefined`.
pub fn field_text(row: &Value, key: &str) -> String {
    match row.get(key) {
        Some(value) => cell_text(value),
        None => MISSING.to_string(),
    }
}

/// Campo de data para exibição, `dd/mm/aaaa hh:mm`. Texto que não é data
/// aparece como está.
pub fn date_field_text(row: &Value, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(raw)) => format_date(raw),
        _ => field_text(row, key),
    }
}

fn format_date(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"));
    match parsed {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // 10.0 aparece como "10"
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f as i128),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stringifies_scalars() {
        assert_eq!(cell_text(&json!(null)), "null");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(12.5)), "12.5");
        assert_eq!(cell_text(&json!(10.0)), "10");
        assert_eq!(cell_text(&json!("Cimento")), "Cimento");
    }

    #[test]
    fn stringifies_compound_values() {
        assert_eq!(cell_text(&json!(["a", null, 3])), "a,,3");
        assert_eq!(cell_text(&json!({"a": 1})), "[object Object]");
    }

    #[test]
    fn missing_field_is_undefined() {
        let row = json!({"name": "Ana"});
        assert_eq!(field_text(&row, "name"), "Ana");
        assert_eq!(field_text(&row, "city"), "undefined");
    }

    #[test]
    fn dates_render_with_or_without_offset() {
        let row = json!({
            "registeredAt": "2024-01-15T10:30:00.000",
            "updatedAt": "2024-02-01T08:05:00Z",
            "note": "ontem"
        });
        assert_eq!(date_field_text(&row, "registeredAt"), "15/01/2024 10:30");
        assert_eq!(date_field_text(&row, "updatedAt"), "01/02/2024 08:05");
        assert_eq!(date_field_text(&row, "note"), "ontem");
        assert_eq!(date_field_text(&row, "deletedAt"), "undefined");
    }
}
