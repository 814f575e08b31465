// src/forms/field_errors.rs

use std::collections::BTreeMap;

use validator::{ValidationError, ValidationErrors};

use super::rules::{MSG_EMAIL, MSG_FORMAT, MSG_MIN_LENGTH, MSG_REQUIRED};

/// Uma mensagem por campo (chave camelCase, como no formulário).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    messages: BTreeMap<String, String>,
}

// obrigatório > e-mail > tamanho mínimo > formato
fn priority(code: &str) -> u8 {
    match code {
        "required" => 0,
        "email" => 1,
        "length" => 2,
        _ => 3,
    }
}

fn message_for(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    match &*error.code {
        "required" => MSG_REQUIRED,
        "email" => MSG_EMAIL,
        "length" => MSG_MIN_LENGTH,
        _ => MSG_FORMAT,
    }
    .to_string()
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.messages.get(field).map(String::as_str)
    }

    /// Só grava se o campo ainda não tem erro.
    pub fn add(&mut self, field: &str, message: &str) {
        self.messages
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Valor de um campo de seleção que o `check` já garantiu estar preenchido.
pub fn required_value<T>(value: Option<T>, field: &str) -> Result<T, FieldErrors> {
    value.ok_or_else(|| FieldErrors::single(field, MSG_REQUIRED))
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            let best = field_errors
                .iter()
                .min_by_key(|error| priority(&error.code));
            if let Some(error) = best {
                out.messages.insert(camel_case(&field), message_for(error));
            }
        }
        out
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        FieldErrors::from(&errors)
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_priority_message_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("length"));
        errors.add("name", ValidationError::new("required"));
        errors.add("phone_number", ValidationError::new("regex"));

        let fields = FieldErrors::from(&errors);
        assert_eq!(fields.get("name"), Some(MSG_REQUIRED));
        assert_eq!(fields.get("phoneNumber"), Some(MSG_FORMAT));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn first_manual_error_is_kept() {
        let mut fields = FieldErrors::new();
        fields.add("confirmPassword", "a");
        fields.add("confirmPassword", "b");
        assert_eq!(fields.get("confirmPassword"), Some("a"));
        assert!(fields.into_result().is_err());
    }
}
