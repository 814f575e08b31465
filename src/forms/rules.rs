// src/forms/rules.rs

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

// --- Mensagens exibidas abaixo de cada campo ---
pub const MSG_REQUIRED: &str = "Campo obrigatório";
pub const MSG_EMAIL: &str = "E-mail inválido";
pub const MSG_MIN_LENGTH: &str = "Mínimo de caracteres não atendido";
pub const MSG_FORMAT: &str = "Formato inválido";
pub const MSG_PRICE: &str = "Formato de valor inválido";
pub const MSG_PASSWORD_MISMATCH: &str = "As senhas não coincidem";
pub const MSG_CURRENT_PASSWORD: &str = "Informe a senha atual";

pub const CODE_REQUIRED: &str = "required";
pub const CODE_FORMAT: &str = "pattern";

pub const UFS: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

pub static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\d{2}\) \d{4,5}-\d{4}$").expect("padrão de telefone inválido")
});

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub fn required_error() -> ValidationError {
    error(CODE_REQUIRED, MSG_REQUIRED)
}

pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(required_error());
    }
    Ok(())
}

pub fn uf(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if UFS.contains(&value) {
        return Ok(());
    }
    Err(error(CODE_FORMAT, MSG_FORMAT))
}

pub fn price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() || value.normalize().scale() > 2 {
        return Err(error(CODE_FORMAT, MSG_PRICE));
    }
    Ok(())
}
