// src/forms/masks.rs
//
// Máscaras de entrada. Todas são puras: recebem o texto digitado, ficam só
// com os dígitos e remontam o valor formatado a cada tecla.

use std::str::FromStr;

use rust_decimal::Decimal;

const PHONE_MAX_DIGITS: usize = 11;
const CPF_DIGITS: usize = 11;
const CNPJ_MAX_DIGITS: usize = 14;
// Dígitos significativos do preço, centavos incluídos
const PRICE_MAX_DIGITS: usize = 15;

pub fn digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `(DD) DDDDD-DDDD` para celular, `(DD) DDDD-DDDD` para fixo, montado aos
/// poucos enquanto o usuário digita.
pub fn phone(input: &str) -> String {
    let d: String = digits(input).chars().take(PHONE_MAX_DIGITS).collect();

    match d.len() {
        0 => String::new(),
        1..=2 => format!("({d}"),
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

/// CPF (`DDD.DDD.DDD-DD`) até 11 dígitos, CNPJ (`DD.DDD.DDD/DDDD-DD`) acima
/// disso.
pub fn cnpj_cpf(input: &str) -> String {
    let d = digits(input);

    if d.len() <= CPF_DIGITS {
        return match d.len() {
            0..=3 => d,
            4..=6 => format!("{}.{}", &d[..3], &d[3..]),
            7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
            _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
        };
    }

    let d: String = d.chars().take(CNPJ_MAX_DIGITS).collect();
    if d.len() > 12 {
        format!("{}.{}.{}/{}-{}", &d[..2], &d[2..5], &d[5..8], &d[8..12], &d[12..])
    } else {
        format!("{}.{}.{}/{}", &d[..2], &d[2..5], &d[5..8], &d[8..])
    }
}

// Preço digitado: o que aparece no campo e o valor enviado ao backend
#[derive(Debug, Clone, PartialEq)]
pub struct PriceInput {
    pub display: String,
    pub value: Decimal,
}

/// Máscara de preço estilo caixa registradora: os dois últimos dígitos são
/// os centavos. Campo vazio limpa o valor. Dígitos além do limite são
/// ignorados, então o campo nunca mostra um número diferente do enviado.
pub fn price(input: &str) -> Option<PriceInput> {
    let all = digits(input);
    if all.is_empty() {
        return None;
    }
    let d: String = all
        .trim_start_matches('0')
        .chars()
        .take(PRICE_MAX_DIGITS)
        .collect();

    let padded = format!("{d:0>3}");
    let (integer, cents) = padded.split_at(padded.len() - 2);

    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };

    let value = Decimal::from_str(&format!("{integer}.{cents}")).ok()?;

    Some(PriceInput {
        display: format!("{},{}", group_thousands(integer), cents),
        value,
    })
}

/// Formata um preço já gravado do jeito que o campo exibe (`1.234,50`).
pub fn format_pt_br(value: Decimal) -> String {
    let raw = value.abs().to_string();
    let (integer, decimals) = raw.split_once('.').unwrap_or((raw.as_str(), ""));

    let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "" };
    format!("{sign}{},{:0<2}", group_thousands(integer), decimals)
}

fn group_thousands(integer: &str) -> String {
    let mut out = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_is_built_progressively() {
        assert_eq!(phone(""), "");
        assert_eq!(phone("1"), "(1");
        assert_eq!(phone("11"), "(11");
        assert_eq!(phone("119"), "(11) 9");
        assert_eq!(phone("1198765"), "(11) 9876-5");
        assert_eq!(phone("1134567890"), "(11) 3456-7890");
        assert_eq!(phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn phone_ignores_noise_and_extra_digits() {
        assert_eq!(phone("(11) 98765-43219999"), "(11) 98765-4321");
        assert_eq!(phone("abc"), "");
    }

    #[test]
    fn cpf_mask() {
        assert_eq!(cnpj_cpf("123"), "123");
        assert_eq!(cnpj_cpf("1234"), "123.4");
        assert_eq!(cnpj_cpf("1234567"), "123.456.7");
        assert_eq!(cnpj_cpf("12345678901"), "123.456.789-01");
        assert_eq!(cnpj_cpf("123.456.789-01"), "123.456.789-01");
    }

    #[test]
    fn cnpj_mask() {
        assert_eq!(cnpj_cpf("123456789012"), "12.345.678/9012");
        assert_eq!(cnpj_cpf("1234567890123"), "12.345.678/9012-3");
        assert_eq!(cnpj_cpf("12345678000199"), "12.345.678/0001-99");
        assert_eq!(cnpj_cpf("12345678000199777"), "12.345.678/0001-99");
    }

    #[test]
    fn price_treats_last_two_digits_as_cents() {
        let p = price("5").unwrap();
        assert_eq!(p.display, "0,05");
        assert_eq!(p.value, Decimal::from_str("0.05").unwrap());

        let p = price("123456").unwrap();
        assert_eq!(p.display, "1.234,56");
        assert_eq!(p.value, Decimal::from_str("1234.56").unwrap());

        let p = price("R$ 1.234,567").unwrap();
        assert_eq!(p.display, "12.345,67");
    }

    #[test]
    fn price_stops_at_digit_limit() {
        let p = price(&"9".repeat(30)).unwrap();
        assert_eq!(p.display, "9.999.999.999.999,99");
        assert_eq!(p.value, Decimal::from_str("9999999999999.99").unwrap());
        assert_eq!(format_pt_br(p.value), p.display);

        assert_eq!(price("0000").unwrap().display, "0,00");
    }

    #[test]
    fn empty_price_clears_value() {
        assert_eq!(price(""), None);
        assert_eq!(price("R$ ,"), None);
    }

    #[test]
    fn stored_price_is_rendered_for_editing() {
        assert_eq!(format_pt_br(Decimal::from_str("1234.5").unwrap()), "1.234,50");
        assert_eq!(format_pt_br(Decimal::from_str("12").unwrap()), "12,00");
        assert_eq!(format_pt_br(Decimal::from_str("1000000.99").unwrap()), "1.000.000,99");
    }
}
