//! Money formatting in Mozambican metical
//!
//! Whole meticais, '.' as thousands separator, the ISO code after the
//! amount: `1.234.567 MZN`.

pub const CURRENCY_CODE: &str = "MZN";

/// Format an amount as whole meticais
///
/// Rounds half away from zero. Non-finite amounts render as "n/a".
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let rounded = amount.round() as i128;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{} {}", grouped, CURRENCY_CODE)
}

/// Amount followed by a unit suffix, e.g. `35.000 MZN/ha`
pub fn format_currency_with_unit(amount: f64, unit: &str) -> String {
    format!("{}{}", format_currency(amount), unit)
}
