// ============================================================================
// INPUT - Valores que llegan desde el markup (string, número o nada)
// ============================================================================

use super::format::{format_currency, format_currency_str};

/// Lo que JS muestra al convertir `undefined` en texto
pub const UNDEFINED_TEXT: &str = "undefined";

/// Ids de plato y tokens: string tal cual, número sin ".0" si es entero
pub fn key_text(text: Option<String>, number: Option<f64>) -> String {
    if let Some(s) = text {
        return s;
    }
    match number {
        Some(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", n as i64),
        Some(n) => n.to_string(),
        None => String::new(),
    }
}

/// `formatCurrency` acepta número o texto; cualquier otra cosa es NaN
pub fn currency_from_input(number: Option<f64>, text: Option<&str>) -> String {
    match (number, text) {
        (Some(value), _) => format_currency(value),
        (None, Some(text)) => format_currency_str(text),
        (None, None) => format_currency(f64::NAN),
    }
}

/// Texto de restauración de `hideLoading`; sin argumento JS pinta "undefined"
pub fn restore_text(text: Option<String>) -> String {
    text.unwrap_or_else(|| UNDEFINED_TEXT.to_string())
}
