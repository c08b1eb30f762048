// ============================================================================
// FORMATO - Precios con el símbolo de la cantina
// ============================================================================

use crate::config::CONFIG;

/// Formatear un importe con el símbolo configurado y dos decimales
pub fn format_currency(amount: f64) -> String {
    format_currency_with(&CONFIG.currency_symbol, amount)
}

/// Igual que `format_currency` pero parseando texto como lo hace `parseFloat`
pub fn format_currency_str(amount: &str) -> String {
    format_currency(parse_float(amount))
}

pub fn format_currency_with(symbol: &str, amount: f64) -> String {
    format!("{}{}", symbol, to_fixed_2(amount))
}

/// Dos decimales como `Number.prototype.toFixed(2)`: se redondea sobre la
/// expansión decimal exacta del double y un empate exacto (0.125, 2.625) sube
/// en magnitud. 2.345 -> "2.35", 1.005 -> "1.00". NaN e infinitos como en JS.
/// Desde 1e21 JS pasa a notación exponencial ("1e+21") y aquí también.
pub fn to_fixed_2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0.0 {
        // -0 no entra aquí y se imprime sin signo
        return format!("-{}", to_fixed_2(-value));
    }
    if value >= 1e21 {
        return format!("{:e}", value).replace('e', "e+");
    }

    // 30 decimales bastan: ningún double por debajo de 1e21 queda a menos
    // de 1e-30 de un empate x.xx5 sin serlo
    let expanded = format!("{:.30}", value);
    let (int_part, frac_part) = expanded.split_once('.').unwrap_or((expanded.as_str(), ""));
    let frac = frac_part.as_bytes();
    let digit = |i: usize| frac.get(i).map(|b| u128::from(b - b'0')).unwrap_or(0);

    let int_value: u128 = int_part.parse().unwrap_or(0);
    let mut cents = int_value * 100 + digit(0) * 10 + digit(1);
    if digit(2) >= 5 {
        cents += 1;
    }
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Parseo con la semántica de `parseFloat`: espacios iniciales ignorados,
/// se toma el prefijo numérico más largo y el resto se descarta.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if end < len && bytes[end] == b'.' {
        let mut j = end + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - end - 1;
        if int_digits > 0 || frac_digits > 0 {
            end = j;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}
