// ============================================================================
// RESERVATION - Reglas del formulario de reserva (solo pre-chequeo en cliente,
// el servidor vuelve a validar)
// ============================================================================

use chrono::{Duration, NaiveDateTime, Timelike};
use crate::error::ValidationError;

/// Formato de `input[type=datetime-local]` con precisión de minutos
pub const PICKUP_VALUE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Valores del formulario ya parseados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationInput {
    pub pickup_time: Option<NaiveDateTime>,
    pub quantity: Option<i64>,
}

impl ReservationInput {
    /// Parsear los valores crudos de los campos `pickup_time` y `quantity`
    pub fn from_raw(pickup_time: &str, quantity: &str) -> Self {
        Self {
            pickup_time: parse_pickup_time(pickup_time),
            quantity: parse_int(quantity),
        }
    }
}

/// Primera hora de recogida aceptable
pub fn pickup_threshold(now: NaiveDateTime, lead: Duration) -> NaiveDateTime {
    now + lead
}

/// Valor por defecto del input: el umbral redondeado al minuto siguiente,
/// para que el valor precargado pase la validación al enviarse
pub fn pickup_default(now: NaiveDateTime, lead: Duration) -> NaiveDateTime {
    let threshold = pickup_threshold(now, lead);
    let truncated = threshold
        - Duration::seconds(i64::from(threshold.second()))
        - Duration::nanoseconds(i64::from(threshold.nanosecond()));
    if truncated == threshold {
        threshold
    } else {
        truncated + Duration::minutes(1)
    }
}

/// Valor para `min`/`value` del input de recogida
pub fn format_pickup_value(time: NaiveDateTime) -> String {
    time.format(PICKUP_VALUE_FORMAT).to_string()
}

/// Acepta `YYYY-MM-DDTHH:MM` y las variantes con segundos
pub fn parse_pickup_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, PICKUP_VALUE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// Entero con la semántica de `parseInt(x, 10)`: prefijo de dígitos tras signo opcional
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = &rest[..rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return None;
    }
    // Un número enorme satura en lugar de perderse
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Regla completa: primero la hora, luego la cantidad. Un valor vacío o
/// ilegible no se rechaza aquí; lo decide el servidor.
pub fn validate_at(
    input: &ReservationInput,
    now: NaiveDateTime,
    lead: Duration,
) -> Result<(), ValidationError> {
    if let Some(pickup) = input.pickup_time {
        if pickup < pickup_threshold(now, lead) {
            return Err(ValidationError::PickupTooSoon);
        }
    }

    match input.quantity {
        Some(q) if q < 1 => Err(ValidationError::QuantityTooLow),
        _ => Ok(()),
    }
}
