use thiserror::Error;
use wasm_bindgen::JsValue;

/// Fallos de DOM o del toolkit de UI
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    #[error("No window")]
    NoWindow,

    #[error("No document")]
    NoDocument,

    #[error("Document has no body")]
    NoBody,

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Toolkit error: {0}")]
    Toolkit(String),

    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(js_error_text(&value))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Texto legible de un error JS (string, Error.message o Debug)
pub fn js_error_text(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Motivos de rechazo del formulario de reserva; el mensaje es el que ve el usuario
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Pickup time must be at least 1 hour from now")]
    PickupTooSoon,

    #[error("Quantity must be at least 1")]
    QuantityTooLow,
}
