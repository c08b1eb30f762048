use chrono::NaiveDateTime;
use web_sys::Element;
use crate::error::UiError;
use crate::utils::TOAST_HIDDEN_EVENT;

/// Componentes del toolkit de UI (tooltips, alertas, toasts) que usa la página
pub trait UiToolkit {
    /// Activar el tooltip de un elemento
    fn init_tooltip(&self, element: &Element) -> Result<(), UiError>;

    /// Cerrar (y retirar) una alerta
    fn close_alert(&self, element: &Element) -> Result<(), UiError>;

    /// Mostrar un toast ya insertado en el DOM
    fn show_toast(&self, element: &Element) -> Result<(), UiError>;

    /// Evento que el toolkit dispara sobre el toast cuando termina de ocultarse
    fn toast_hidden_event(&self) -> &'static str {
        TOAST_HIDDEN_EVENT
    }
}

/// Diálogos nativos bloqueantes
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Reloj local de la página
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}
