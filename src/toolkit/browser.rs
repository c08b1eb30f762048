// ============================================================================
// IMPLEMENTACIONES DE NAVEGADOR - Bootstrap, diálogos nativos y reloj local
// ============================================================================

use chrono::NaiveDateTime;
use web_sys::Element;
use crate::dom::window;
use crate::error::{js_error_text, UiError};
use super::bootstrap_ffi::{Alert, Toast, Tooltip};
use super::{Clock, Dialogs, UiToolkit};

/// Toolkit respaldado por el `bootstrap` global de la página
#[derive(Debug, Default, Clone, Copy)]
pub struct BootstrapToolkit;

impl UiToolkit for BootstrapToolkit {
    fn init_tooltip(&self, element: &Element) -> Result<(), UiError> {
        Tooltip::new(element)
            .map(|_| ())
            .map_err(|e| UiError::Toolkit(js_error_text(&e)))
    }

    fn close_alert(&self, element: &Element) -> Result<(), UiError> {
        Alert::new(element)
            .and_then(|alert| alert.close())
            .map_err(|e| UiError::Toolkit(js_error_text(&e)))
    }

    fn show_toast(&self, element: &Element) -> Result<(), UiError> {
        Toast::new(element)
            .and_then(|toast| toast.show())
            .map_err(|e| UiError::Toolkit(js_error_text(&e)))
    }
}

/// `window.confirm` / `window.alert`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        match window() {
            Some(win) => win.confirm_with_message(message).unwrap_or_else(|e| {
                log::error!("❌ [DIALOG] confirm falló: {}", js_error_text(&e));
                false
            }),
            None => false,
        }
    }

    fn alert(&self, message: &str) {
        if let Some(win) = window() {
            if let Err(e) = win.alert_with_message(message) {
                log::error!("❌ [DIALOG] alert falló: {}", js_error_text(&e));
            }
        }
    }
}

/// Hora local del navegador
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
