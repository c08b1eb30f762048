// ============================================================================
// CANTEEN UI - Comportamiento de página de la cantina (RUST PURO + WASM)
// ============================================================================
// - App: CanteenPage, operaciones sobre el DOM con colaboradores inyectados
// - Toolkit: Bootstrap, diálogos nativos y reloj detrás de traits
// - Models: reglas puras (stock, reserva, filtro, toasts)
// - Views: construcción de elementos y documentos
// - Exports: funciones globales que llama el markup (confirmDelete, showToast...)
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod toolkit;
pub mod utils;
pub mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement};
use crate::app::CanteenPage;
use crate::config::CONFIG;
use crate::dom::{on_event, require_document};
use crate::models::ToastKind;

pub use crate::app::MountSummary;
pub use crate::error::{UiError, ValidationError};

// Instancia global del controlador para los exports
thread_local! {
    static PAGE: RefCell<Option<CanteenPage>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));

    install_page(CanteenPage::browser());

    let document = require_document()?;
    if document.ready_state() == "loading" {
        // Listener global: solo se registra aquí, una vez
        on_event(&document, "DOMContentLoaded", |_e| mount_current_page())?;
    } else {
        mount_current_page();
    }

    log::info!("🚀 Smart Canteen System - Rust cargado");
    Ok(())
}

/// Reemplazar el controlador global (p.ej. con colaboradores propios)
pub fn install_page(page: CanteenPage) {
    PAGE.with(|cell| *cell.borrow_mut() = Some(page));
}

/// Copia del controlador global; se crea el de navegador si no hay ninguno
fn current_page() -> CanteenPage {
    PAGE.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(CanteenPage::browser)
            .clone()
    })
}

fn mount_current_page() {
    let result = require_document().and_then(|document| current_page().mount(&document));
    if let Err(e) = result {
        log::error!("❌ [MOUNT] Error inicializando la página: {}", e);
    }
}

// ============================================================================
// EXPORTS - Llamables desde atributos de evento del markup
// ============================================================================

#[wasm_bindgen(js_name = confirmDelete)]
pub fn confirm_delete(message: Option<String>) -> bool {
    current_page().confirm_delete(message.as_deref())
}

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: JsValue) -> String {
    utils::currency_from_input(amount.as_f64(), amount.as_string().as_deref())
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element: Element, text: Option<String>) {
    if let Err(e) = current_page().show_loading(&element, text.as_deref()) {
        log::warn!("⚠️ [LOADING] {}", e);
    }
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading(element: Element, text: Option<String>) {
    if let Err(e) = current_page().hide_loading(&element, &utils::restore_text(text)) {
        log::warn!("⚠️ [LOADING] {}", e);
    }
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: String, kind: Option<String>) {
    let kind = kind
        .as_deref()
        .map(ToastKind::parse_lenient)
        .unwrap_or_default();
    let result =
        require_document().and_then(|document| current_page().show_toast(&document, &message, kind));
    if let Err(e) = result {
        log::error!("❌ [TOAST] {}", e);
    }
}

#[wasm_bindgen(js_name = updateStockDisplay)]
pub fn update_stock_display(meal_id: JsValue, new_stock: f64) {
    let meal_id = js_key(&meal_id);
    let result = require_document().and_then(|document| {
        current_page().update_stock_display(&document, &meal_id, new_stock as i32)
    });
    if let Err(e) = result {
        log::warn!("⚠️ [STOCK] {}", e);
    }
}

#[wasm_bindgen(js_name = searchTable)]
pub fn search_table(input_id: String, table_id: String) {
    let result = require_document().and_then(|document| {
        let input = document
            .get_element_by_id(&input_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .ok_or_else(|| UiError::ElementNotFound(input_id.clone()))?;
        let table = document
            .get_element_by_id(&table_id)
            .ok_or_else(|| UiError::ElementNotFound(table_id.clone()))?;
        current_page().search_table(&input, &table)
    });
    if let Err(e) = result {
        log::warn!("⚠️ [SEARCH] {}", e);
    }
}

#[wasm_bindgen(js_name = validateReservationForm)]
pub fn validate_reservation_form(form: HtmlFormElement) -> bool {
    current_page().validate_reservation_form(&form)
}

#[wasm_bindgen(js_name = printToken)]
pub fn print_token(token: JsValue) {
    if let Err(e) = current_page().print_token(&js_key(&token)) {
        log::error!("❌ [PRINT] {}", e);
    }
}

/// Ids y tokens llegan como string o número desde el markup
fn js_key(value: &JsValue) -> String {
    utils::key_text(value.as_string(), value.as_f64())
}
