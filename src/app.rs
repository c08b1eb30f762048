// ============================================================================
// APP - Controlador de comportamiento de la página de la cantina
// ============================================================================

use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};
use crate::config::{UiConfig, CONFIG};
use crate::dom::{
    add_class, get_attribute_eq, has_class, on_event, on_events, query_all, query_all_in, remove_class,
    set_style, set_text_content, window,
};
use crate::error::{UiError, ValidationError};
use crate::models::filter::{normalize_query, row_matches};
use crate::models::reservation::{self, format_pickup_value, pickup_default};
use crate::models::{ReservationInput, StockSeverity, ToastKind};
use crate::toolkit::{BootstrapToolkit, BrowserDialogs, Clock, Dialogs, LocalClock, UiToolkit};
use crate::utils::*;
use crate::views::{ensure_toast_container, render_idle, render_loading, render_toast, render_token_document};

/// Resultado de `mount`, útil para logs y tests
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MountSummary {
    pub tooltips: usize,
    pub alerts_scheduled: usize,
    pub pickup_inputs: usize,
    pub cards: usize,
}

/// Controlador de la página: colaboradores inyectados + operaciones
#[derive(Clone)]
pub struct CanteenPage {
    toolkit: Rc<dyn UiToolkit>,
    dialogs: Rc<dyn Dialogs>,
    clock: Rc<dyn Clock>,
    config: UiConfig,
}

impl CanteenPage {
    pub fn new(
        toolkit: Rc<dyn UiToolkit>,
        dialogs: Rc<dyn Dialogs>,
        clock: Rc<dyn Clock>,
        config: UiConfig,
    ) -> Self {
        Self {
            toolkit,
            dialogs,
            clock,
            config,
        }
    }

    /// Bootstrap + diálogos nativos + hora local
    pub fn browser() -> Self {
        Self::new(
            Rc::new(BootstrapToolkit),
            Rc::new(BrowserDialogs),
            Rc::new(LocalClock),
            CONFIG.clone(),
        )
    }

    // ------------------------------------------------------------------------
    // Inicialización
    // ------------------------------------------------------------------------

    /// Se ejecuta una vez con el documento ya parseado
    pub fn mount(&self, document: &Document) -> Result<MountSummary, UiError> {
        let summary = MountSummary {
            tooltips: self.init_tooltips(document)?,
            alerts_scheduled: self.schedule_alert_dismissal(document)?,
            pickup_inputs: self.init_pickup_inputs(document)?,
            cards: self.stagger_cards(document)?,
        };
        log::info!(
            "🍽️ [MOUNT] Canteen page lista: {} tooltips, {} alertas, {} inputs de recogida, {} cards",
            summary.tooltips,
            summary.alerts_scheduled,
            summary.pickup_inputs,
            summary.cards
        );
        Ok(summary)
    }

    fn init_tooltips(&self, document: &Document) -> Result<usize, UiError> {
        let mut count = 0;
        for element in query_all(document, TOOLTIP_SELECTOR)? {
            match self.toolkit.init_tooltip(&element) {
                Ok(()) => count += 1,
                Err(e) => log::warn!("⚠️ [MOUNT] Tooltip no inicializado: {}", e),
            }
        }
        Ok(count)
    }

    fn schedule_alert_dismissal(&self, document: &Document) -> Result<usize, UiError> {
        let mut count = 0;
        for alert in query_all(document, ALERT_SELECTOR)? {
            if has_class(&alert, ALERT_PERMANENT_CLASS) {
                continue;
            }
            let toolkit = self.toolkit.clone();
            Timeout::new(self.config.alert_dismiss_ms, move || {
                if let Err(e) = toolkit.close_alert(&alert) {
                    log::warn!("⚠️ [MOUNT] No se pudo cerrar la alerta: {}", e);
                }
            })
            .forget();
            count += 1;
        }
        Ok(count)
    }

    fn init_pickup_inputs(&self, document: &Document) -> Result<usize, UiError> {
        let min_time = format_pickup_value(pickup_default(
            self.clock.now(),
            self.config.pickup_lead(),
        ));

        let mut count = 0;
        for element in query_all(document, PICKUP_INPUT_SELECTOR)? {
            let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
                continue;
            };
            input.set_min(&min_time);
            if input.value().is_empty() {
                input.set_value(&min_time);
            }
            count += 1;
        }
        Ok(count)
    }

    fn stagger_cards(&self, document: &Document) -> Result<usize, UiError> {
        let cards = query_all(document, CARD_SELECTOR)?;
        for (index, card) in cards.iter().enumerate() {
            let card = card.clone();
            let delay = self.config.card_stagger_ms.saturating_mul(index as u32);
            Timeout::new(delay, move || {
                let _ = add_class(&card, CARD_FADE_IN_CLASS);
            })
            .forget();
        }
        Ok(cards.len())
    }

    // ------------------------------------------------------------------------
    // Operaciones llamadas desde el markup
    // ------------------------------------------------------------------------

    /// Confirmación nativa antes de borrar
    pub fn confirm_delete(&self, message: Option<&str>) -> bool {
        self.dialogs.confirm(message.unwrap_or(DEFAULT_DELETE_MESSAGE))
    }

    pub fn show_loading(&self, target: &Element, text: Option<&str>) -> Result<(), UiError> {
        let document = owner_document(target)?;
        render_loading(&document, target, text.unwrap_or(DEFAULT_LOADING_TEXT))
    }

    pub fn hide_loading(&self, target: &Element, text: &str) -> Result<(), UiError> {
        render_idle(target, text)
    }

    /// Crear y mostrar un toast; se retira del DOM cuando el toolkit lo oculta
    pub fn show_toast(
        &self,
        document: &Document,
        message: &str,
        kind: ToastKind,
    ) -> Result<Element, UiError> {
        let container = ensure_toast_container(document, self.config.toast_z_index)?;
        let toast = render_toast(document, message, kind)?;
        container.append_child(&toast)?;

        {
            let toast_clone = toast.clone();
            on_event(&toast, self.toolkit.toast_hidden_event(), move |_e| {
                toast_clone.remove();
                log::debug!("🍞 [TOAST] Toast retirado");
            })?;
        }

        self.toolkit.show_toast(&toast)?;
        log::debug!("🍞 [TOAST] Mostrando toast ({})", kind);
        Ok(toast)
    }

    /// Actualizar los badges de stock de un plato. Devuelve cuántos badges cambiaron.
    pub fn update_stock_display(
        &self,
        document: &Document,
        meal_id: &str,
        new_stock: i32,
    ) -> Result<usize, UiError> {
        let severity =
            StockSeverity::from_stock_with_threshold(new_stock, self.config.low_stock_threshold);
        let text = new_stock.to_string();

        let mut updated = 0;
        for meal in query_all(document, MEAL_SELECTOR)? {
            if !get_attribute_eq(&meal, MEAL_ID_ATTRIBUTE, meal_id) {
                continue;
            }
            for badge in query_all_in(&meal, STOCK_BADGE_SELECTOR)? {
                set_text_content(&badge, &text);
                for other in StockSeverity::ALL {
                    remove_class(&badge, other.class())?;
                }
                add_class(&badge, severity.class())?;
                updated += 1;
            }
        }

        log::debug!(
            "📦 [STOCK] Plato {} -> {} ({:?}, {} badges)",
            meal_id,
            new_stock,
            severity,
            updated
        );
        Ok(updated)
    }

    /// Filtro en vivo de las filas de `table` con el texto de `input`
    pub fn search_table(&self, input: &HtmlInputElement, table: &Element) -> Result<(), UiError> {
        let rows = table.get_elements_by_tag_name("tr");
        let input_clone = input.clone();
        on_events(input, &["keyup", "input"], move |_e| {
            let query = normalize_query(&input_clone.value());
            // La fila 0 es la cabecera
            for i in 1..rows.length() {
                let Some(row) = rows.item(i) else {
                    continue;
                };
                let text = row.text_content().unwrap_or_default();
                let display = if row_matches(&text, &query) { "" } else { "none" };
                if let Err(e) = set_style(&row, "display", display) {
                    log::warn!("⚠️ [SEARCH] Fila {} no actualizada: {}", i, e);
                }
            }
        })
    }

    /// Pre-chequeo del formulario de reserva; muestra alerta si se rechaza
    pub fn validate_reservation_form(&self, form: &HtmlFormElement) -> bool {
        let input = ReservationInput::from_raw(
            &form_field_value(form, PICKUP_TIME_FIELD),
            &form_field_value(form, QUANTITY_FIELD),
        );

        match self.check_reservation(&input) {
            Ok(()) => true,
            Err(err) => {
                log::info!("📝 [RESERVATION] Formulario rechazado: {}", err);
                self.dialogs.alert(&err.to_string());
                false
            }
        }
    }

    /// Regla de reserva contra el reloj inyectado
    pub fn check_reservation(&self, input: &ReservationInput) -> Result<(), ValidationError> {
        reservation::validate_at(input, self.clock.now(), self.config.pickup_lead())
    }

    /// Abrir ventana con el token y lanzar el diálogo de impresión
    pub fn print_token(&self, token: &str) -> Result<(), UiError> {
        let win = window().ok_or(UiError::NoWindow)?;
        let Some(print_window) =
            win.open_with_url_and_target_and_features("", "", PRINT_WINDOW_FEATURES)?
        else {
            log::warn!("⚠️ [PRINT] La ventana de impresión fue bloqueada");
            return Ok(());
        };

        let document = print_window
            .document()
            .ok_or(UiError::NoDocument)?
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|_| UiError::Js("print window document is not an HtmlDocument".to_string()))?;

        let html = render_token_document(token);
        document.write(&js_sys::Array::of1(&JsValue::from_str(&html)))?;
        document.close()?;
        print_window.print()?;
        log::info!("🖨️ [PRINT] Token enviado a imprimir");
        Ok(())
    }
}

fn owner_document(element: &Element) -> Result<Document, UiError> {
    element.owner_document().ok_or(UiError::NoDocument)
}

/// Valor de un control del formulario por nombre ("" si no existe).
/// Vale para input, select o RadioNodeList: todos exponen `value`.
fn form_field_value(form: &HtmlFormElement, name: &str) -> String {
    form.elements()
        .named_item(name)
        .and_then(|item| js_sys::Reflect::get(&item, &JsValue::from_str("value")).ok())
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}
