// ============================================================================
// EVENT HANDLING - Listeners sobre elementos
// ============================================================================
// Los closures se registran con forget(): cuando el elemento sale del DOM el
// navegador libera sus listeners. Listeners globales (window/document) solo
// deben registrarse UNA VEZ.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};
use crate::error::UiError;

/// Registrar un handler genérico para `event_type`
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Mismo handler para varios tipos de evento
pub fn on_events<F>(target: &EventTarget, event_types: &[&str], handler: F) -> Result<(), UiError>
where
    F: Fn(Event) + 'static,
{
    let handler = std::rc::Rc::new(handler);
    for event_type in event_types {
        let handler = handler.clone();
        on_event(target, event_type, move |e| handler(e))?;
    }
    Ok(())
}
