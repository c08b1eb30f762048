// ============================================================================
// TOAST VIEW - Contenedor y elemento de notificación
// ============================================================================

use web_sys::{Document, Element};
use crate::dom::{set_style, ElementBuilder};
use crate::error::UiError;
use crate::models::ToastKind;
use crate::utils::{TOAST_CONTAINER_CLASS, TOAST_CONTAINER_ID};

/// Contenedor fijo de toasts; se crea una sola vez bajo `body`
pub fn ensure_toast_container(document: &Document, z_index: u32) -> Result<Element, UiError> {
    if let Some(existing) = document.get_element_by_id(TOAST_CONTAINER_ID) {
        return Ok(existing);
    }

    let container = ElementBuilder::new(document, "div")?
        .id(TOAST_CONTAINER_ID)
        .class(TOAST_CONTAINER_CLASS)
        .build();
    set_style(&container, "z-index", &z_index.to_string())?;

    let body = document.body().ok_or(UiError::NoBody)?;
    body.append_child(&container)?;
    log::debug!("🍞 [TOAST] Contenedor creado");
    Ok(container)
}

/// Renderizar toast. El mensaje va como texto, nunca como HTML.
pub fn render_toast(document: &Document, message: &str, kind: ToastKind) -> Result<Element, UiError> {
    let body = ElementBuilder::new(document, "div")?
        .class("toast-body")
        .text(message)
        .build();

    let close = ElementBuilder::new(document, "button")?
        .class("btn-close btn-close-white me-2 m-auto")
        .attr("type", "button")?
        .attr("data-bs-dismiss", "toast")?
        .attr("aria-label", "Close")?
        .build();

    let row = ElementBuilder::new(document, "div")?
        .class("d-flex")
        .child(body)?
        .child(close)?
        .build();

    Ok(ElementBuilder::new(document, "div")?
        .class(&kind.class_name())
        .attr("role", "alert")?
        .attr("aria-live", "assertive")?
        .attr("aria-atomic", "true")?
        .child(row)?
        .build())
}
