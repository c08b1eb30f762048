use web_sys::{Document, Element};
use crate::dom::{set_disabled, set_text_content, ElementBuilder};
use crate::error::UiError;
use crate::utils::SPINNER_CLASS;

/// Spinner + texto, control deshabilitado
pub fn render_loading(document: &Document, target: &Element, text: &str) -> Result<(), UiError> {
    let spinner = ElementBuilder::new(document, "span")
        .map(|b| b.class(SPINNER_CLASS).build())?;

    set_text_content(target, "");
    target.append_child(&spinner)?;
    target.append_child(&document.create_text_node(&format!(" {}", text)))?;
    set_disabled(target, true)
}

/// Restaurar el texto dado y habilitar el control
pub fn render_idle(target: &Element, text: &str) -> Result<(), UiError> {
    set_text_content(target, text);
    set_disabled(target, false)
}
