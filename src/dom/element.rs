// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};
use crate::error::UiError;

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document o error
pub fn require_document() -> Result<Document, UiError> {
    window()
        .ok_or(UiError::NoWindow)?
        .document()
        .ok_or(UiError::NoDocument)
}

/// Crear elemento
pub fn create_element(document: &Document, tag: &str) -> Result<Element, UiError> {
    Ok(document.create_element(tag)?)
}

/// Convertir un NodeList en elementos (los nodos que no son Element se ignoran)
pub fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// querySelectorAll sobre el documento
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    Ok(node_list_elements(&document.query_selector_all(selector)?))
}

/// querySelectorAll dentro de un elemento
pub fn query_all_in(element: &Element, selector: &str) -> Result<Vec<Element>, UiError> {
    Ok(node_list_elements(&element.query_selector_all(selector)?))
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), UiError> {
    Ok(element.class_list().add_1(class)?)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), UiError> {
    Ok(element.class_list().remove_1(class)?)
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), UiError> {
    parent.append_child(child)?;
    Ok(())
}

/// Comparar un atributo con un valor exacto (sin construir selectores)
pub fn get_attribute_eq(element: &Element, name: &str, value: &str) -> bool {
    element.get_attribute(name).as_deref() == Some(value)
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), UiError> {
    Ok(element.set_attribute(name, value)?)
}

/// Remover atributo
pub fn remove_attribute(element: &Element, name: &str) -> Result<(), UiError> {
    Ok(element.remove_attribute(name)?)
}

/// Establecer una propiedad de estilo inline
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), UiError> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| UiError::Js("Element is not an HtmlElement".to_string()))?;
    Ok(html.style().set_property(property, value)?)
}

/// Habilitar/deshabilitar un control (atributo `disabled`)
pub fn set_disabled(element: &Element, disabled: bool) -> Result<(), UiError> {
    if disabled {
        set_attribute(element, "disabled", "")
    } else {
        remove_attribute(element, "disabled")
    }
}
