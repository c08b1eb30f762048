// ============================================================================
// BOOTSTRAP FFI - Bindings a los constructores globales de bootstrap.*
// ============================================================================
// Solo wrappers para clases JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn close(this: &Alert) -> Result<(), JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Toast;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    pub fn new(element: &Element) -> Result<Toast, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn show(this: &Toast) -> Result<(), JsValue>;
}
