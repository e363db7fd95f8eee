// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .class_list()
        .add_1(class)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .class_list()
        .remove_1(class)
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Obtener atributo
pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Remover atributo
pub fn remove_attribute(element: &Element, name: &str) -> Result<(), JsValue> {
    element.remove_attribute(name)
}

/// Leer el valor de un <input>
pub fn input_value(element: &Element) -> Option<String> {
    element
        .dyn_ref::<HtmlInputElement>()
        .map(|input| input.value())
}

/// Establecer el valor de un <input>
pub fn set_input_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    }
}

/// Mover el foco a un elemento
pub fn focus_element(element: &Element) {
    if let Some(html_el) = element.dyn_ref::<HtmlElement>() {
        let _ = html_el.focus();
    }
}

/// Diálogo de confirmación nativo del navegador.
/// Sin window (o si el navegador lo bloquea) se responde "no".
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Query selector (buscar elemento por selector CSS)
pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}

/// Query selector all (buscar múltiples elementos por selector CSS)
/// Usa js_sys::eval para ejecutar querySelectorAll directamente
pub fn query_selector_all(selector: &str) -> Result<js_sys::Array, JsValue> {
    let js_code = format!("Array.from(document.querySelectorAll('{}'))", selector);
    let result = js_sys::eval(&js_code)?;
    if let Some(array) = result.dyn_ref::<js_sys::Array>() {
        Ok(array.clone())
    } else {
        Err(JsValue::from_str("querySelectorAll did not return an array"))
    }
}
