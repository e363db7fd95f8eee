// ============================================================================
// ADMIN DELETE CONFIRMATION - Confirmación de borrados del panel admin
// ============================================================================
// Intercepta el submit de cada formulario marcado, pregunta nombrando lo que
// se va a borrar y solo entonces re-dispara el envío nativo. Una instancia
// independiente por formulario; sin estado compartido entre ellos.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement};

use crate::dom::{input_value, on_submit, query_selector_all};
use crate::state::AppState;
use crate::utils::constants::{DELETE_CONFIRM_FORM_SELECTOR, DELETE_TIMESLOT_FIELD};

/// Cablear la confirmación en todos los formularios de borrado marcados
pub fn init_delete_confirmations(state: &AppState) -> Result<(), JsValue> {
    let forms = query_selector_all(DELETE_CONFIRM_FORM_SELECTOR)?;
    let mut wired = 0;

    for value in forms.iter() {
        let form: Element = match value.dyn_into() {
            Ok(el) => el,
            Err(_) => continue,
        };
        wire_delete_confirmation(state, form)?;
        wired += 1;
    }

    if wired > 0 {
        log::info!("🛡️ [ADMIN] {} formularios de borrado con confirmación", wired);
    }
    Ok(())
}

fn wire_delete_confirmation(state: &AppState, form: Element) -> Result<(), JsValue> {
    let state_clone = state.clone();
    let form_clone = form.clone();

    on_submit(&form, move |event: web_sys::Event| {
        // Bloquear el envío inmediato
        event.prevent_default();

        // Identificador legible de lo que se va a borrar
        let value = form_clone
            .query_selector(&format!("input[name=\"{}\"]", DELETE_TIMESLOT_FIELD))
            .ok()
            .flatten()
            .and_then(|input| input_value(&input))
            .unwrap_or_default();

        let lang = state_clone.language();
        let message = if lang.eq_ignore_ascii_case("EN") {
            format!(
                "Delete time slot \"{}\"?\nThis takes effect immediately and cannot be undone!",
                value
            )
        } else {
            format!(
                "您确定要删除时间段 \"{}\" 吗？\n此操作将立即生效且无法撤销！",
                value
            )
        };

        if (state_clone.confirm_prompt)(&message) {
            // Reenviar de forma nativa: form.submit() no re-dispara este listener
            if let Some(form_el) = form_clone.dyn_ref::<HtmlFormElement>() {
                if let Err(e) = form_el.submit() {
                    log::error!("❌ [ADMIN] No se pudo reenviar el formulario: {:?}", e);
                }
            }
        }
        // Si el usuario declina, el envío queda descartado en silencio
    })
}
