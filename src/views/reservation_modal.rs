// ============================================================================
// RESERVATION MODAL VIEW - Modal de edición de reserva (Rust puro)
// ============================================================================
// Único punto de verdad de "qué franja se está editando". Abre y cierra el
// diálogo, lanza los envíos y refleja los resultados del servidor sobre la
// celda y sobre sí mismo. Sin actualizaciones optimistas: la celda solo muta
// tras un round-trip exitoso.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{
    add_class, focus_element, get_element_by_id, input_value, query_selector, remove_attribute,
    remove_class, set_attribute, set_input_value, set_text_content, on_click, on_keydown,
};
use crate::models::{ReservationOutcome, Slot};
use crate::state::AppState;
use crate::utils::constants::{
    CELL_SELECTOR, CLOSE_BTN_ID, DELETE_BTN_ID, FORM_DATE_ID, FORM_TIME_SLOT_ID,
    MODAL_ACTIVE_CLASS, MODAL_CURRENT_USER_ID, MODAL_DATE_ID, MODAL_ID, MODAL_TIME_SLOT_ID,
    NAME_INPUT_ID, RESERVED_CLASS, STATUS_MESSAGE_ID, SUBMIT_BTN_ID, SUCCESS_CLOSE_DELAY_MS,
};
use crate::viewmodels::{apply_outcome, delete_decision, DeleteDecision, ReservationViewModel};

/// Abrir el modal sobre una franja (cualquiera: ocupada o libre).
/// Si ya estaba abierto, retargetea la edición pendiente a la nueva franja.
pub fn open_reservation_modal(state: &AppState, slot: Slot) -> Result<(), JsValue> {
    let lang = state.language();

    state.set_pending_edit(slot.clone());

    set_readout(MODAL_DATE_ID, &slot.id.date);
    set_readout(MODAL_TIME_SLOT_ID, &slot.id.time_slot);
    set_readout(MODAL_CURRENT_USER_ID, &slot.occupant_label(&lang));

    // Espejar fecha/franja en los campos ocultos del formulario
    if let Some(field) = get_element_by_id(FORM_DATE_ID) {
        set_input_value(&field, &slot.id.date);
    }
    if let Some(field) = get_element_by_id(FORM_TIME_SLOT_ID) {
        set_input_value(&field, &slot.id.time_slot);
    }

    // Pre-rellenar el campo editable con el ocupante actual (vacío si libre)
    if let Some(input) = get_element_by_id(NAME_INPUT_ID) {
        set_input_value(&input, slot.occupant_or_empty());
    }

    clear_status();

    if let Some(modal) = get_element_by_id(MODAL_ID) {
        add_class(&modal, MODAL_ACTIVE_CLASS)?;
    }

    if let Some(input) = get_element_by_id(NAME_INPUT_ID) {
        focus_element(&input);
    }

    log::info!("📝 [MODAL] Abierto sobre {} {}", slot.id.date, slot.id.time_slot);
    Ok(())
}

/// Cerrar el modal y descartar la edición pendiente.
/// Idempotente: cerrar un modal ya cerrado no hace nada.
pub fn close_reservation_modal(state: &AppState) {
    state.clear_pending_edit();
    if let Some(modal) = get_element_by_id(MODAL_ID) {
        let _ = remove_class(&modal, MODAL_ACTIVE_CLASS);
    }
}

/// Cablear los controles del modal, una sola vez al arrancar
pub fn wire_reservation_modal(state: &AppState) -> Result<(), JsValue> {
    // Control de cierre explícito
    if let Some(close_btn) = get_element_by_id(CLOSE_BTN_ID) {
        let state_clone = state.clone();
        on_click(&close_btn, move |_| close_reservation_modal(&state_clone))?;
    }

    // Click fuera de la superficie del diálogo (sobre el contenedor)
    if let Some(modal) = get_element_by_id(MODAL_ID) {
        let state_clone = state.clone();
        on_click(&modal, move |e: web_sys::MouseEvent| {
            let on_overlay = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| el.id() == MODAL_ID)
                .unwrap_or(false);
            if on_overlay {
                close_reservation_modal(&state_clone);
            }
        })?;
    }

    // Guardar nombre propuesto
    if let Some(submit_btn) = get_element_by_id(SUBMIT_BTN_ID) {
        let state_clone = state.clone();
        on_click(&submit_btn, move |_| submit_from_input(&state_clone))?;
    }

    // Enter envía, Escape cierra
    if let Some(input) = get_element_by_id(NAME_INPUT_ID) {
        let state_clone = state.clone();
        on_keydown(&input, move |e: web_sys::KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                submit_from_input(&state_clone);
            } else if e.key() == "Escape" {
                e.prevent_default();
                close_reservation_modal(&state_clone);
            }
        })?;
    }

    // Borrar (liberar la franja)
    if let Some(delete_btn) = get_element_by_id(DELETE_BTN_ID) {
        let state_clone = state.clone();
        on_click(&delete_btn, move |_| request_delete(&state_clone))?;
    }

    Ok(())
}

/// Leer el nombre propuesto del campo editable y lanzar el envío
fn submit_from_input(state: &AppState) {
    let name = get_element_by_id(NAME_INPUT_ID)
        .and_then(|input| input_value(&input))
        .unwrap_or_default();
    start_submit(state, name);
}

/// Petición de borrado desde el modal: no-op informativo si la franja está
/// libre (cero llamadas de red); confirmación explícita nombrando ocupante y
/// franja si no lo está.
fn request_delete(state: &AppState) {
    let slot = match state.pending_slot() {
        Some(slot) => slot,
        None => {
            log::warn!("⚠️ [MODAL] Borrado solicitado sin edición pendiente");
            return;
        }
    };

    let lang = state.language();
    match delete_decision(&slot, &lang) {
        DeleteDecision::Noop(outcome) => {
            log::info!("ℹ️ [MODAL] Franja ya libre, sin llamada de red");
            render_status(&outcome);
        }
        DeleteDecision::Confirm(message) => {
            if (state.confirm_prompt)(&message) {
                start_submit(state, String::new());
            }
        }
    }
}

/// Lanzar el envío asíncrono de la edición pendiente.
/// La franja objetivo se captura AQUÍ, en el arranque de la petición: un
/// resultado que llegue tarde se aplica a esta captura, nunca a la edición
/// pendiente "actual" (que puede apuntar ya a otra celda).
fn start_submit(state: &AppState, name: String) {
    let target = match state.pending_slot() {
        Some(slot) => slot,
        None => {
            log::warn!("⚠️ [MODAL] Envío solicitado sin edición pendiente");
            return;
        }
    };

    // Latch contra envíos solapados (doble click, borrar con un envío en vuelo)
    if !state.begin_submit() {
        log::warn!("⏳ [MODAL] Envío ya en curso, ignorado");
        return;
    }
    set_controls_enabled(false);

    let state_clone = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let viewmodel = ReservationViewModel::new();
        let lang = state_clone.language();
        let outcome = viewmodel.submit(&target.id, &name, &lang).await;
        settle_submit(&state_clone, target, outcome);
    });
}

/// Resolver un envío: aplicar el resultado a la celda capturada y, solo si el
/// modal sigue apuntando a esa misma franja, reflejarlo también en el modal.
fn settle_submit(state: &AppState, target: Slot, outcome: ReservationOutcome) {
    state.end_submit();
    set_controls_enabled(true);

    let mut target = target;
    let mutated = apply_outcome(&mut target, &outcome);
    if mutated {
        if let Err(e) = update_cell(&target) {
            log::error!("❌ [MODAL] No se pudo actualizar la celda: {:?}", e);
        }
    }

    let still_current = state
        .pending_slot()
        .map(|slot| slot.id == target.id)
        .unwrap_or(false);
    if !still_current {
        // Modal cerrado o retargeteado con la petición en vuelo: el resultado
        // ya quedó aplicado a la celda capturada, sin reabrir ni tocar nada más
        log::info!(
            "🕓 [MODAL] Resultado tardío para {} {}: celda actualizada, modal sin tocar",
            target.id.date,
            target.id.time_slot
        );
        return;
    }

    render_status(&outcome);

    if outcome.is_success() {
        // Refrescar la edición pendiente y el readout con el ocupante confirmado
        let lang = state.language();
        state.set_pending_edit(target.clone());
        set_readout(MODAL_CURRENT_USER_ID, &target.occupant_label(&lang));

        // Auto-cierre diferido para que el mensaje de éxito sea legible
        let state_clone = state.clone();
        let target_id = target.id;
        Timeout::new(SUCCESS_CLOSE_DELAY_MS, move || {
            let still_same = state_clone
                .pending_slot()
                .map(|slot| slot.id == target_id)
                .unwrap_or(false);
            if still_same {
                close_reservation_modal(&state_clone);
            }
        })
        .forget();
    }
}

/// Reflejar la franja en su celda: texto, data-user y clase visual "reserved"
fn update_cell(slot: &Slot) -> Result<(), JsValue> {
    let selector = format!(
        "{}[data-date=\"{}\"][data-time-slot=\"{}\"]",
        CELL_SELECTOR, slot.id.date, slot.id.time_slot
    );
    let cell = match query_selector(&selector)? {
        Some(cell) => cell,
        None => {
            log::warn!(
                "⚠️ [MODAL] Celda no encontrada para {} {}",
                slot.id.date,
                slot.id.time_slot
            );
            return Ok(());
        }
    };

    set_text_content(&cell, slot.occupant_or_empty());
    set_attribute(&cell, "data-user", slot.occupant_or_empty())?;
    if slot.is_reserved() {
        add_class(&cell, RESERVED_CLASS)?;
    } else {
        remove_class(&cell, RESERVED_CLASS)?;
    }
    Ok(())
}

/// Pintar el mensaje de estado etiquetado con su status
fn render_status(outcome: &ReservationOutcome) {
    if let Some(region) = get_element_by_id(STATUS_MESSAGE_ID) {
        set_text_content(&region, &outcome.message);
        region.set_class_name(&format!("status-message {}", outcome.status.css_class()));
    }
}

fn clear_status() {
    if let Some(region) = get_element_by_id(STATUS_MESSAGE_ID) {
        set_text_content(&region, "");
        region.set_class_name("status-message");
    }
}

/// Deshabilitar los controles de envío mientras hay una petición en vuelo
fn set_controls_enabled(enabled: bool) {
    for id in [SUBMIT_BTN_ID, DELETE_BTN_ID] {
        if let Some(btn) = get_element_by_id(id) {
            if enabled {
                let _ = remove_attribute(&btn, "disabled");
            } else {
                let _ = set_attribute(&btn, "disabled", "true");
            }
        }
    }
}

fn set_readout(id: &str, text: &str) {
    if let Some(element) = get_element_by_id(id) {
        set_text_content(&element, text);
    }
}
