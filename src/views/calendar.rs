// ============================================================================
// CALENDAR VIEW - Enlace de las celdas renderizadas por el servidor
// ============================================================================
// El calendario llega ya renderizado; aquí solo se leen sus data-attributes
// y se cablea el click de cada celda hacia el modal de reserva.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{get_attribute, on_click, query_selector_all};
use crate::models::Slot;
use crate::state::AppState;
use crate::utils::constants::CELL_SELECTOR;
use crate::views::reservation_modal::open_reservation_modal;

/// Cablear el click de todas las celdas del calendario
pub fn bind_calendar_cells(state: &AppState) -> Result<(), JsValue> {
    let cells = query_selector_all(CELL_SELECTOR)?;
    let mut bound = 0;

    for value in cells.iter() {
        let cell: Element = match value.dyn_into() {
            Ok(el) => el,
            Err(_) => continue,
        };

        let state_clone = state.clone();
        let cell_ref = cell.clone();
        on_click(&cell, move |_| {
            // Leer los atributos en el momento del click: el ocupante puede
            // haber cambiado desde que se cableó el listener
            match slot_from_cell(&cell_ref) {
                Some(slot) => {
                    if let Err(e) = open_reservation_modal(&state_clone, slot) {
                        log::error!("❌ [CALENDAR] No se pudo abrir el modal: {:?}", e);
                    }
                }
                None => log::warn!("⚠️ [CALENDAR] Celda sin data-date/data-time-slot"),
            }
        })?;
        bound += 1;
    }

    log::info!("📅 [CALENDAR] {} celdas de calendario enlazadas", bound);
    Ok(())
}

/// Materializar una franja desde los data-attributes de su celda
/// (data-user vacío o ausente = franja libre)
pub fn slot_from_cell(cell: &Element) -> Option<Slot> {
    let date = get_attribute(cell, "data-date")?;
    let time_slot = get_attribute(cell, "data-time-slot")?;
    let user = get_attribute(cell, "data-user");
    Some(Slot::from_attrs(date, time_slot, user))
}
