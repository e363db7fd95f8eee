// ============================================================================
// APP STATE - Estado de la capa de interacción del calendario
// ============================================================================
// Un único dueño explícito de "qué franja se está editando": la edición
// pendiente vive aquí, nunca como estado suelto de módulo.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Slot;

/// Capacidad de confirmación enchufable: de un texto descriptivo a sí/no.
/// En producción es window.confirm; en tests se sustituye por un stub.
pub type ConfirmPrompt = Rc<dyn Fn(&str) -> bool>;

/// Estado de la aplicación
#[derive(Clone)]
pub struct AppState {
    /// La única edición pendiente: franja objetivo del modal, o None si está cerrado
    pub pending_edit: Rc<RefCell<Option<Slot>>>,
    /// Latch de envío en curso: bloquea envíos solapados sobre la misma edición
    pub in_flight: Rc<RefCell<bool>>,
    pub language: Rc<RefCell<String>>,
    pub confirm_prompt: ConfirmPrompt,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        // Cargar preferencia de idioma desde localStorage
        let language = Self::load_string_pref("language", "ZH".to_string());

        Self {
            pending_edit: Rc::new(RefCell::new(None)),
            in_flight: Rc::new(RefCell::new(false)),
            language: Rc::new(RefCell::new(language)),
            confirm_prompt: Rc::new(|message| crate::dom::confirm(message)),
        }
    }

    /// Retargetear la edición pendiente a otra franja.
    /// Un segundo click con el modal abierto descarta la edición anterior
    /// (sin cola, sin deshacer): nunca hay más de una edición pendiente.
    pub fn set_pending_edit(&self, slot: Slot) {
        *self.pending_edit.borrow_mut() = Some(slot);
    }

    pub fn clear_pending_edit(&self) {
        *self.pending_edit.borrow_mut() = None;
    }

    /// Franja objetivo actual (clonada), si el modal está abierto
    pub fn pending_slot(&self) -> Option<Slot> {
        self.pending_edit.borrow().clone()
    }

    /// Intentar adquirir el latch de envío.
    /// Devuelve false si ya hay un envío en curso (el llamador debe ignorar).
    pub fn begin_submit(&self) -> bool {
        let mut in_flight = self.in_flight.borrow_mut();
        if *in_flight {
            return false;
        }
        *in_flight = true;
        true
    }

    /// Liberar el latch al resolverse el envío (éxito o fallo)
    pub fn end_submit(&self) {
        *self.in_flight.borrow_mut() = false;
    }

    pub fn language(&self) -> String {
        self.language.borrow().clone()
    }

    /// Cargar preferencia string desde localStorage
    fn load_string_pref(key: &str, default: String) -> String {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(key) {
                    return value;
                }
            }
        }
        default
    }
}

#[cfg(test)]
impl AppState {
    /// Estado para tests: sin localStorage y con confirmación stub
    pub fn for_tests(confirm_prompt: ConfirmPrompt) -> Self {
        Self {
            pending_edit: Rc::new(RefCell::new(None)),
            in_flight: Rc::new(RefCell::new(false)),
            language: Rc::new(RefCell::new("EN".to_string())),
            confirm_prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Slot, SlotId};

    fn state() -> AppState {
        AppState::for_tests(Rc::new(|_| true))
    }

    fn slot(date: &str, time_slot: &str) -> Slot {
        Slot::new(SlotId::new(date, time_slot), None)
    }

    #[test]
    fn test_second_open_retargets_pending_edit() {
        let state = state();
        state.set_pending_edit(slot("2024-06-01", "09:00"));
        state.set_pending_edit(slot("2024-06-02", "10:00"));

        let pending = state.pending_slot().unwrap();
        assert_eq!(pending.id, SlotId::new("2024-06-02", "10:00"));
    }

    #[test]
    fn test_clear_pending_edit_is_idempotent() {
        let state = state();
        state.set_pending_edit(slot("2024-06-01", "09:00"));
        state.clear_pending_edit();
        state.clear_pending_edit();
        assert!(state.pending_slot().is_none());
    }

    #[test]
    fn test_submit_latch_blocks_overlapping_submissions() {
        let state = state();
        assert!(state.begin_submit());
        // Segundo envío mientras el primero sigue en vuelo: rechazado
        assert!(!state.begin_submit());

        state.end_submit();
        assert!(state.begin_submit());
    }
}
