// ============================================================================
// APP - Aplicación principal
// ============================================================================
// La página llega ya renderizada por el servidor; la app crea el estado
// compartido y cablea la capa de interacción sobre esa superficie.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::state::AppState;
use crate::views::{bind_calendar_cells, init_delete_confirmations, wire_reservation_modal};

/// Aplicación principal
pub struct App {
    state: AppState,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    /// Cablear calendario, modal de reserva y confirmaciones del panel admin
    pub fn init(&self) -> Result<(), JsValue> {
        bind_calendar_cells(&self.state)?;
        wire_reservation_modal(&self.state)?;
        init_delete_confirmations(&self.state)?;
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
