// ============================================================================
// RESERVATION CALENDAR APP - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: enlazan el DOM renderizado por el servidor (sin lógica)
// - ViewModels: lógica del protocolo de reservas
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;

// Instancia global de App: mantiene vivo el estado compartido por los listeners
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🗓️ Reservation Calendar - Rust Puro + MVVM");

    let app = App::new();
    app.init()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}
