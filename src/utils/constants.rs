/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Por defecto: cadena vacía (mismo origen que la página servida)
/// - Despliegue separado: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Ruta del endpoint de reservas (POST)
pub const SUBMIT_RESERVATION_PATH: &str = "/submit_reservation";

/// Retardo antes de auto-cerrar el modal tras un éxito (ms)
pub const SUCCESS_CLOSE_DELAY_MS: u32 = 1_500;

// --- Superficie DOM renderizada por el servidor ---

/// Selector de las celdas del calendario (llevan data-date / data-time-slot / data-user)
pub const CELL_SELECTOR: &str = ".calendar-cell";

/// Clase visual de celda ocupada
pub const RESERVED_CLASS: &str = "reserved";

/// Clase que hace visible el modal
pub const MODAL_ACTIVE_CLASS: &str = "active";

pub const MODAL_ID: &str = "reservation-modal";
pub const MODAL_DATE_ID: &str = "modal-date";
pub const MODAL_TIME_SLOT_ID: &str = "modal-time-slot";
pub const MODAL_CURRENT_USER_ID: &str = "modal-current-user";
pub const NAME_INPUT_ID: &str = "name-input";
pub const FORM_DATE_ID: &str = "form-date";
pub const FORM_TIME_SLOT_ID: &str = "form-time-slot";
pub const STATUS_MESSAGE_ID: &str = "status-message";
pub const SUBMIT_BTN_ID: &str = "submit-reservation-btn";
pub const DELETE_BTN_ID: &str = "delete-reservation-btn";
pub const CLOSE_BTN_ID: &str = "modal-close-btn";

/// Formularios de borrado del panel admin que requieren confirmación
pub const DELETE_CONFIRM_FORM_SELECTOR: &str = ".js-delete-confirm-form";

/// Campo oculto con el identificador legible de lo que se borra
pub const DELETE_TIMESLOT_FIELD: &str = "delete_timeslot_value";
