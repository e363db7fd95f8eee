pub mod admin_confirm;
pub mod calendar;
pub mod reservation_modal;

pub use admin_confirm::init_delete_confirmations;
pub use calendar::{bind_calendar_cells, slot_from_cell};
pub use reservation_modal::{
    close_reservation_modal, open_reservation_modal, wire_reservation_modal,
};
