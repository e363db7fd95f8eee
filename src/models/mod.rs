pub mod outcome;
pub mod slot;

pub use outcome::{OutcomeStatus, ReservationAction, ReservationOutcome};
pub use slot::{EditKind, Slot, SlotId};
