pub mod reservation_viewmodel;

pub use reservation_viewmodel::{
    apply_outcome, delete_decision, outcome_for_failure, DeleteDecision, ReservationViewModel,
};
