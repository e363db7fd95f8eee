// ============================================================================
// RESERVATION VIEWMODEL - LÓGICA DEL PROTOCOLO DE RESERVAS
// ============================================================================
// Traduce la edición pendiente en una petición al servicio de reservas y
// normaliza la respuesta. Devuelve valores; las vistas actualizan el DOM.
// ============================================================================

use crate::models::{EditKind, ReservationOutcome, Slot, SlotId};
use crate::services::{ApiClient, SubmitError};
use crate::utils::i18n::t;

/// ViewModel de reservas - SOLO lógica de negocio
pub struct ReservationViewModel {
    api_client: ApiClient,
}

impl ReservationViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Enviar la edición pendiente `(id, name)` al servidor.
    /// Nunca propaga errores más allá de esta frontera: cualquier fallo se
    /// resuelve a un ReservationOutcome válido, así el modal no necesita una
    /// ruta de error separada para transporte vs. rechazo de aplicación.
    pub async fn submit(&self, id: &SlotId, name: &str, lang: &str) -> ReservationOutcome {
        let name = name.trim();

        match EditKind::for_name(name) {
            EditKind::Claim => {
                log::info!("✏️ [RESERVA] Reclamando {} {} para \"{}\"", id.date, id.time_slot, name)
            }
            EditKind::Release => {
                log::info!("🗑️ [RESERVA] Liberando {} {}", id.date, id.time_slot)
            }
        }

        match self
            .api_client
            .submit_reservation(&id.date, &id.time_slot, name)
            .await
        {
            Ok(outcome) => {
                log::info!("✅ [RESERVA] Respuesta del servidor: {:?} ({:?})", outcome.status, outcome.action);
                outcome
            }
            Err(err) => {
                log::error!("❌ [RESERVA] Envío fallido: {:?}", err);
                outcome_for_failure(&err, lang)
            }
        }
    }
}

/// Mapeo tipado fallo → Outcome.
/// Fallo de transporte o cuerpo indecodificable: mensaje fijo local.
/// Respuesta no-2xx: el mensaje del servidor tiene prioridad sobre el genérico.
pub fn outcome_for_failure(err: &SubmitError, lang: &str) -> ReservationOutcome {
    match err {
        SubmitError::Network(_) | SubmitError::Parse(_) => {
            ReservationOutcome::error(t("request_failed", lang))
        }
        SubmitError::Http {
            message: Some(message),
            ..
        } => ReservationOutcome::error(message.clone()),
        SubmitError::Http {
            status,
            message: None,
        } => {
            let message = if lang.eq_ignore_ascii_case("EN") {
                format!("HTTP error {}", status)
            } else {
                format!("HTTP 错误 {}", status)
            };
            ReservationOutcome::error(message)
        }
    }
}

/// Decisión al pulsar borrar en el modal
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteDecision {
    /// Franja ya libre: resultado informativo local, cero llamadas de red
    Noop(ReservationOutcome),
    /// Hay ocupante: pedir confirmación con este texto antes de liberar
    Confirm(String),
}

/// Decidir qué hacer ante una petición de borrado sobre la franja objetivo
pub fn delete_decision(slot: &Slot, lang: &str) -> DeleteDecision {
    match &slot.occupant {
        None => DeleteDecision::Noop(ReservationOutcome::info(t("delete_noop", lang))),
        Some(name) => {
            let message = if lang.eq_ignore_ascii_case("EN") {
                format!(
                    "Delete the reservation for {} on {} {}?",
                    name, slot.id.date, slot.id.time_slot
                )
            } else {
                format!(
                    "确定要删除 {} 在 {} {} 的预约吗？",
                    name, slot.id.date, slot.id.time_slot
                )
            };
            DeleteDecision::Confirm(message)
        }
    }
}

/// Aplicar un resultado a la franja objetivo capturada.
/// Solo un éxito muta el ocupante; devuelve true si hubo mutación.
pub fn apply_outcome(slot: &mut Slot, outcome: &ReservationOutcome) -> bool {
    if !outcome.is_success() {
        return false;
    }
    slot.set_occupant_from_server(outcome.new_user.as_deref());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OutcomeStatus, SlotId};

    fn slot(occupant: Option<&str>) -> Slot {
        Slot::new(
            SlotId::new("2024-06-01", "09:00"),
            occupant.map(|s| s.to_string()),
        )
    }

    #[test]
    fn test_delete_on_empty_slot_is_local_noop() {
        // Franja sin ocupante: resultado informativo sin tocar la red
        let decision = delete_decision(&slot(None), "EN");
        assert_eq!(
            decision,
            DeleteDecision::Noop(ReservationOutcome::info(
                "No reservation in this slot, nothing to do"
            ))
        );

        let decision = delete_decision(&slot(None), "ZH");
        assert_eq!(
            decision,
            DeleteDecision::Noop(ReservationOutcome::info("该时段无预约，无需操作"))
        );
    }

    #[test]
    fn test_delete_on_occupied_slot_asks_confirmation_naming_everything() {
        match delete_decision(&slot(Some("Bob")), "EN") {
            DeleteDecision::Confirm(message) => {
                assert!(message.contains("Bob"));
                assert!(message.contains("2024-06-01"));
                assert!(message.contains("09:00"));
            }
            other => panic!("expected Confirm, got {:?}", other),
        }
    }

    #[test]
    fn test_successful_claim_updates_occupant_and_reserved_state() {
        let mut target = slot(None);
        let outcome: ReservationOutcome = serde_json::from_str(
            r#"{"status":"success","message":"booked","new_user":"Bob","action":"create"}"#,
        )
        .unwrap();

        assert!(apply_outcome(&mut target, &outcome));
        assert_eq!(target.occupant.as_deref(), Some("Bob"));
        assert!(target.is_reserved());
    }

    #[test]
    fn test_successful_release_clears_occupant_and_reserved_state() {
        let mut target = slot(Some("Bob"));
        let outcome: ReservationOutcome = serde_json::from_str(
            r#"{"status":"success","message":"released","new_user":"","action":"delete"}"#,
        )
        .unwrap();

        assert!(apply_outcome(&mut target, &outcome));
        assert_eq!(target.occupant, None);
        assert!(!target.is_reserved());
    }

    #[test]
    fn test_success_without_new_user_means_unoccupied() {
        let mut target = slot(Some("Bob"));
        let outcome: ReservationOutcome =
            serde_json::from_str(r#"{"status":"success","message":"released"}"#).unwrap();

        assert!(apply_outcome(&mut target, &outcome));
        assert_eq!(target.occupant, None);
    }

    #[test]
    fn test_non_success_outcomes_leave_occupant_untouched() {
        let before = slot(Some("Alice"));

        for outcome in [
            ReservationOutcome::error("slot already taken"),
            ReservationOutcome::info("该时段无预约，无需操作"),
            outcome_for_failure(&SubmitError::Network("timeout".to_string()), "EN"),
        ] {
            let mut target = before.clone();
            assert!(!apply_outcome(&mut target, &outcome));
            assert_eq!(target, before);
        }
    }

    #[test]
    fn test_transport_failure_maps_to_fixed_local_message() {
        let outcome = outcome_for_failure(&SubmitError::Network("fetch failed".to_string()), "EN");
        assert_eq!(outcome.status, OutcomeStatus::Error);
        assert_eq!(
            outcome.message,
            "request failed, check connection or contact administrator"
        );
        assert_eq!(outcome.new_user, None);

        let outcome = outcome_for_failure(&SubmitError::Parse("bad json".to_string()), "ZH");
        assert_eq!(outcome.message, "请求失败，请检查网络连接或联系管理员");
    }

    #[test]
    fn test_server_message_preferred_over_generic_http_error() {
        // HTTP 409 con cuerpo {"message":"slot already taken"}
        let outcome = outcome_for_failure(
            &SubmitError::Http {
                status: 409,
                message: Some("slot already taken".to_string()),
            },
            "EN",
        );
        assert_eq!(outcome.status, OutcomeStatus::Error);
        assert_eq!(outcome.message, "slot already taken");
    }

    #[test]
    fn test_generic_http_error_when_body_has_no_message() {
        let outcome = outcome_for_failure(
            &SubmitError::Http {
                status: 503,
                message: None,
            },
            "EN",
        );
        assert_eq!(outcome.message, "HTTP error 503");
    }
}
