// ============================================================================
// OUTCOME - Resultado normalizado de un intento de cambio de reserva
// ============================================================================
// Toda ruta (éxito, rechazo del servidor, fallo de transporte, no-op local)
// se normaliza a esta misma forma antes de llegar al controlador del modal.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Estado del resultado, tal como lo reporta el servidor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Error,
    Info,
}

impl OutcomeStatus {
    /// Clase CSS para la región de mensajes de estado
    pub fn css_class(&self) -> &'static str {
        match self {
            OutcomeStatus::Success => "status-success",
            OutcomeStatus::Error => "status-error",
            OutcomeStatus::Info => "status-info",
        }
    }
}

/// Mutación que el servidor reporta haber realizado
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationAction {
    Create,
    Update,
    Delete,
    None,
}

/// Resultado normalizado `{status, message, new_user?, action?}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReservationOutcome {
    pub status: OutcomeStatus,
    pub message: String,
    /// Ocupante tras el cambio; solo significativo en éxito, vacío = libre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ReservationAction>,
}

impl ReservationOutcome {
    /// Resultado de error sintetizado en el cliente
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Error,
            message: message.into(),
            new_user: None,
            action: None,
        }
    }

    /// Resultado informativo sintetizado en el cliente (no-op)
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Info,
            message: message.into(),
            new_user: None,
            action: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_success_response() {
        let json = r#"{"status":"success","message":"booked","new_user":"Bob","action":"create"}"#;
        let outcome: ReservationOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.status, OutcomeStatus::Success);
        assert_eq!(outcome.message, "booked");
        assert_eq!(outcome.new_user.as_deref(), Some("Bob"));
        assert_eq!(outcome.action, Some(ReservationAction::Create));
        assert!(outcome.is_success());
    }

    #[test]
    fn test_deserialize_release_response() {
        let json = r#"{"status":"success","message":"released","new_user":"","action":"delete"}"#;
        let outcome: ReservationOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.new_user.as_deref(), Some(""));
        assert_eq!(outcome.action, Some(ReservationAction::Delete));
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{"status":"info","message":"该时段无预约，无需操作"}"#;
        let outcome: ReservationOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.status, OutcomeStatus::Info);
        assert_eq!(outcome.new_user, None);
        assert_eq!(outcome.action, None);
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_deserialize_error_response() {
        let json = r#"{"status":"error","message":"无法修改或预约过去的时间段！"}"#;
        let outcome: ReservationOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.status, OutcomeStatus::Error);
    }

    #[test]
    fn test_status_css_classes() {
        assert_eq!(OutcomeStatus::Success.css_class(), "status-success");
        assert_eq!(OutcomeStatus::Error.css_class(), "status-error");
        assert_eq!(OutcomeStatus::Info.css_class(), "status-info");
    }
}
