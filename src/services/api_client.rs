// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Los fallos se devuelven tipados (SubmitError); el viewmodel los mapea a
// un ReservationOutcome, de modo que nada más arriba ve errores crudos.
// ============================================================================

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::models::ReservationOutcome;
use crate::utils::constants::{BACKEND_URL, SUBMIT_RESERVATION_PATH};

/// Fallo de transporte o de protocolo, antes de normalizarse a un Outcome
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// La petición nunca llegó al servidor o nunca volvió
    Network(String),
    /// Respuesta 2xx con cuerpo indecodificable
    Parse(String),
    /// Código de estado no exitoso; `message` viene del cuerpo si lo traía
    Http { status: u16, message: Option<String> },
}

#[derive(Serialize)]
struct SubmitReservationRequest<'a> {
    date: &'a str,
    time_slot: &'a str,
    name: &'a str,
}

/// Cuerpo mínimo que puede acompañar a una respuesta no-2xx
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Enviar un cambio de reserva `(date, time_slot, name)`.
    /// `name` vacío significa "liberar esta franja".
    pub async fn submit_reservation(
        &self,
        date: &str,
        time_slot: &str,
        name: &str,
    ) -> Result<ReservationOutcome, SubmitError> {
        let url = format!("{}{}", self.base_url, SUBMIT_RESERVATION_PATH);
        let request = SubmitReservationRequest {
            date,
            time_slot,
            name,
        };

        log::info!("📤 [API] Enviando reserva: {} {} -> \"{}\"", date, time_slot, name);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| SubmitError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::warn!("⚠️ [API] HTTP {} al enviar reserva", status);
            return Err(SubmitError::Http {
                status,
                message: message_from_body(&body),
            });
        }

        response
            .json::<ReservationOutcome>()
            .await
            .map_err(|e| SubmitError::Parse(format!("Parse error: {}", e)))
    }
}

/// Extraer el `message` del cuerpo de una respuesta no-2xx, si lo trae.
/// El servidor original responde los rechazos con la misma forma de Outcome,
/// así que ese mensaje tiene prioridad sobre uno genérico de código HTTP.
pub(crate) fn message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_extracted_from_outcome_shaped_body() {
        let body = r#"{"status":"error","message":"slot already taken"}"#;
        assert_eq!(message_from_body(body).as_deref(), Some("slot already taken"));
    }

    #[test]
    fn test_message_extracted_from_minimal_body() {
        let body = r#"{"message":"无法修改或预约过去的时间段！"}"#;
        assert_eq!(
            message_from_body(body).as_deref(),
            Some("无法修改或预约过去的时间段！")
        );
    }

    #[test]
    fn test_no_message_in_unparseable_body() {
        assert_eq!(message_from_body("<html>502 Bad Gateway</html>"), None);
        assert_eq!(message_from_body(""), None);
    }

    #[test]
    fn test_empty_message_treated_as_absent() {
        assert_eq!(message_from_body(r#"{"message":""}"#), None);
    }
}
