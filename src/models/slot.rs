// ============================================================================
// SLOT - Franja horaria reservable del calendario
// ============================================================================

use crate::utils::i18n::t;

/// Identidad de una franja: fecha + etiqueta de franja horaria.
/// Ambas son cadenas opacas para el cliente (las genera el servidor).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotId {
    pub date: String,
    pub time_slot: String,
}

impl SlotId {
    pub fn new(date: impl Into<String>, time_slot: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time_slot: time_slot.into(),
        }
    }
}

/// Una franja del calendario con, como máximo, un ocupante.
/// Se materializa desde los data-attributes de la celda renderizada por el
/// servidor y solo muta al aplicar una respuesta exitosa del servidor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub id: SlotId,
    pub occupant: Option<String>,
}

impl Slot {
    pub fn new(id: SlotId, occupant: Option<String>) -> Self {
        // Cadena vacía equivale a "sin ocupante"
        let occupant = occupant.filter(|name| !name.is_empty());
        Self { id, occupant }
    }

    /// Construir desde los atributos de una celda (data-user vacío/ausente = libre)
    pub fn from_attrs(date: String, time_slot: String, user: Option<String>) -> Self {
        Self::new(SlotId { date, time_slot }, user)
    }

    pub fn is_reserved(&self) -> bool {
        self.occupant.is_some()
    }

    /// Nombre del ocupante para el campo editable (vacío si la franja está libre)
    pub fn occupant_or_empty(&self) -> &str {
        self.occupant.as_deref().unwrap_or("")
    }

    /// Nombre del ocupante para el readout de solo lectura (centinela si está libre)
    pub fn occupant_label(&self, lang: &str) -> String {
        match &self.occupant {
            Some(name) => name.clone(),
            None => t("none_sentinel", lang),
        }
    }

    /// Aplicar el ocupante confirmado por el servidor (vacío = franja liberada)
    pub fn set_occupant_from_server(&mut self, new_user: Option<&str>) {
        self.occupant = new_user
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string());
    }
}

/// Tipo de edición propuesta, derivado del nombre ya recortado:
/// nombre no vacío = reclamar la franja, vacío = liberarla.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    Claim,
    Release,
}

impl EditKind {
    pub fn for_name(name: &str) -> Self {
        if name.trim().is_empty() {
            EditKind::Release
        } else {
            EditKind::Claim
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(occupant: Option<&str>) -> Slot {
        Slot::from_attrs(
            "2024-06-01".to_string(),
            "09:00".to_string(),
            occupant.map(|s| s.to_string()),
        )
    }

    #[test]
    fn test_empty_data_user_means_unoccupied() {
        let s = slot(Some(""));
        assert_eq!(s.occupant, None);
        assert!(!s.is_reserved());
        assert_eq!(s.occupant_or_empty(), "");
    }

    #[test]
    fn test_occupant_label_uses_sentinel_when_empty() {
        assert_eq!(slot(None).occupant_label("EN"), "none");
        assert_eq!(slot(None).occupant_label("ZH"), "无");
        assert_eq!(slot(Some("Alice")).occupant_label("EN"), "Alice");
    }

    #[test]
    fn test_set_occupant_from_server() {
        let mut s = slot(None);
        s.set_occupant_from_server(Some("Bob"));
        assert_eq!(s.occupant.as_deref(), Some("Bob"));
        assert!(s.is_reserved());

        s.set_occupant_from_server(Some(""));
        assert_eq!(s.occupant, None);

        let mut s = slot(Some("Bob"));
        s.set_occupant_from_server(None);
        assert_eq!(s.occupant, None);
    }

    #[test]
    fn test_edit_kind_from_name() {
        assert_eq!(EditKind::for_name("Bob"), EditKind::Claim);
        assert_eq!(EditKind::for_name(""), EditKind::Release);
        assert_eq!(EditKind::for_name("   "), EditKind::Release);
    }
}
