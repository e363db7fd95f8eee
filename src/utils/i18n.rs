// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Modal de reserva
            translations.insert("none_sentinel", "none");
            translations.insert("delete_noop", "No reservation in this slot, nothing to do");
            translations.insert("request_failed", "request failed, check connection or contact administrator");
        }
        _ => {
            // ZH por defecto (idioma del despliegue original)
            translations.insert("none_sentinel", "无");
            translations.insert("delete_noop", "该时段无预约，无需操作");
            translations.insert("request_failed", "请求失败，请检查网络连接或联系管理员");
        }
    }

    translations
}

/// Obtener traducción para una clave
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    // Fallback: devolver la clave si no hay traducción
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_request_failed_message() {
        assert_eq!(
            t("request_failed", "EN"),
            "request failed, check connection or contact administrator"
        );
    }

    #[test]
    fn test_default_language_is_chinese() {
        assert_eq!(t("none_sentinel", "ZH"), "无");
        assert_eq!(t("delete_noop", "zh"), "该时段无预约，无需操作");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t("no_such_key", "EN"), "no_such_key");
    }
}
