use crate::config::LANGUAGE_STORAGE_KEY;
use gloo_storage::{LocalStorage, Storage};
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static ACTIVE_LOCALE: RefCell<String> = RefCell::new(String::from("en"));
}

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "vi",
            LanguageInfo {
                code: "vi",
                flag: "🇻🇳",
                translation: include_str!("../translations/vi.json"),
                native_name: "Tiếng Việt",
            },
        ),
    ])
}

/// Supported languages ordered by native name, for stable rendering.
pub fn sorted_languages() -> Vec<LanguageInfo> {
    let mut languages: Vec<_> = supported_languages().into_values().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));
    languages
}

/// The locale sent in `Accept-Language` with every API request.
pub fn active_locale() -> String {
    ACTIVE_LOCALE.with(|locale| locale.borrow().clone())
}

/// Switch the request locale. Unsupported codes are ignored.
pub fn set_active_locale(code: &str) -> bool {
    if get_language_info(code).is_none() {
        log::warn!("ignoring unsupported language {code:?}");
        return false;
    }
    ACTIVE_LOCALE.with(|locale| *locale.borrow_mut() = code.to_string());
    true
}

/// Pick the language to start with: the stored one if supported, else the fallback.
pub fn pick_language(stored: Option<&str>, fallback: &str) -> String {
    stored
        .map(str::trim)
        .filter(|code| get_language_info(code).is_some())
        .unwrap_or(fallback)
        .to_string()
}

/// Read the persisted language and make it the active locale.
pub fn restore_locale(fallback: &str) -> String {
    let stored = LocalStorage::raw()
        .get_item(LANGUAGE_STORAGE_KEY)
        .ok()
        .flatten();
    adopt_language(stored.as_deref(), fallback)
}

/// Activate the stored or fallback language and return the locale in effect.
///
/// The result always matches [`active_locale`], so the translations shown
/// and the `Accept-Language` header cannot disagree.
fn adopt_language(stored: Option<&str>, fallback: &str) -> String {
    set_active_locale(&pick_language(stored, fallback));
    active_locale()
}

/// Store the language code verbatim so it survives reloads.
pub fn persist_locale(code: &str) {
    if let Err(err) = LocalStorage::raw().set_item(LANGUAGE_STORAGE_KEY, code) {
        log::error!("failed to persist language {code}: {err:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages() {
        let languages = supported_languages();
        assert_eq!(languages.len(), 2);
        assert!(languages.contains_key("en"));
        assert!(languages.contains_key("vi"));
    }

    #[test]
    fn test_translations_are_valid_json() {
        for info in supported_languages().values() {
            let parsed: serde_json::Value = serde_json::from_str(info.translation).unwrap();
            assert!(parsed.is_object(), "{} bundle is not an object", info.code);
        }
    }

    #[test]
    fn test_bundles_translate_sign_up() {
        let en: serde_json::Value =
            serde_json::from_str(get_language_info("en").unwrap().translation).unwrap();
        let vi: serde_json::Value =
            serde_json::from_str(get_language_info("vi").unwrap().translation).unwrap();
        assert_eq!(en["signUp"], "Sign Up");
        assert_eq!(vi["signUp"], "Dang Ky");
    }

    #[test]
    fn test_bundles_share_keys() {
        fn keys(value: &serde_json::Value, prefix: &str, out: &mut Vec<String>) {
            if let Some(map) = value.as_object() {
                for (key, child) in map {
                    keys(child, &format!("{prefix}{key}."), out);
                }
            } else {
                out.push(prefix.trim_end_matches('.').to_string());
            }
        }

        let mut reference = Vec::new();
        let en: serde_json::Value =
            serde_json::from_str(get_language_info("en").unwrap().translation).unwrap();
        keys(&en, "", &mut reference);
        reference.sort();

        let mut other = Vec::new();
        let vi: serde_json::Value =
            serde_json::from_str(get_language_info("vi").unwrap().translation).unwrap();
        keys(&vi, "", &mut other);
        other.sort();

        assert_eq!(reference, other);
    }

    #[test]
    fn test_sorted_languages_order() {
        let codes: Vec<_> = sorted_languages().iter().map(|info| info.code).collect();
        assert_eq!(codes, vec!["en", "vi"]);
    }

    #[test]
    fn test_pick_language() {
        assert_eq!(pick_language(Some("vi"), "en"), "vi");
        assert_eq!(pick_language(Some(" vi "), "en"), "vi");
        assert_eq!(pick_language(Some("ab"), "en"), "en");
        assert_eq!(pick_language(None, "en"), "en");
    }

    #[test]
    fn test_set_active_locale() {
        assert!(set_active_locale("vi"));
        assert_eq!(active_locale(), "vi");
        assert!(!set_active_locale("xx"));
        assert_eq!(active_locale(), "vi");
        assert!(set_active_locale("en"));
        assert_eq!(active_locale(), "en");
    }

    #[test]
    fn test_adopt_language_prefers_stored_code() {
        set_active_locale("en");
        assert_eq!(adopt_language(Some("vi"), "en"), "vi");
        assert_eq!(active_locale(), "vi");
        set_active_locale("en");
    }

    #[test]
    fn test_adopt_language_with_unsupported_fallback_keeps_active_locale() {
        set_active_locale("en");
        assert_eq!(adopt_language(None, "xx"), "en");
        assert_eq!(adopt_language(Some("de"), "fr"), "en");
        assert_eq!(active_locale(), "en");
    }

    #[test]
    fn test_english_bundle_labels() {
        let en: serde_json::Value =
            serde_json::from_str(get_language_info("en").unwrap().translation).unwrap();
        assert_eq!(en["email"], "Email");
        assert_eq!(en["password"], "Password");
        assert_eq!(en["passwordRepeat"], "Password Confirmation");
        assert_eq!(en["passwordReset"]["set"], "Set password");
    }
}
