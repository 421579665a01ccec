//! Locale tags, name fallback and default names.

use crate::error::{AlmanacError, AlmanacResult};

/// Locale used when a caller does not ask for one.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Locale tags accepted for display names.
///
/// Both bare languages (`de`) and language/region pairs (`de_AT`) are listed;
/// tags use an underscore separator.
pub const SUPPORTED_LOCALES: &[&str] = &[
    "ar", "ar_AE", "ar_EG", "ar_SA", "bg", "bg_BG", "ca", "ca_ES", "cs", "cs_CZ", "cy", "cy_GB",
    "da", "da_DK", "de", "de_AT", "de_BE", "de_CH", "de_DE", "de_LU", "el", "el_CY", "el_GR",
    "en", "en_AU", "en_CA", "en_GB", "en_IE", "en_NZ", "en_US", "en_ZA", "es", "es_AR",
    "es_CL", "es_CO", "es_ES", "es_MX", "es_US", "et", "et_EE", "fi", "fi_FI", "fr", "fr_BE",
    "fr_CA", "fr_CH", "fr_FR", "fr_LU", "ga", "ga_IE", "gd", "gd_GB", "he", "he_IL", "hr",
    "hr_HR", "hu", "hu_HU", "it", "it_CH", "it_IT", "ja", "ja_JP", "ko", "ko_KR", "lt",
    "lt_LT", "lv", "lv_LV", "nb", "nb_NO", "nl", "nl_BE", "nl_NL", "pl", "pl_PL", "pt",
    "pt_BR", "pt_PT", "ro", "ro_RO", "ru", "ru_RU", "sk", "sk_SK", "sl", "sl_SI", "sv",
    "sv_FI", "sv_SE", "tr", "tr_TR", "uk", "uk_UA", "zh", "zh_CN", "zh_TW",
];

/// Returns true if the locale tag is supported.
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// Checks that a locale tag is supported.
///
/// # Errors
///
/// Returns `AlmanacError::UnknownLocale` otherwise.
pub fn ensure_supported(locale: &str) -> AlmanacResult<()> {
    if is_supported(locale) {
        Ok(())
    } else {
        Err(AlmanacError::unknown_locale(locale))
    }
}

/// Language part of a locale tag (`de_AT` → `de`).
pub fn language(locale: &str) -> &str {
    locale.split(['_', '-']).next().unwrap_or(locale)
}

/// Lookup order for a display locale: the tag itself, its language, then the
/// English defaults. Duplicates are removed.
pub fn fallback_chain(locale: &str) -> Vec<&str> {
    let mut chain = Vec::with_capacity(4);
    for tag in [locale, language(locale), DEFAULT_LOCALE, "en"] {
        if !tag.is_empty() && !chain.contains(&tag) {
            chain.push(tag);
        }
    }
    chain
}

/// English display name derived from a camelCase key.
///
/// `newYearsDay` becomes `New Years Day`; digits start a new word.
pub fn default_name(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for ch in key.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        let boundary = match prev {
            Some(p) => {
                (ch.is_uppercase() && !p.is_uppercase())
                    || (ch.is_ascii_digit() && !p.is_ascii_digit())
            }
            None => false,
        };
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
        prev = Some(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Name pattern for substitute holidays; `{0}` is the original's name.
pub fn substitute_pattern(locale: &str) -> &'static str {
    match language(locale) {
        "ja" => "振替休日 ({0})",
        "de" => "{0} (Ersatzfeiertag)",
        "es" => "{0} (trasladado)",
        "el" => "{0} (μεταφορά)",
        "ko" => "대체공휴일 ({0})",
        _ => "{0} observed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported() {
        assert!(is_supported("en"));
        assert!(is_supported("es_AR"));
        assert!(!is_supported("xx_YY"));
        assert!(matches!(
            ensure_supported("klingon"),
            Err(AlmanacError::UnknownLocale { .. })
        ));
    }

    #[test]
    fn test_fallback_chain() {
        assert_eq!(fallback_chain("de_AT"), vec!["de_AT", "de", "en_US", "en"]);
        assert_eq!(fallback_chain("en"), vec!["en", "en_US"]);
        assert_eq!(fallback_chain("en_US"), vec!["en_US", "en"]);
    }

    #[test]
    fn test_default_name() {
        assert_eq!(default_name("newYearsDay"), "New Years Day");
        assert_eq!(default_name("christmasDay"), "Christmas Day");
        assert_eq!(default_name("bridgeDay2"), "Bridge Day 2");
        assert_eq!(
            default_name("substituteHoliday:christmasDay"),
            "Substitute Holiday Christmas Day"
        );
    }

    #[test]
    fn test_substitute_pattern() {
        assert_eq!(substitute_pattern("en_GB"), "{0} observed");
        assert_eq!(substitute_pattern("ja_JP"), "振替休日 ({0})");
    }
}
