use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_ENGINE_LANGUAGE: &str = "eng";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Host UI locale, e.g. `pt` or `zh_CN`.
    pub locale: &'static str,
    /// Tesseract language code, e.g. `por`.
    pub code: &'static str,
    pub description: &'static str,
}

const fn entry(locale: &'static str, code: &'static str, description: &'static str) -> LanguageEntry {
    LanguageEntry {
        locale,
        code,
        description,
    }
}

// Each engine code appears once so the reverse lookup stays unambiguous.
pub const LANGUAGE_TABLE: &[LanguageEntry] = &[
    entry("bg", "bul", "Bulgarian"),
    entry("ca", "cat", "Catalan"),
    entry("cs", "ces", "Czech"),
    entry("zh_CN", "chi_tra", "Chinese"),
    entry("da", "dan", "Danish"),
    entry("de", "deu", "German"),
    entry("el", "ell", "Greek"),
    entry("en", "eng", "English"),
    entry("fi", "fin", "Finnish"),
    entry("fr", "fra", "French"),
    entry("hu", "hun", "Hungarian"),
    entry("id", "ind", "Indonesian"),
    entry("it", "ita", "Italian"),
    entry("ja", "jpn", "Japanese"),
    entry("ko", "kor", "Korean"),
    entry("lv", "lav", "Latvian"),
    entry("lt", "lit", "Lithuanian"),
    entry("nl", "nld", "Dutch"),
    entry("nb_NO", "nor", "Norwegian"),
    entry("pl", "pol", "Polish"),
    entry("pt", "por", "Portuguese"),
    entry("ro", "ron", "Romanian"),
    entry("ru", "rus", "Russian"),
    entry("sk", "slk", "Slovak"),
    entry("sl", "slv", "Slovenian"),
    entry("es", "spa", "Spanish"),
    entry("sr", "srp", "Serbian"),
    entry("sv", "swe", "Swedish"),
    entry("tg", "tgl", "Tagalog"),
    entry("tr", "tur", "Turkish"),
    entry("uk", "ukr", "Ukrainian"),
    entry("vi", "vie", "Vietnamese"),
];

fn by_code() -> &'static HashMap<&'static str, &'static LanguageEntry> {
    static BY_CODE: OnceLock<HashMap<&'static str, &'static LanguageEntry>> = OnceLock::new();
    BY_CODE.get_or_init(|| LANGUAGE_TABLE.iter().map(|e| (e.code, e)).collect())
}

pub fn to_engine_code(locale: &str) -> Option<&'static str> {
    LANGUAGE_TABLE
        .iter()
        .find(|e| e.locale == locale)
        .map(|e| e.code)
}

pub fn to_host_locale(code: &str) -> Option<&'static str> {
    by_code().get(code).map(|e| e.locale)
}

/// Maps the host UI locale to an engine language: exact locale first, then
/// its primary subtag, then English.
pub fn default_language(host_locale: &str) -> &'static str {
    // `pt_BR.UTF-8` style values come straight from the environment
    let locale = host_locale.split('.').next().unwrap_or_default();

    to_engine_code(locale)
        .or_else(|| {
            locale
                .split(['_', '-'])
                .next()
                .filter(|primary| *primary != locale)
                .and_then(to_engine_code)
        })
        .unwrap_or(DEFAULT_ENGINE_LANGUAGE)
}

/// Human label for a language code, for the settings surface.
pub fn language_description(code: &str) -> String {
    match by_code().get(code) {
        Some(e) => e.description.to_string(),
        None => code.to_string(),
    }
}
