mod catalog;
mod utils;

pub use catalog::{
    default_language, language_description, to_engine_code, to_host_locale, LanguageEntry,
    DEFAULT_ENGINE_LANGUAGE, LANGUAGE_TABLE,
};
pub use utils::{installed_fallback, list_installed_languages, TRAINED_DATA_EXTENSION};
