mod form;
mod types;
mod utils;

pub use form::{LanguageChoice, SettingsForm};
pub use types::{LanguageSelection, OcrSettings, SettingsIssue, Validated};
pub use utils::{default_settings_path, SettingsStore, SETTINGS_FILE_NAME};
