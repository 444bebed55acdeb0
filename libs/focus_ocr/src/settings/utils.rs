use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use super::types::{check_code, RawSettings};
use super::{LanguageSelection, OcrSettings};
use crate::common::OcrError;
use crate::languages::installed_fallback;

pub const SETTINGS_FILE_NAME: &str = "ocr.toml";

/// `<user config dir>/focus-ocr/ocr.toml`, or the working directory when
/// the platform has no config dir.
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("focus-ocr"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SETTINGS_FILE_NAME)
}

/// Recognition language settings backed by a TOML file.
///
/// Owned by the application context and handed out by reference; the
/// in-memory values stay authoritative for the session even when writing
/// them back fails.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: OcrSettings,
    default_language: String,
    installed: BTreeSet<String>,
}

impl SettingsStore {
    /// Loads settings from `path`, never failing.
    ///
    /// A missing file is created with defaults. Unparsable files and
    /// absent or invalid keys fall back to `default_language`, or to an
    /// installed language when that one is not installed.
    pub fn load(path: impl Into<PathBuf>, default_language: &str, installed: BTreeSet<String>) -> Self {
        let path = path.into();
        let fallback = installed_fallback(default_language, &installed);
        let default_language = fallback.as_str();
        let (settings, create) = match fs::read_to_string(&path) {
            Ok(contents) => (Self::parse(&path, &contents, default_language, &installed), false),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                (OcrSettings::with_default(default_language), true)
            }
            Err(e) => {
                log::warn!("Failed to read settings {}: {}", path.display(), e);
                (OcrSettings::with_default(default_language), false)
            }
        };

        let store = Self {
            path,
            settings,
            default_language: default_language.to_string(),
            installed,
        };
        if create {
            store.save();
        }
        store
    }

    fn parse(
        path: &Path,
        contents: &str,
        default_language: &str,
        installed: &BTreeSet<String>,
    ) -> OcrSettings {
        let raw: RawSettings = match toml::from_str(contents) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                RawSettings::default()
            }
        };
        let validated = OcrSettings::validate(raw, default_language, installed);
        for issue in &validated.issues {
            log::debug!("Settings {}: {}, using '{}'", path.display(), issue, default_language);
        }
        validated.settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &OcrSettings {
        &self.settings
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn installed(&self) -> &BTreeSet<String> {
        &self.installed
    }

    pub fn selection(&self) -> LanguageSelection {
        self.settings.selection()
    }

    /// Replaces both languages in memory. Codes must pass the same checks
    /// as on load.
    pub fn set_languages(&mut self, language: &str, language2: &str) -> Result<()> {
        for (key, code) in [("language", language), ("language2", language2)] {
            if let Some(issue) = check_code(key, code, &self.installed) {
                return Err(anyhow!("{}", issue));
            }
        }
        self.settings.language = language.to_string();
        self.settings.language2 = language2.to_string();
        Ok(())
    }

    pub fn try_save(&self) -> Result<(), OcrError> {
        let persistence = |source: std::io::Error| OcrError::Persistence {
            path: self.path.clone(),
            source,
        };

        let contents = toml::to_string(&self.settings)
            .map_err(|e| persistence(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(persistence)?;
        }
        fs::write(&self.path, contents).map_err(persistence)?;

        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Writes the settings back; failures are logged, never returned.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            log::error!("Error writing OCR configuration: {}", e);
        }
    }
}
