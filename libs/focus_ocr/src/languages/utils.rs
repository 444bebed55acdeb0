use std::collections::BTreeSet;
use std::path::Path;

use glob::glob;

use super::DEFAULT_ENGINE_LANGUAGE;

pub const TRAINED_DATA_EXTENSION: &str = "traineddata";

/// Engine language codes with a data file in `tessdata_dir`, sorted.
/// An absent or unreadable directory yields an empty set.
pub fn list_installed_languages(tessdata_dir: &Path) -> BTreeSet<String> {
    if !tessdata_dir.is_dir() {
        log::debug!("Language data directory {} not found", tessdata_dir.display());
        return BTreeSet::new();
    }

    let pattern = tessdata_dir.join(format!("*.{}", TRAINED_DATA_EXTENSION));
    let entries = match glob(&pattern.to_string_lossy()) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Invalid language data pattern {}: {}", pattern.display(), e);
            return BTreeSet::new();
        }
    };

    let languages: BTreeSet<String> = entries
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .filter_map(|path| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .collect();

    log::debug!(
        "Installed OCR languages: {}",
        languages.iter().cloned().collect::<Vec<_>>().join(", ")
    );
    languages
}

/// `preferred` if it is installed, else English, else the first installed
/// language. With nothing installed there is nothing to check, so
/// `preferred` is kept.
pub fn installed_fallback(preferred: &str, installed: &BTreeSet<String>) -> String {
    if installed.is_empty() || installed.contains(preferred) {
        return preferred.to_string();
    }
    let fallback = if installed.contains(DEFAULT_ENGINE_LANGUAGE) {
        DEFAULT_ENGINE_LANGUAGE
    } else {
        // non-empty, checked above
        installed.iter().next().map(String::as_str).unwrap_or(preferred)
    };
    log::debug!("OCR language {} is not installed, using {}", preferred, fallback);
    fallback.to_string()
}
