use anyhow::{anyhow, Result};
use serde::Serialize;

use super::SettingsStore;
use crate::languages::{language_description, to_host_locale, DEFAULT_ENGINE_LANGUAGE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageChoice {
    pub code: String,
    pub locale: Option<String>,
    pub label: String,
}

/// Model behind the "OCR settings" surface: two pickers over the installed
/// languages, sorted, with the current selection preselected.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    choices: Vec<LanguageChoice>,
    selected: (usize, usize),
}

impl SettingsForm {
    pub fn new(store: &SettingsStore) -> Self {
        // BTreeSet iteration is already sorted
        let choices: Vec<LanguageChoice> = store
            .installed()
            .iter()
            .map(|code| LanguageChoice {
                code: code.clone(),
                locale: to_host_locale(code).map(str::to_string),
                label: language_description(code),
            })
            .collect();
        log::debug!(
            "Available OCR languages: {}",
            choices
                .iter()
                .map(|c| c.label.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let settings = store.settings();
        let selected = (
            Self::preselect(&choices, &settings.language),
            Self::preselect(&choices, &settings.language2),
        );
        Self { choices, selected }
    }

    fn preselect(choices: &[LanguageChoice], current: &str) -> usize {
        let position = |code: &str| choices.iter().position(|c| c.code == code);
        position(current)
            .or_else(|| position(DEFAULT_ENGINE_LANGUAGE))
            .unwrap_or(0)
    }

    pub fn choices(&self) -> &[LanguageChoice] {
        &self.choices
    }

    pub fn selected(&self) -> (usize, usize) {
        self.selected
    }

    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.choices.iter().position(|c| c.code == code)
    }

    /// Stores the chosen pair and saves. Write failures are only logged.
    pub fn apply(&mut self, first: usize, second: usize, store: &mut SettingsStore) -> Result<()> {
        let code = |index: usize| {
            self.choices
                .get(index)
                .map(|c| c.code.clone())
                .ok_or_else(|| anyhow!("no language at position {}", index))
        };
        let (language, language2) = (code(first)?, code(second)?);

        store.set_languages(&language, &language2)?;
        store.save();
        self.selected = (first, second);
        log::info!("OCR languages set to {}", store.selection().lang_arg());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SETTINGS_FILE_NAME;
    use std::collections::BTreeSet;

    fn store_with(dir: &std::path::Path, codes: &[&str], contents: Option<&str>) -> SettingsStore {
        let path = dir.join(SETTINGS_FILE_NAME);
        if let Some(contents) = contents {
            std::fs::write(&path, contents).unwrap();
        }
        let installed: BTreeSet<String> = codes.iter().map(|c| c.to_string()).collect();
        SettingsStore::load(path, "eng", installed)
    }

    #[test]
    fn choices_are_sorted_and_labelled() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with(dir.path(), &["rus", "deu", "eng", "osd"], None);
        let form = SettingsForm::new(&store);

        let codes: Vec<_> = form.choices().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["deu", "eng", "osd", "rus"]);
        assert_eq!(form.choices()[0].label, "German");
        assert_eq!(form.choices()[0].locale.as_deref(), Some("de"));
        assert_eq!(form.choices()[2].label, "osd");
        assert_eq!(form.choices()[2].locale, None);
    }

    #[test]
    fn preselects_current_languages() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with(
            dir.path(),
            &["deu", "eng", "rus"],
            Some("language = \"rus\"\nlanguage2 = \"deu\"\n"),
        );
        assert_eq!(SettingsForm::new(&store).selected(), (2, 0));
    }

    #[test]
    fn preselection_falls_back_to_english_then_first() {
        let dir = tempfile::tempdir().unwrap();
        // `ita` is accepted on load because nothing is installed yet
        let store = store_with(dir.path(), &[], Some("language = \"ita\"\nlanguage2 = \"ita\"\n"));
        let form = SettingsForm::new(&store);
        assert!(form.choices().is_empty());
        assert_eq!(form.selected(), (0, 0));

        let store = store_with(dir.path(), &["deu", "eng"], None);
        assert_eq!(SettingsForm::new(&store).selected(), (1, 1));
    }

    #[test]
    fn apply_uses_the_sorted_positions() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(dir.path(), &["rus", "eng", "deu"], None);
        let mut form = SettingsForm::new(&store);

        form.apply(2, 0, &mut store).unwrap();
        assert_eq!(store.selection().lang_arg(), "rus+deu");
        assert_eq!(form.selected(), (2, 0));

        let saved = std::fs::read_to_string(store.path()).unwrap();
        assert!(saved.contains("language = \"rus\""));
    }

    #[test]
    fn apply_rejects_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(dir.path(), &["eng"], None);
        let mut form = SettingsForm::new(&store);
        assert!(form.apply(0, 3, &mut store).is_err());
        assert_eq!(store.selection().lang_arg(), "eng");
    }
}
