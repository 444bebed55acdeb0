use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::capture::ScreenGrabber;
use crate::common::OcrError;
use crate::host::{AccessibilityHost, CommandBinding, MenuItemId};
use crate::languages::{default_language, list_installed_languages};
use crate::recognize::{present, EngineLayout, Recognizer, ScratchPaths};
use crate::settings::{SettingsForm, SettingsStore};

pub const RECOGNIZE_COMMAND: CommandBinding = CommandBinding {
    name: "recognize_focused_object",
    gesture: "kb:NVDA+r",
    description: "Recognize text with Tesseract",
};

pub const SETTINGS_MENU_LABEL: &str = "OCR settings...";

#[derive(Debug, Clone)]
pub struct PluginConfig {
    pub layout: EngineLayout,
    pub settings_path: PathBuf,
    pub scratch: ScratchPaths,
}

/// Application context: owns the settings and the recognizer and wires
/// them into the host.
pub struct OcrPlugin<H, G> {
    host: H,
    grabber: G,
    store: SettingsStore,
    recognizer: Recognizer,
    settings_item: Option<MenuItemId>,
}

impl<H: AccessibilityHost, G: ScreenGrabber> OcrPlugin<H, G> {
    pub fn new(host: H, grabber: G, config: PluginConfig) -> Result<Self> {
        let installed = list_installed_languages(&config.layout.tessdata_dir);
        let locale = host.display_locale();
        let default = default_language(&locale);
        log::debug!("Host locale {} maps to OCR language {}", locale, default);

        let store = SettingsStore::load(config.settings_path, default, installed);

        host.register_command(&RECOGNIZE_COMMAND)?;
        let settings_item = host.add_settings_menu_item(SETTINGS_MENU_LABEL)?;

        Ok(Self {
            host,
            grabber,
            store,
            recognizer: Recognizer::new(config.layout.exe, config.scratch),
            settings_item: Some(settings_item),
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn grabber(&self) -> &G {
        &self.grabber
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SettingsStore {
        &mut self.store
    }

    pub fn settings_form(&self) -> SettingsForm {
        SettingsForm::new(&self.store)
    }

    pub async fn run_command(&self, name: &str) -> Result<()> {
        if name == RECOGNIZE_COMMAND.name {
            // the outcome has already been presented
            let _ = self.recognize_focused().await;
            Ok(())
        } else {
            Err(anyhow!("unknown command '{}'", name))
        }
    }

    /// One full invocation: recognize, then tell the user.
    pub async fn recognize_focused(&self) -> Result<String, OcrError> {
        let selection = self.store.selection();
        let result = self
            .recognizer
            .recognize(&self.host, &self.grabber, &selection)
            .await;
        present(&self.host, &result);
        result
    }

    pub fn terminate(&mut self) {
        if let Some(id) = self.settings_item.take() {
            if let Err(e) = self.host.remove_settings_menu_item(id) {
                log::debug!("Settings menu item already gone: {}", e);
            }
        }
    }
}
