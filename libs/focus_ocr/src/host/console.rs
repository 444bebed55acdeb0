use std::cell::Cell;
use std::io::Write;

use anyhow::Result;
use xcap::Window;

use super::{AccessibilityHost, CommandBinding, MenuItemId};
use crate::common::Region;

/// Host for running from a terminal: messages go to stderr, results to
/// stdout, and the target is either given explicitly or the focused
/// window.
#[derive(Debug, Default)]
pub struct ConsoleHost {
    region: Option<Region>,
    locale: Option<String>,
    next_menu_id: Cell<u64>,
}

impl ConsoleHost {
    pub fn new(region: Option<Region>, locale: Option<String>) -> Self {
        Self {
            region,
            locale,
            next_menu_id: Cell::new(1),
        }
    }
}

impl AccessibilityHost for ConsoleHost {
    fn focused_region(&self) -> Option<Region> {
        self.region.or_else(focused_window_region)
    }

    fn display_locale(&self) -> String {
        self.locale.clone().unwrap_or_else(locale_from_env)
    }

    fn register_command(&self, binding: &CommandBinding) -> Result<()> {
        log::debug!(
            "Command {} ({}): {}",
            binding.name,
            binding.gesture,
            binding.description
        );
        Ok(())
    }

    fn add_settings_menu_item(&self, label: &str) -> Result<MenuItemId> {
        let id = MenuItemId(self.next_menu_id.get());
        self.next_menu_id.set(id.0 + 1);
        log::debug!("Settings menu item {:?}: {}", id, label);
        Ok(id)
    }

    fn remove_settings_menu_item(&self, id: MenuItemId) -> Result<()> {
        log::debug!("Removed settings menu item {:?}", id);
        Ok(())
    }

    fn announce(&self, message: &str) {
        log::info!("{}", message);
        eprintln!("{}", message);
    }

    fn browseable_message(&self, text: &str, title: &str) -> Result<()> {
        log::debug!("Showing {} ({} chars)", title, text.chars().count());
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Region of the window that has keyboard focus. When no window reports
/// focus, the first non-minimized one in xcap's front-to-back list is used.
pub fn focused_window_region() -> Option<Region> {
    let windows = match Window::all() {
        Ok(windows) => windows,
        Err(e) => {
            log::warn!("Failed to list windows: {}", e);
            return None;
        }
    };

    let window = choose_window(
        windows.as_slice(),
        |w: &Window| !w.is_minimized() && w.width() > 0 && w.height() > 0,
        Window::is_focused,
    )?;

    log::trace!("Window '{}' ({})", window.title(), window.app_name());
    Some(Region::new(window.x(), window.y(), window.width(), window.height()))
}

/// The focused visible window, else the first visible one.
fn choose_window<W>(
    windows: &[W],
    visible: impl Fn(&W) -> bool,
    focused: impl Fn(&W) -> bool,
) -> Option<&W> {
    windows
        .iter()
        .find(|w| visible(*w) && focused(*w))
        .or_else(|| {
            log::debug!("No focused window reported, using the topmost one");
            windows.iter().find(|w| visible(*w))
        })
}

/// Locale from the usual environment variables, without the encoding
/// suffix. Falls back to `en`.
pub fn locale_from_env() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|value| value.split('.').next().unwrap_or_default().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| "en".to_string())
}
