use anyhow::Result;

use crate::common::Region;

/// A global command the host binds to a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBinding {
    pub name: &'static str,
    pub gesture: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuItemId(pub u64);

/// What the recognizer needs from the screen reader it is plugged into.
pub trait AccessibilityHost {
    /// Screen region of the object under the review cursor, if any.
    fn focused_region(&self) -> Option<Region>;

    /// UI display locale, e.g. `en` or `pt_BR`.
    fn display_locale(&self) -> String;

    fn register_command(&self, binding: &CommandBinding) -> Result<()>;

    fn add_settings_menu_item(&self, label: &str) -> Result<MenuItemId>;

    fn remove_settings_menu_item(&self, id: MenuItemId) -> Result<()>;

    /// Short spoken message.
    fn announce(&self, message: &str);

    /// Long text the user can review line by line.
    fn browseable_message(&self, text: &str, title: &str) -> Result<()>;
}
