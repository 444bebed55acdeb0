mod console;
mod types;

pub use console::{locale_from_env, focused_window_region, ConsoleHost};
pub use types::{AccessibilityHost, CommandBinding, MenuItemId};
