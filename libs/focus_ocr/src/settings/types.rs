use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Persisted recognition languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrSettings {
    pub language: String,
    pub language2: String,
}

/// What the settings file actually contained, before validation.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSettings {
    pub language: Option<toml::Value>,
    pub language2: Option<toml::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsIssue {
    Missing { key: &'static str },
    NotAString { key: &'static str },
    Invalid { key: &'static str, value: String },
    NotInstalled { key: &'static str, value: String },
}

impl fmt::Display for SettingsIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsIssue::Missing { key } => write!(f, "'{}' is missing", key),
            SettingsIssue::NotAString { key } => write!(f, "'{}' is not a string", key),
            SettingsIssue::Invalid { key, value } => {
                write!(f, "'{}' has invalid language code '{}'", key, value)
            }
            SettingsIssue::NotInstalled { key, value } => {
                write!(f, "'{}' names language '{}' which is not installed", key, value)
            }
        }
    }
}

/// Result of validating a settings file: usable settings with every
/// rejected key replaced by the default, plus what was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    pub settings: OcrSettings,
    pub issues: Vec<SettingsIssue>,
}

impl OcrSettings {
    pub fn with_default(default_language: &str) -> Self {
        Self {
            language: default_language.to_string(),
            language2: default_language.to_string(),
        }
    }

    pub(crate) fn validate(
        raw: RawSettings,
        default_language: &str,
        installed: &BTreeSet<String>,
    ) -> Validated {
        let mut issues = Vec::new();
        let language = validate_key("language", raw.language, default_language, installed, &mut issues);
        let language2 =
            validate_key("language2", raw.language2, default_language, installed, &mut issues);
        Validated {
            settings: Self {
                language,
                language2,
            },
            issues,
        }
    }

    pub fn selection(&self) -> LanguageSelection {
        LanguageSelection::new(&self.language, &self.language2)
    }
}

fn validate_key(
    key: &'static str,
    value: Option<toml::Value>,
    default_language: &str,
    installed: &BTreeSet<String>,
    issues: &mut Vec<SettingsIssue>,
) -> String {
    let issue = match value {
        None => SettingsIssue::Missing { key },
        Some(toml::Value::String(code)) => match check_code(key, &code, installed) {
            None => return code,
            Some(issue) => issue,
        },
        Some(_) => SettingsIssue::NotAString { key },
    };
    issues.push(issue);
    default_language.to_string()
}

/// `None` when `code` is usable.
pub(crate) fn check_code(
    key: &'static str,
    code: &str,
    installed: &BTreeSet<String>,
) -> Option<SettingsIssue> {
    let well_formed = !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '_');
    if !well_formed {
        return Some(SettingsIssue::Invalid {
            key,
            value: code.to_string(),
        });
    }
    // Without any language data on disk there is nothing to check against.
    if !installed.is_empty() && !installed.contains(code) {
        return Some(SettingsIssue::NotInstalled {
            key,
            value: code.to_string(),
        });
    }
    None
}

/// The one or two languages handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSelection {
    pub primary: String,
    pub secondary: String,
}

impl LanguageSelection {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Value of the engine's `-l` flag: `a+b`, or just `a` when both match.
    pub fn lang_arg(&self) -> String {
        if self.primary == self.secondary {
            self.primary.clone()
        } else {
            format!("{}+{}", self.primary, self.secondary)
        }
    }
}
