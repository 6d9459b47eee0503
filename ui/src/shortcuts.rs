// Keyboard shortcut parsing and dispatch. Bindings come in as strings like
// "Ctrl+Shift+S" (the shape the configuration file uses) and resolve to
// action identifiers the host dispatches on.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::config::Shortcuts;
use crate::error::UiError;

/// A key chord: modifier flags plus exactly one non-modifier key. The key is
/// stored lowercased so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub key: String,
}

impl KeyCombo {
    pub fn key(key: impl Into<String>) -> Self {
        KeyCombo {
            ctrl: false,
            alt: false,
            shift: false,
            key: key.into().to_lowercase(),
        }
    }

    pub fn ctrl(key: impl Into<String>) -> Self {
        KeyCombo {
            ctrl: true,
            ..Self::key(key)
        }
    }
}

impl FromStr for KeyCombo {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ctrl = false;
        let mut alt = false;
        let mut shift = false;
        let mut key: Option<String> = None;

        for token in s.split('+') {
            let token = token.trim();
            if token.is_empty() {
                return Err(UiError::ShortcutError(format!(
                    "Empty token in shortcut '{}'",
                    s
                )));
            }
            match token.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "alt" => alt = true,
                "shift" => shift = true,
                other => {
                    if key.is_some() {
                        return Err(UiError::ShortcutError(format!(
                            "Shortcut '{}' names more than one key",
                            s
                        )));
                    }
                    key = Some(other.to_string());
                }
            }
        }

        let key = key.ok_or_else(|| {
            UiError::ShortcutError(format!("Shortcut '{}' has no non-modifier key", s))
        })?;
        Ok(KeyCombo {
            ctrl,
            alt,
            shift,
            key,
        })
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        let mut chars = self.key.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

/// Maps key chords to action identifiers. Rebinding a chord replaces the
/// previous action.
#[derive(Debug, Default)]
pub struct ShortcutRegistry {
    bindings: HashMap<KeyCombo, String>,
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from the configured bindings.
    pub fn from_config(shortcuts: &Shortcuts) -> Result<Self, UiError> {
        let mut registry = Self::new();
        registry.bind_str(&shortcuts.save_form, "save_form")?;
        registry.bind_str(&shortcuts.export_csv, "export_csv")?;
        registry.bind_str(&shortcuts.search, "search")?;
        registry.bind_str(&shortcuts.close_dialog, "close_dialog")?;
        Ok(registry)
    }

    pub fn bind(&mut self, combo: KeyCombo, action: impl Into<String>) {
        self.bindings.insert(combo, action.into());
    }

    pub fn bind_str(&mut self, combo: &str, action: impl Into<String>) -> Result<(), UiError> {
        self.bind(combo.parse()?, action);
        Ok(())
    }

    /// Resolves an incoming chord to its action, if any is bound.
    pub fn resolve(&self, combo: &KeyCombo) -> Option<&str> {
        self.bindings.get(combo).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
