//! Application state types.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::constants::MAX_JUMP_DIGITS;
use crate::theme::ThemeVariant;

/// Application mode representing the current UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
    Quit,
}

/// Slide number typed by the viewer, pending confirmation with Enter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpInput {
    digits: String,
}

impl JumpInput {
    /// Append a digit. Input past [`MAX_JUMP_DIGITS`] is ignored.
    pub fn push(&mut self, digit: u8) {
        if self.digits.len() >= MAX_JUMP_DIGITS {
            return;
        }
        if let Some(c) = char::from_digit(u32::from(digit), 10) {
            self.digits.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Take the pending 1-based slide number, leaving the input empty.
    pub fn take(&mut self) -> Option<i64> {
        let number = self.digits.parse().ok();
        self.digits.clear();
        number
    }
}

/// User settings stored in the config file.
///
/// Settings are read at startup and never written back; command line
/// flags take precedence over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Chrome theme at startup.
    pub theme: ThemeVariant,
    /// Whether the slide picker strip is shown.
    pub show_picker: bool,
    /// Whether mouse capture is enabled.
    pub mouse: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::Dark,
            show_picker: true,
            mouse: true,
        }
    }
}

impl UserSettings {
    /// Get the config file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("slidedeck").join("settings.toml"))
    }

    /// Load settings from the config directory, or return defaults.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load settings from `path`. A missing or invalid file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "could not read settings");
                return Self::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "ignoring invalid settings");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_input() {
        let mut jump = JumpInput::default();
        assert_eq!(jump.take(), None);

        jump.push(1);
        jump.push(2);
        assert_eq!(jump.as_str(), "12");
        jump.pop();
        jump.push(5);
        assert_eq!(jump.take(), Some(15));
        assert!(jump.is_empty());
    }

    #[test]
    fn test_jump_input_caps_length() {
        let mut jump = JumpInput::default();
        for _ in 0..10 {
            jump.push(9);
        }
        assert_eq!(jump.as_str().len(), MAX_JUMP_DIGITS);
    }

    #[test]
    fn test_settings_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "theme = \"light\"\n").unwrap();

        let settings = UserSettings::load_from(&path);
        assert_eq!(settings.theme, ThemeVariant::Light);
        assert!(settings.show_picker);
        assert!(settings.mouse);
    }

    #[test]
    fn test_settings_missing_or_invalid() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            UserSettings::load_from(&dir.path().join("absent.toml")),
            UserSettings::default()
        );

        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "show_picker = \"sometimes\"").unwrap();
        assert_eq!(UserSettings::load_from(&path), UserSettings::default());
    }
}
