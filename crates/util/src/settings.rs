//! Persisted settings for the predictive field demo.
//!
//! Settings live in a small JSON file written to the standard configuration
//! directory (`~/.config/predictive/settings.json` on most platforms). A
//! missing file yields defaults; a file that cannot be parsed is logged and
//! ignored so a bad edit never prevents the field from starting.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::{config_dir, home_dir};
use predictive_engine::FieldBehavior;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable allowing callers to override the settings file path.
pub const SETTINGS_PATH_ENV: &str = "PREDICTIVE_SETTINGS_PATH";

/// Default filename for the JSON payload.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Error surfaced when reading or writing settings fails.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization failure while saving.
    #[error("settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Presentation parameters. Colours are names or `#rrggbb` strings that the
/// renderer parses; `None` means "use the theme".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub user_color: Option<String>,
    pub prediction_color: Option<String>,
    pub border_color: Option<String>,
    pub placeholder_color: Option<String>,
    /// 0 hides the border, anything else draws a single-line border.
    pub border_width: u16,
    /// Horizontal inset of the text in cells, applied on both sides.
    pub text_offset: u16,
    pub placeholder: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            user_color: None,
            prediction_color: None,
            border_color: None,
            placeholder_color: None,
            border_width: 1,
            text_offset: 2,
            placeholder: "Start typing…".to_string(),
        }
    }
}

/// Everything persisted in the settings file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Canonical identifier of the preferred theme.
    pub theme: Option<String>,
    /// Word list used by the dictionary provider.
    pub word_list: Option<PathBuf>,
    pub behavior: FieldBehavior,
    pub appearance: Appearance,
}

impl Settings {
    /// Load from the resolved default path.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&default_settings_path())
    }

    /// Load from `path`, falling back to defaults when the file is absent or unparsable.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(settings) => {
                    debug!(path = %path.display(), "loaded settings");
                    Ok(settings)
                }
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        error = %error,
                        "Failed to parse settings file; using defaults"
                    );
                    Ok(Self::default())
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(SettingsError::Io(error)),
        }
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}

/// `PREDICTIVE_SETTINGS_PATH` when set, otherwise the platform config directory.
pub fn default_settings_path() -> PathBuf {
    if let Ok(path) = env::var(SETTINGS_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("predictive")
        .join(SETTINGS_FILE_NAME)
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let path = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if path == "~" {
        return home();
    }
    match path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        Some(rest) => home().join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.behavior.formats_case);
        assert_eq!(settings.appearance.text_offset, 2);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r##"{"behavior": {"formats_case": false}, "appearance": {"user_color": "#ffffff"}}"##).unwrap();

        let settings = Settings::load_from(&path).unwrap();

        assert!(!settings.behavior.formats_case);
        assert!(settings.behavior.end_editing_on_return);
        assert_eq!(settings.appearance.user_color.as_deref(), Some("#ffffff"));
        assert_eq!(settings.appearance.border_width, 1);
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            theme: Some("nord".into()),
            word_list: Some(PathBuf::from("/tmp/words.txt")),
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn env_override_wins() {
        temp_env::with_var(SETTINGS_PATH_ENV, Some("/tmp/custom/settings.json"), || {
            assert_eq!(default_settings_path(), PathBuf::from("/tmp/custom/settings.json"));
        });
        temp_env::with_var(SETTINGS_PATH_ENV, Some("   "), || {
            assert!(default_settings_path().ends_with("predictive/settings.json"));
        });
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        if let Some(home) = home_dir() {
            assert_eq!(expand_tilde("~/x/y"), home.join("x/y"));
            assert_eq!(expand_tilde("~"), home);
        }
    }
}
