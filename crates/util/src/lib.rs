//! Settings persistence and word list helpers shared by the CLI and TUI.

pub mod settings;
pub mod word_list;

pub use settings::{Appearance, SETTINGS_PATH_ENV, Settings, SettingsError, default_settings_path, expand_tilde};
pub use word_list::{WordListError, default_word_list, load_word_list, parse_word_list};
