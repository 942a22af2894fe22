//! Filesystem layout for mode-selector.
//!
//! Only one file is ever read, and only to tune how the menu looks:
//!
//! ```text
//! <config_dir>/mode-selector/
//! └── config.toml              # Presentation settings (optional)
//! ```
//!
//! `<config_dir>` is `~/.config` on Linux and `~/Library/Application Support`
//! on macOS. `MODE_SELECTOR_CONFIG` points at a different file.

use std::path::PathBuf;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "MODE_SELECTOR_CONFIG";

/// Directory holding mode-selector's files: `<config_dir>/mode-selector/`
pub fn config_home() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mode-selector")
}

/// Config file, honouring `MODE_SELECTOR_CONFIG`
pub fn config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => config_home().join("config.toml"),
    }
}
