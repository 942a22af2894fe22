//! Presentation settings
//!
//! Read from `config.toml` (see [`crate::paths`]) and then overridden by the
//! environment. Nothing here can add, remove or reorder launch modes.
//!
//! ```toml
//! color = "never"
//! header = "How should this project open?"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::logging;
use crate::paths;

/// Environment variable overriding the `color` setting
pub const COLOR_ENV_VAR: &str = "MODE_SELECTOR_COLOR";

/// Header shown above the menu when the config file does not set one
pub const DEFAULT_HEADER: &str = "Choose how to launch the project:";

// =============================================================================
// Config Types
// =============================================================================

/// When to colour the menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "auto" => Some(ColorChoice::Auto),
            "always" => Some(ColorChoice::Always),
            "never" => Some(ColorChoice::Never),
            _ => None,
        }
    }

    /// Resolve against whether the menu is going to a terminal
    pub fn enabled(&self, is_term: bool) -> bool {
        match self {
            ColorChoice::Auto => is_term,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Settings stored in `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color: ColorChoice,
    pub header: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            header: DEFAULT_HEADER.to_string(),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

impl Config {
    /// Load the config file and apply environment overrides.
    ///
    /// Never fails: a broken config file must not turn a selection into an
    /// error, so problems are logged and defaults used instead.
    pub fn load() -> Self {
        let path = paths::config_path();
        let config = match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                logging::debug("config", &format!("{:#}, using defaults", e));
                Self::default()
            }
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            logging::debug(
                "config",
                &format!("no config at {}, using defaults", path.display()),
            );
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Apply `MODE_SELECTOR_COLOR` and `NO_COLOR`; `NO_COLOR` wins.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(COLOR_ENV_VAR) {
            match ColorChoice::from_name(&value) {
                Some(choice) => self.color = choice,
                None => logging::debug(
                    "config",
                    &format!("ignoring {}={:?}", COLOR_ENV_VAR, value),
                ),
            }
        }

        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.color = ColorChoice::Never;
        }

        self
    }
}
