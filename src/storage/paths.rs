//! Application paths for the config file and update cache.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "nanobanana";
const CONFIG_HOME_ENV: &str = "XDG_CONFIG_HOME";

/// Application paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// Configuration directory (`<config home>/nanobanana`).
    pub config: PathBuf,
}

impl AppPaths {
    /// Paths for the current environment.
    ///
    /// `$XDG_CONFIG_HOME` wins when set and non-empty; otherwise
    /// `~/.config`. Returns `None` when no home directory can be found.
    #[must_use]
    pub fn new() -> Option<Self> {
        let config_home = std::env::var(CONFIG_HOME_ENV).ok();
        Self::from_parts(config_home.as_deref(), dirs::home_dir().as_deref())
    }

    /// Build paths from an explicit config home and home directory.
    #[must_use]
    pub fn from_parts(config_home: Option<&str>, home: Option<&Path>) -> Option<Self> {
        let base = match config_home.map(str::trim).filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => home?.join(".config"),
        };
        Some(Self::with_config_dir(base.join(APP_DIR)))
    }

    /// Paths rooted at an explicit config directory.
    #[must_use]
    pub const fn with_config_dir(config: PathBuf) -> Self {
        Self { config }
    }

    /// Path to `config.json`.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.json")
    }

    /// Path to the update check cache, next to the config file.
    #[must_use]
    pub fn update_cache_file(&self) -> PathBuf {
        self.config.join("update_check.json")
    }
}

/// Default agent directory used by `install-skill` (`~/.claude`).
#[must_use]
pub fn default_claude_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".claude"))
}

mod dirs {
    use std::path::PathBuf;

    pub fn home_dir() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
    }
}
