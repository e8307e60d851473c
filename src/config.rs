//! Configuration loading.
//!
//! One small JSON file at `<config dir>/command-kit/config.json`, read once
//! at startup. Loading never fails: a missing file is normal, an unreadable
//! or malformed one keeps the defaults with a warning. The
//! `COMMAND_KIT_DISABLE_SHORTCUTS` environment variable wins over the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CommandKitError, Result, ResultExt};
use crate::platform::Platform;

/// Environment variable that force-disables shortcut dispatch for the whole
/// process when set to `1` or `true`.
pub const ENV_DISABLE_SHORTCUTS: &str = "COMMAND_KIT_DISABLE_SHORTCUTS";

/// Startup configuration for a dispatcher.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Disable shortcut dispatch for the lifetime of the process. Frozen into
    /// the dispatcher at construction; the runtime toggle cannot clear it.
    pub disable_shortcuts: bool,

    /// Platform override (`"mac"`, `"windows"`, `"other"`), mostly for tests
    /// and UI previews. Detected from the OS when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// Extra tracing filter directive, e.g. `"command_kit=trace"`. `RUST_LOG`
    /// still wins when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

/// Default config file location, `None` when the system exposes no config
/// directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("command-kit").join("config.json"))
}

/// Strict read: a missing, unreadable, or malformed file is an error.
pub fn read_config(path: &Path) -> Result<Config> {
    let raw = std::fs::read_to_string(path).map_err(|source| CommandKitError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;
    let config = serde_json::from_str(&raw)?;
    Ok(config)
}

/// Load from an explicit path, degrading to defaults. A missing file is
/// normal; anything else logs a warning and keeps the defaults.
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        info!(path = %path.display(), "config file not found, using defaults");
        return Config::default();
    }
    read_config(path).warn_on_err().unwrap_or_default()
}

/// Load from the default location with environment overrides applied.
pub fn load_config() -> Config {
    let mut config = match default_config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("no config directory on this system, using defaults");
            Config::default()
        }
    };
    if let Ok(value) = std::env::var(ENV_DISABLE_SHORTCUTS) {
        if disable_from_env(&value) {
            info!(variable = ENV_DISABLE_SHORTCUTS, "shortcuts disabled via environment");
            config.disable_shortcuts = true;
        }
    }
    config
}

fn disable_from_env(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
