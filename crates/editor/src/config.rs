//! Editor configuration.
//!
//! A small JSON config file under the platform config directory tunes the
//! interaction knobs that are policy rather than invariants: how many
//! quit confirmations a dirty buffer demands, and how long status
//! messages stay visible. Tab width is deliberately *not* configurable —
//! the render form's 8-column stop is an invariant the column mapping
//! tests rely on.
//!
//! Loading never fails the editor: a missing file means defaults, and a
//! malformed file means defaults plus a logged warning.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Tunable interaction settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quit keypresses required to abandon unsaved changes.
    pub quit_confirm_times: u32,
    /// How long a status message stays on screen.
    pub message_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quit_confirm_times: 3,
            message_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// The message display window as a `Duration`.
    pub fn message_timeout(&self) -> Duration {
        Duration::from_millis(self.message_timeout_ms)
    }

    /// Loads the config file, falling back to defaults on any failure.
    pub fn load() -> Config {
        let Some(path) = config_file_path() else {
            return Config::default();
        };
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => return Config::default(),
        };
        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring malformed config");
                Config::default()
            }
        }
    }
}

/// Returns the path of the config file, e.g. `~/.config/slate/config.json`.
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn config_file_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("slate").join("config.json"))
}
