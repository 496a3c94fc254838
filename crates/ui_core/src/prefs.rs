//! Persisted UI preferences.
//!
//! One JSON file, one meaningful key. Reads are forgiving: a missing file,
//! unreadable contents, or an unknown theme value all resolve to the default
//! theme. Writes report their error so callers can log it, but nothing here
//! ever panics or surfaces to the user.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use shared::domain::Theme;

pub const SETTINGS_FILE: &str = "settings.json";
pub const DATA_DIR_ENV: &str = "ROLLBOOK_DATA_DIR";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("could not access preference file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not resolve a data directory (checked {DATA_DIR_ENV} and the user-local app data dir)")]
    NoDataDir,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct PersistedPrefs {
    theme: String,
}

impl Default for PersistedPrefs {
    fn default() -> Self {
        Self {
            theme: Theme::Light.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    settings_path: Option<PathBuf>,
}

impl PreferenceStore {
    /// Resolution order: explicit override, then `ROLLBOOK_DATA_DIR`, then
    /// the user-local app data dir.
    pub fn resolve(data_dir_override: Option<&Path>) -> Result<Self, PrefsError> {
        let root = if let Some(dir) = data_dir_override {
            dir.to_path_buf()
        } else if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            PathBuf::from(dir)
        } else if let Some(base) = dirs::data_local_dir() {
            base.join("rollbook")
        } else {
            return Err(PrefsError::NoDataDir);
        };
        Ok(Self::at_dir(&root))
    }

    pub fn at_dir(dir: &Path) -> Self {
        Self {
            settings_path: Some(dir.join(SETTINGS_FILE)),
        }
    }

    /// A store that reads the default and swallows writes; used when no
    /// writable data directory could be resolved.
    pub fn disabled() -> Self {
        Self {
            settings_path: None,
        }
    }

    pub fn load_theme(&self) -> Theme {
        let Some(path) = &self.settings_path else {
            return Theme::default();
        };
        let Ok(text) = fs::read_to_string(path) else {
            debug!(path = %path.display(), "no readable preference file, using defaults");
            return Theme::default();
        };
        match serde_json::from_str::<PersistedPrefs>(&text) {
            Ok(prefs) => Theme::from_str_or_default(&prefs.theme),
            Err(err) => {
                debug!(path = %path.display(), %err, "malformed preference file, using defaults");
                Theme::default()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), PrefsError> {
        let Some(path) = &self.settings_path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let prefs = PersistedPrefs {
            theme: theme.as_str().to_string(),
        };
        fs::write(path, serde_json::to_string_pretty(&prefs)?)?;
        debug!(theme = theme.as_str(), "persisted theme preference");
        Ok(())
    }
}
