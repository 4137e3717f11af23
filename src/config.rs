// Persisted user preferences - explicit context object, loaded once at start

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dark_mode: bool,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("thumbgrab").join("config.json"))
    }

    /// Load from disk. A missing or unreadable file falls back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                eprintln!("[Config] Corrupt config at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist to disk. Failures are logged, never fatal.
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("[Config] Failed to create {}: {}", parent.display(), e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    eprintln!("[Config] Failed to write {}: {}", path.display(), e);
                }
            }
            Err(e) => eprintln!("[Config] Failed to serialize config: {}", e),
        }
    }

    /// Change the theme preference and persist immediately.
    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
        self.save();
    }
}
