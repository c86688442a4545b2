//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/tabpad/config.yaml`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::autosave::AUTOSAVE_INTERVAL;
use crate::model::{DEFAULT_FONT_SIZE, MIN_FONT_SIZE};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Seconds between autosave checks
    #[serde(default = "default_autosave_interval_secs")]
    pub autosave_interval_secs: u64,
    /// Font size for new tabs (points)
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Whether new tabs start with word wrap on
    #[serde(default)]
    pub word_wrap: bool,
    /// Directory created at startup; the save-as picker opens here
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
}

fn default_autosave_interval_secs() -> u64 {
    AUTOSAVE_INTERVAL.as_secs()
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("database")
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_interval_secs: default_autosave_interval_secs(),
            font_size: default_font_size(),
            word_wrap: false,
            storage_dir: default_storage_dir(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse YAML, filling in defaults for missing keys
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        let mut config: Self = serde_yaml::from_str(content)?;
        if config.font_size < MIN_FONT_SIZE {
            tracing::warn!(
                "font_size {} is below the minimum, using {}",
                config.font_size,
                MIN_FONT_SIZE
            );
            config.font_size = MIN_FONT_SIZE;
        }
        if config.autosave_interval_secs == 0 {
            tracing::warn!("autosave_interval_secs must be positive, using default");
            config.autosave_interval_secs = default_autosave_interval_secs();
        }
        Ok(config)
    }

    /// Autosave period as a duration
    pub fn autosave_interval(&self) -> Duration {
        Duration::from_secs(self.autosave_interval_secs)
    }
}
