//! Where tabpad keeps its own files
//!
//! `config.yaml` and `logs/` sit in one per-user directory. The document
//! storage directory is separate and comes from the config.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "tabpad";

/// Per-user tabpad directory
///
/// `$XDG_CONFIG_HOME/tabpad` when that variable is set, otherwise the
/// platform config directory (`~/.config` on Unix and macOS, the roaming
/// app data folder on Windows) joined with `tabpad`.
pub fn config_dir() -> Option<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ if cfg!(target_os = "windows") => dirs::config_dir()?,
        _ => dirs::home_dir()?.join(".config"),
    };
    Some(base.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

fn create_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create `<config dir>/logs` if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = config_dir()
        .ok_or_else(|| "No config directory available".to_string())?
        .join("logs");
    create_dir(&logs)?;
    Ok(logs)
}

/// Create the document storage directory if needed
///
/// Relative paths are taken from the working directory.
pub fn ensure_storage_dir(path: &Path) -> Result<PathBuf, String> {
    if !path.exists() {
        create_dir(path)?;
        tracing::info!("Created storage directory {}", path.display());
    }
    Ok(path.to_path_buf())
}
