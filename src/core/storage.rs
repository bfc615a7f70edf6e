//! JSON file persistence shared by settings and the score book
//!
//! Files live in the platform configuration directory, e.g.
//! `~/.config/arcade/` on Linux. When no such directory can be resolved the
//! current directory is used instead.
//!
//! Loading is forgiving: a missing file yields `None` and callers fall back
//! to defaults. Saving creates the parent directory when needed.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use super::error::ArcadeResult;

/// Directory holding `settings.json` and `scores.json`
pub fn config_dir() -> PathBuf {
    match ProjectDirs::from("com", "arcade", "Arcade") {
        Some(proj_dirs) => proj_dirs.config_dir().to_path_buf(),
        None => PathBuf::from("."),
    }
}

/// Read and parse a JSON file, `Ok(None)` when it does not exist
pub fn read_json<T: DeserializeOwned>(path: &Path) -> ArcadeResult<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&contents)?))
}

/// Read a JSON file, falling back to `T::default()` on any failure
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path, label: &str) -> T {
    match read_json(path) {
        Ok(Some(value)) => {
            info!("[{}] Loaded from {:?}", label, path);
            value
        }
        Ok(None) => {
            info!("[{}] No file at {:?}. Using defaults.", label, path);
            T::default()
        }
        Err(e) => {
            warn!("[{}] Failed to load {:?}: {}. Using defaults.", label, path, e);
            T::default()
        }
    }
}

/// Pretty-print `value` as JSON to `path`, creating parent directories
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> ArcadeResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
