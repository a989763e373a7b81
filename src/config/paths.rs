//! Path management for Pluvio
//!
//! ## Path Resolution Order
//!
//! 1. `PLUVIO_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/pluvio` or `~/.config/pluvio`
//! 3. Windows: `%APPDATA%\pluvio`

use std::path::PathBuf;

use crate::error::PluvioError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "PLUVIO_DATA_DIR";

/// Manages all paths used by Pluvio
#[derive(Debug, Clone)]
pub struct PluvioPaths {
    base_dir: PathBuf,
}

impl PluvioPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PluvioError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PluvioPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.base_dir.join("pluvio.db")
    }

    /// Default directory for CSV exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base directory exists
    ///
    /// The export directory is created lazily, on first export.
    pub fn ensure_directories(&self) -> Result<(), PluvioError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PluvioError::Io(format!("Impossible de créer le répertoire des données : {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PluvioError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                PluvioError::Config("Impossible de déterminer le répertoire HOME".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("pluvio"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PluvioError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PluvioError::Config("Impossible de déterminer le répertoire APPDATA".into()))?;
    Ok(PathBuf::from(appdata).join("pluvio"))
}
