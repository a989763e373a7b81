//! User settings for Pluvio
//!
//! Display preferences and the export location, persisted as JSON next to
//! the database.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::PluvioPaths;
use crate::error::PluvioError;

/// Widest chart bar accepted from the settings file
pub const MAX_CHART_WIDTH: usize = 200;

/// User settings for Pluvio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format for tables and charts (strftime format)
    #[serde(default = "default_display_date_format")]
    pub display_date_format: String,

    /// Width in characters of the longest chart bar
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Where exports land when no output path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_display_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_chart_width() -> usize {
    40
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            display_date_format: default_display_date_format(),
            chart_width: default_chart_width(),
            export_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &PluvioPaths) -> Result<Self, PluvioError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PluvioError::Io(format!("Impossible de lire le fichier de réglages : {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PluvioError::Config(format!("Fichier de réglages illisible : {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the display code cannot honour
    pub fn validate(&self) -> Result<(), PluvioError> {
        if self.chart_width == 0 || self.chart_width > MAX_CHART_WIDTH {
            return Err(PluvioError::Config(format!(
                "chart_width doit être compris entre 1 et {} (valeur : {})",
                MAX_CHART_WIDTH, self.chart_width
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PluvioPaths) -> Result<(), PluvioError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PluvioError::Config(format!("Impossible de sérialiser les réglages : {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PluvioError::Io(format!("Impossible d'écrire le fichier de réglages : {}", e)))
    }

    /// Directory exports are written to by default
    pub fn resolve_export_dir(&self, paths: &PluvioPaths) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths.export_dir())
    }
}
