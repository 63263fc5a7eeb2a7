//! Configuration management for Floorkit.
//!
//! Provides configuration structures for:
//! - Floor-map editor geometry (grid, tokens, viewport extent)
//! - Record store access (page size, seed data)
//! - The operator session (role, default floor and status colouring)
//! - Export output
//!
//! Configuration can be loaded from and saved to JSON or TOML files.

use floorkit_core::constants::{
    EXTENT_MIN_FACTOR, EXTENT_PADDING_PX, FETCH_BATCH_SIZE, GRID_PX, HISTORY_LIMIT,
    MIN_VIEWPORT_HEIGHT_PX, TOKEN_HEIGHT_PX, TOKEN_WIDTH_PX,
};
use floorkit_core::{Floor, Role, StatusKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Floor-map editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Drag snapping increment in pixels
    pub grid_px: f64,
    /// Undo snapshots kept per session
    pub history_limit: usize,
    /// Machine token width in pixels
    pub token_width_px: f64,
    /// Machine token height in pixels
    pub token_height_px: f64,
    /// Map area width used when no display measures it
    pub viewport_width_px: f64,
    /// Map area height used when no display measures it
    pub viewport_height_px: f64,
    /// Lower bound for the base height of the scrollable extent
    pub min_viewport_height_px: f64,
    /// Margin beyond the outermost machines in pixels
    pub extent_padding_px: f64,
    /// Minimum extent as a multiple of the base height
    pub extent_min_factor: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_px: GRID_PX,
            history_limit: HISTORY_LIMIT,
            token_width_px: TOKEN_WIDTH_PX,
            token_height_px: TOKEN_HEIGHT_PX,
            viewport_width_px: 1600.0,
            viewport_height_px: 900.0,
            min_viewport_height_px: MIN_VIEWPORT_HEIGHT_PX,
            extent_padding_px: EXTENT_PADDING_PX,
            extent_min_factor: EXTENT_MIN_FACTOR,
        }
    }
}

/// Record store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Rows requested per page when reading the whole table
    pub fetch_batch_size: usize,
    /// JSON file of machine rows used to seed the in-memory store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            fetch_batch_size: FETCH_BATCH_SIZE,
            seed_path: None,
        }
    }
}

/// Operator session settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub role: Role,
    pub default_floor: Floor,
    pub default_status: StatusKind,
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory CSV and PNG exports are written to
    pub output_dir: PathBuf,
    /// Also render a PNG of the map
    pub write_png: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("exports"),
            write_png: true,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorSettings,
    pub store: StoreSettings,
    pub session: SessionSettings,
    pub export: ExportSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("none").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let positive = [
            ("editor.grid_px", self.editor.grid_px),
            ("editor.token_width_px", self.editor.token_width_px),
            ("editor.token_height_px", self.editor.token_height_px),
            ("editor.viewport_width_px", self.editor.viewport_width_px),
            ("editor.viewport_height_px", self.editor.viewport_height_px),
            ("editor.min_viewport_height_px", self.editor.min_viewport_height_px),
            ("editor.extent_min_factor", self.editor.extent_min_factor),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(key, "must be > 0"));
            }
        }

        if !(self.editor.extent_padding_px.is_finite() && self.editor.extent_padding_px >= 0.0) {
            return Err(invalid("editor.extent_padding_px", "must be >= 0"));
        }

        if self.editor.history_limit == 0 {
            return Err(invalid("editor.history_limit", "must be > 0"));
        }

        if self.store.fetch_batch_size == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "store.fetch_batch_size".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// Platform config file location: `<config dir>/floorkit/config.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("floorkit").join("config.toml"))
        .ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.editor.grid_px, 40.0);
        assert_eq!(config.editor.history_limit, 20);
        assert_eq!(config.store.fetch_batch_size, 1000);
        assert_eq!(config.session.default_floor, Floor::CyberStudio);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.editor.grid_px = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { ref key, .. }) if key == "editor.grid_px"
        ));

        let mut config = Config::default();
        config.store.fetch_batch_size = 0;
        assert!(matches!(config.validate(), Err(SettingsError::Config(_))));

        let mut config = Config::default();
        config.editor.extent_padding_px = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = Config::default()
            .save_to_file(Path::new("config.yaml"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Config(ConfigError::UnsupportedFormat(_))));
    }
}
