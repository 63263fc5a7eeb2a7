//! Floorkit Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, Config, EditorSettings, ExportSettings, SessionSettings, StoreSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
