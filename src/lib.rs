//! # Floorkit
//!
//! Floor-map editor for gaming-machine (EGM) inventory. Machines are
//! placed on a per-floor map at percentage positions; the editor drags,
//! snaps, marquee-selects, and undoes them, persisting every committed
//! position through a record store.
//!
//! ## Architecture
//!
//! Floorkit is organized as a workspace with multiple crates:
//!
//! 1. **floorkit-core** - Machine data model, errors, record store contract, change events
//! 2. **floorkit-designer** - The floor-map spatial editor, CSV and PNG export
//! 3. **floorkit-settings** - Configuration files and validation
//! 4. **floorkit** - Main binary that integrates all crates

use std::sync::Arc;

pub use floorkit_designer as designer;
pub use floorkit_settings as settings;

pub use floorkit_core::{
    fetch_all, ChangeEvent, Error, Floor, InMemoryStore, Machine, MachineId, RecordStore, Result,
    Role, StatusKind,
};
pub use floorkit_designer::{EditorOptions, FloorMapEditor, SelectionMode};
pub use floorkit_settings::Config;

use floorkit_designer::{ExtentOptions, RenderOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support, INFO otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Editor tuning taken from the editor section of the configuration.
pub fn editor_options(config: &Config) -> EditorOptions {
    let editor = &config.editor;
    EditorOptions {
        grid_px: editor.grid_px,
        history_limit: editor.history_limit,
        extent: ExtentOptions {
            min_base_height: editor.min_viewport_height_px,
            padding: editor.extent_padding_px,
            min_factor: editor.extent_min_factor,
        },
        render: RenderOptions {
            token_width: editor.token_width_px as f32,
            token_height: editor.token_height_px as f32,
        },
    }
}

/// Opens the record store described by the store section.
///
/// With a seed file the store starts with its rows, otherwise empty.
pub fn open_store(config: &Config) -> Result<Arc<InMemoryStore>> {
    let store = match &config.store.seed_path {
        Some(path) => InMemoryStore::load_json(path)?,
        None => {
            tracing::warn!("No seed file configured, starting with an empty store");
            InMemoryStore::new()
        }
    };
    Ok(Arc::new(store))
}
