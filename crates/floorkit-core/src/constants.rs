//! Shared constants for the floor-map editor and record store.

/// Snapping increment applied to drag deltas, in pixels.
pub const GRID_PX: f64 = 40.0;

/// Maximum number of position snapshots kept for undo.
pub const HISTORY_LIMIT: usize = 20;

/// Rendered machine token width in pixels.
pub const TOKEN_WIDTH_PX: f64 = 80.0;

/// Rendered machine token height in pixels.
pub const TOKEN_HEIGHT_PX: f64 = 35.0;

/// Lower bound for the base viewport height used when growing the map extent.
pub const MIN_VIEWPORT_HEIGHT_PX: f64 = 800.0;

/// Padding added above and below the outermost machines when growing the map extent.
pub const EXTENT_PADDING_PX: f64 = 200.0;

/// The map never shrinks below this multiple of the base viewport height.
pub const EXTENT_MIN_FACTOR: f64 = 1.5;

/// Rows requested per page when fetching the whole machines table.
pub const FETCH_BATCH_SIZE: usize = 1000;
