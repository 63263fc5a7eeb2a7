//! # Floorkit Designer
//!
//! Floor-map spatial editor. Machines are laid out on a per-floor map at
//! percentage positions and can be dragged, grid-snapped, marquee-selected,
//! and undone, with every committed position persisted through a
//! `RecordStore`.
//!
//! ## Modules
//! - `viewport`: percent/pixel coordinate model and scrollable extent
//! - `canvas`: the working set of machines for one floor
//! - `selection_manager`: single/multi/all selection modes
//! - `drag`: grid-snapped group dragging
//! - `marquee`: rubber-band selection
//! - `history`: bounded undo stack
//! - `persistence`: concurrent best-effort position writes
//! - `editor_state`: the editor tying it all together
//! - `export` / `renderer`: CSV and PNG output

pub mod canvas;
pub mod drag;
pub mod editor_state;
pub mod export;
pub mod history;
pub mod marquee;
pub mod notifications;
pub mod persistence;
pub mod renderer;
pub mod search;
pub mod selection_manager;
pub mod viewport;

pub use canvas::Canvas;
pub use drag::{snap_delta, snap_to_grid, DragSession};
pub use editor_state::{EditorOptions, FloorMapEditor, GestureOutcome, Modifiers};
pub use export::{csv_file_name, png_file_name, positions_csv};
pub use history::{History, PositionSnapshot};
pub use marquee::Marquee;
pub use notifications::{Notification, NotificationLevel};
pub use persistence::{persist_positions, BatchReport, PersistOutcome};
pub use renderer::{render_pixmap, render_png, RenderOptions};
pub use search::ScrollTarget;
pub use selection_manager::{SelectionManager, SelectionMode};
pub use viewport::{required_min_height, required_top_margin, to_percent, to_pixel, ExtentOptions, Percent, Point, Viewport};
