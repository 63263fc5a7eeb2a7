//! Floor-map editor state.
//! Owns the working set for one floor and drives it through pointer,
//! keyboard, and remote-change events.
//!
//! This module is split into submodules:
//! - `gestures`: pointer handling for drag, marquee, and pan
//! - `modes`: edit mode, selection mode, grid, search
//! - `undo`: restoring and re-persisting history snapshots
//! - `sync`: loading, floor switching, remote change handling
//! - `exports`: CSV and PNG output

mod exports;
mod gestures;
mod modes;
mod sync;
mod undo;

use floorkit_core::constants::{GRID_PX, HISTORY_LIMIT};
use floorkit_core::{ChangeEvent, Floor, MachineId, RecordStore, Role, StatusKind};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::canvas::Canvas;
use crate::drag::DragSession;
use crate::history::History;
use crate::marquee::Marquee;
use crate::notifications::Notification;
use crate::persistence::BatchReport;
use crate::renderer::RenderOptions;
use crate::selection_manager::{SelectionManager, SelectionMode};
use crate::viewport::{ExtentOptions, Percent, Point};

/// Editor tuning, usually taken from the settings file.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    /// Snapping increment for drag deltas, in pixels.
    pub grid_px: f64,
    /// Maximum undo snapshots kept.
    pub history_limit: usize,
    pub extent: ExtentOptions,
    pub render: RenderOptions,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_px: GRID_PX,
            history_limit: HISTORY_LIMIT,
            extent: ExtentOptions::default(),
            render: RenderOptions::default(),
        }
    }
}

/// Keyboard modifiers held during a pointer press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
    };

    /// True if the press should toggle membership in multi mode.
    pub fn additive(&self) -> bool {
        self.shift || self.ctrl
    }
}

/// What a finished gesture did.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// A marquee replaced the selection with these ids.
    Selected(Vec<MachineId>),
    /// A drag moved machines; one outcome per persisted position.
    Committed(BatchReport),
    /// A pan ended at this offset.
    Panned(Point),
}

#[derive(Debug, Clone, Default)]
pub(crate) enum Gesture {
    #[default]
    Idle,
    Dragging(DragSession),
    Selecting(Marquee),
    Panning {
        down: Point,
        start_offset: Point,
    },
}

/// The floor-map editor.
///
/// All mutation goes through the methods on this type; there is no shared
/// state besides the record store.
pub struct FloorMapEditor {
    store: Arc<dyn RecordStore>,
    changes: broadcast::Receiver<ChangeEvent>,
    options: EditorOptions,
    role: Role,
    status_kind: StatusKind,
    canvas: Canvas,
    selection: SelectionManager,
    gesture: Gesture,
    pan_armed: bool,
    history: History,
    edit_mode: bool,
    search_query: String,
    highlighted: Option<MachineId>,
    drag_readout: Option<Percent>,
    notifications: VecDeque<Notification>,
}

impl FloorMapEditor {
    /// Creates an editor for `floor`. Call `load` to fetch its machines.
    pub fn new(
        store: Arc<dyn RecordStore>,
        floor: Floor,
        status_kind: StatusKind,
        role: Role,
        options: EditorOptions,
    ) -> Self {
        let changes = store.changes();
        Self {
            store,
            changes,
            canvas: Canvas::new(floor, options.grid_px, options.extent),
            history: History::new(options.history_limit),
            options,
            role,
            status_kind,
            selection: SelectionManager::new(),
            gesture: Gesture::Idle,
            pan_armed: false,
            edit_mode: false,
            search_query: String::new(),
            highlighted: None,
            drag_readout: None,
            notifications: VecDeque::new(),
        }
    }

    pub fn floor(&self) -> Floor {
        self.canvas.floor()
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn status_kind(&self) -> StatusKind {
        self.status_kind
    }

    /// Chooses which status column drives token colour.
    pub fn set_status_kind(&mut self, kind: StatusKind) {
        self.status_kind = kind;
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging(_))
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.gesture, Gesture::Panning { .. })
    }

    pub fn is_pan_armed(&self) -> bool {
        self.pan_armed
    }

    /// The marquee being drawn, if any.
    pub fn marquee(&self) -> Option<&Marquee> {
        match &self.gesture {
            Gesture::Selecting(marquee) => Some(marquee),
            _ => None,
        }
    }

    /// Percent position of the anchor machine while a drag is in progress.
    pub fn drag_readout(&self) -> Option<Percent> {
        self.drag_readout
    }

    /// Current view offset. Never affects stored positions.
    pub fn pan_offset(&self) -> Point {
        self.canvas
            .viewport()
            .map(|vp| vp.pan_offset())
            .unwrap_or_default()
    }

    /// Messages queued since the last call, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    fn notify(&mut self, notification: Notification) {
        tracing::debug!("{}", notification);
        self.notifications.push_back(notification);
    }

    fn report_batch(&mut self, report: &BatchReport) {
        let failed = report.attempted() - report.succeeded();
        if failed > 0 {
            self.notify(Notification::error(format!(
                "Failed to save {} position(s)",
                failed
            )));
        }
    }
}

impl std::fmt::Debug for FloorMapEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloorMapEditor")
            .field("floor", &self.floor())
            .field("machines", &self.canvas.len())
            .field("mode", &self.mode())
            .field("edit_mode", &self.edit_mode)
            .field("history", &self.history.len())
            .finish()
    }
}
