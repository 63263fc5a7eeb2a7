//! Pointer handling for drag, marquee, and pan gestures.
//!
//! Pointer positions are map-local pixels. Only one gesture is active at a
//! time; presses arriving while another gesture runs are ignored.

use floorkit_core::{EditorError, MachineId};

use super::{FloorMapEditor, Gesture, GestureOutcome, Modifiers};
use crate::drag::DragSession;
use crate::history::PositionSnapshot;
use crate::marquee::Marquee;
use crate::notifications::Notification;
use crate::persistence::persist_positions;
use crate::selection_manager::SelectionMode;
use crate::viewport::{Percent, Point};

impl FloorMapEditor {
    /// Measures the map area. Gestures are ignored until this is called.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) -> Result<(), EditorError> {
        self.canvas.resize_viewport(width, height)
    }

    /// Arms or disarms panning (the pan key was pressed or released).
    ///
    /// Disarming ends a pan in progress.
    pub fn set_pan_armed(&mut self, armed: bool) {
        self.pan_armed = armed;
        if !armed && self.is_panning() {
            self.gesture = Gesture::Idle;
        }
    }

    /// Pointer pressed on a machine token.
    ///
    /// Starts a drag in edit mode and records a history snapshot. Returns
    /// false if the press was ignored.
    pub fn pointer_down_on_machine(
        &mut self,
        id: MachineId,
        pointer: Point,
        modifiers: Modifiers,
    ) -> bool {
        if !self.edit_mode || !matches!(self.gesture, Gesture::Idle) {
            return false;
        }
        if self.canvas.pixel_center(id).is_none() {
            return false;
        }

        let floor_ids = self.canvas.ids();
        let dragging = self
            .selection
            .press_machine(id, modifiers.additive(), &floor_ids);
        let Some(session) = DragSession::begin(&self.canvas, id, &dragging, pointer) else {
            return false;
        };

        self.history
            .push(PositionSnapshot::new(self.canvas.positions()));
        self.drag_readout = self.canvas.machine(id).map(|m| Percent::new(m.x, m.y));
        tracing::debug!(
            "Drag started on machine {} with {} machine(s) in {} mode",
            id,
            session.len(),
            self.selection.mode()
        );
        self.gesture = Gesture::Dragging(session);
        true
    }

    /// Pointer pressed on empty map area.
    ///
    /// In edit mode with multi selection this starts a marquee and clears
    /// the selection; otherwise, with panning armed, it starts a pan.
    pub fn pointer_down_on_canvas(&mut self, pointer: Point) -> bool {
        if !matches!(self.gesture, Gesture::Idle) {
            return false;
        }
        if self.edit_mode && self.selection.mode() == SelectionMode::Multi {
            self.selection.clear();
            self.gesture = Gesture::Selecting(Marquee::begin(pointer));
            return true;
        }
        if self.pan_armed {
            if let Some(viewport) = self.canvas.viewport() {
                self.gesture = Gesture::Panning {
                    down: pointer,
                    start_offset: viewport.pan_offset(),
                };
                return true;
            }
        }
        false
    }

    /// Pointer moved. Updates whichever gesture is active.
    pub fn pointer_move(&mut self, pointer: Point) {
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::Selecting(marquee) => marquee.update(pointer),
            Gesture::Panning { down, start_offset } => {
                let offset = start_offset.offset_by(pointer.delta_from(*down));
                if let Some(viewport) = self.canvas.viewport_mut() {
                    viewport.set_pan(offset.x, offset.y);
                }
            }
            Gesture::Dragging(session) => {
                self.drag_readout = session.apply_move(&mut self.canvas, pointer);
            }
        }
    }

    /// Pointer released. Ends the active gesture.
    ///
    /// A drag snaps, persists every dragged machine concurrently, and
    /// completes only after all updates have settled.
    pub async fn pointer_up(&mut self) -> Option<GestureOutcome> {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => None,
            Gesture::Selecting(marquee) => {
                let hits = marquee.select(self.displayed_centers());
                tracing::debug!("Marquee selected {} machine(s)", hits.len());
                self.selection.replace(hits.iter().copied());
                Some(GestureOutcome::Selected(hits))
            }
            Gesture::Panning { .. } => Some(GestureOutcome::Panned(self.pan_offset())),
            Gesture::Dragging(session) => {
                let updates = session.finish(&mut self.canvas);
                self.drag_readout = None;
                let report = persist_positions(self.store.clone(), updates).await;
                tracing::info!(
                    "Saved {} of {} position(s) on {}",
                    report.succeeded(),
                    report.attempted(),
                    self.floor()
                );
                self.notify(Notification::success(format!(
                    "Saved {} position(s)",
                    report.attempted()
                )));
                self.report_batch(&report);
                Some(GestureOutcome::Committed(report))
            }
        }
    }

    fn displayed_centers(&self) -> Vec<(MachineId, Point)> {
        self.displayed_machines()
            .into_iter()
            .filter_map(|m| self.canvas.pixel_center(m.id).map(|p| (m.id, p)))
            .collect()
    }
}
