//! Edit mode, selection mode, grid, search, and token styling.

use floorkit_core::{EditorError, Machine, MachineId, TokenFill};

use super::{FloorMapEditor, Gesture};
use crate::notifications::Notification;
use crate::search::{self, first_number_match, scroll_to_center, ScrollTarget};
use crate::selection_manager::SelectionMode;

impl FloorMapEditor {
    /// Enables or disables editing.
    ///
    /// The grid follows edit mode. A marquee or pan in progress is dropped;
    /// a drag in progress still commits on release. Read-only roles cannot
    /// enable editing.
    pub fn set_edit_mode(&mut self, enabled: bool) -> Result<(), EditorError> {
        if enabled && !self.role.can_edit() {
            self.notify(Notification::error("Edit mode is not available for this role"));
            return Err(EditorError::ReadOnlyRole {
                role: self.role.to_string(),
            });
        }
        self.edit_mode = enabled;
        self.canvas.set_grid_visible(enabled);
        if matches!(self.gesture, Gesture::Selecting(_) | Gesture::Panning { .. }) {
            self.gesture = Gesture::Idle;
        }
        tracing::debug!("Edit mode {}", if enabled { "on" } else { "off" });
        Ok(())
    }

    /// Flips edit mode, returning the new state.
    pub fn toggle_edit_mode(&mut self) -> Result<bool, EditorError> {
        let enabled = !self.edit_mode;
        self.set_edit_mode(enabled)?;
        Ok(enabled)
    }

    /// Switches selection mode. Always clears the selection.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if matches!(self.gesture, Gesture::Selecting(_)) {
            self.gesture = Gesture::Idle;
        }
        self.selection.set_mode(mode);
    }

    /// Shows or hides the grid independently of edit mode.
    pub fn toggle_grid(&mut self) -> bool {
        let visible = !self.canvas.grid_visible();
        self.canvas.set_grid_visible(visible);
        visible
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Filters displayed machines and highlights the first number match.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.refresh_highlight();
    }

    /// Machines passing the search filter, in working-set order.
    pub fn displayed_machines(&self) -> Vec<&Machine> {
        self.canvas
            .machines()
            .iter()
            .filter(|m| search::matches(m, &self.search_query))
            .collect()
    }

    /// Machine highlighted by the current search.
    pub fn highlighted(&self) -> Option<MachineId> {
        self.highlighted
    }

    /// Scroll offsets centring the highlighted machine in a client area.
    pub fn scroll_target(&self, client_width: f64, client_height: f64) -> Option<ScrollTarget> {
        let center = self.canvas.pixel_center(self.highlighted?)?;
        Some(scroll_to_center(center, client_width, client_height))
    }

    /// Fill for a machine's token under the active status kind.
    pub fn token_fill(&self, id: MachineId) -> Option<TokenFill> {
        self.canvas.machine(id).map(|m| m.fill(self.status_kind))
    }

    pub(super) fn refresh_highlight(&mut self) {
        self.highlighted = first_number_match(self.canvas.machines(), &self.search_query);
    }
}
