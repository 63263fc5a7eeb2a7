use floorkit_core::MachineId;
use std::collections::BTreeSet;

/// Interaction mode for pointer presses on machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// A press selects and drags exactly the pressed machine.
    #[default]
    Single,
    /// Presses build a selection; the selection drags as a group.
    Multi,
    /// Any press drags every machine on the floor. Nothing is selected.
    All,
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Multi => write!(f, "multi"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Tracks the active mode and the selected machines.
///
/// `SelectionManager` is responsible for:
/// - Deciding which machines a press on a machine drags
/// - Modifier-click toggling in multi mode
/// - Replacing the selection with a marquee result
///
/// Switching mode always clears the selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    mode: SelectionMode,
    selected: BTreeSet<MachineId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Sets the mode and clears the selection, even if the mode is unchanged.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        tracing::debug!("Selection mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.selected.clear();
    }

    /// Selected ids in ascending order.
    pub fn selected(&self) -> Vec<MachineId> {
        self.selected.iter().copied().collect()
    }

    pub fn is_selected(&self, id: MachineId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Makes `id` the only selected machine.
    pub fn select_only(&mut self, id: MachineId) {
        self.selected.clear();
        self.selected.insert(id);
    }

    /// Flips membership of `id`. Returns true if it is now selected.
    pub fn toggle(&mut self, id: MachineId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Replaces the selection with exactly `ids`.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = MachineId>) {
        self.selected = ids.into_iter().collect();
    }

    /// Keeps only the selected ids for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(MachineId) -> bool) {
        self.selected.retain(|id| keep(*id));
    }

    /// Applies a press on machine `id` and returns the ids to drag.
    ///
    /// `additive` is the toggle modifier (shift or ctrl). `floor_ids` lists
    /// every machine on the floor, in working-set order, for `All` mode.
    pub fn press_machine(
        &mut self,
        id: MachineId,
        additive: bool,
        floor_ids: &[MachineId],
    ) -> Vec<MachineId> {
        match self.mode {
            SelectionMode::All => floor_ids.to_vec(),
            SelectionMode::Single => {
                self.select_only(id);
                vec![id]
            }
            SelectionMode::Multi => {
                if additive {
                    self.toggle(id);
                } else if !self.is_selected(id) {
                    self.select_only(id);
                }
                if self.selected.is_empty() {
                    vec![id]
                } else {
                    self.selected()
                }
            }
        }
    }
}
