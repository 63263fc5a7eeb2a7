use floorkit_core::MachineId;
use floorkit_designer::{SelectionManager, SelectionMode};

#[test]
fn test_default_mode_is_single() {
    let sel = SelectionManager::new();
    assert_eq!(sel.mode(), SelectionMode::Single);
    assert!(sel.is_empty());
}

#[test]
fn test_switching_mode_clears_selection() {
    let mut sel = SelectionManager::new();
    sel.set_mode(SelectionMode::Multi);
    sel.replace([MachineId(1), MachineId(2), MachineId(3)]);
    assert_eq!(sel.len(), 3);

    sel.set_mode(SelectionMode::Single);
    assert!(sel.is_empty());
}

#[test]
fn test_multi_mode_modifier_toggles() {
    let mut sel = SelectionManager::new();
    sel.set_mode(SelectionMode::Multi);

    sel.press_machine(MachineId(1), false, &[]);
    sel.press_machine(MachineId(2), true, &[]);
    assert_eq!(sel.selected(), vec![MachineId(1), MachineId(2)]);

    let dragging = sel.press_machine(MachineId(1), true, &[]);
    assert_eq!(dragging, vec![MachineId(2)]);
    assert!(!sel.is_selected(MachineId(1)));
}

#[test]
fn test_retain_drops_missing_ids() {
    let mut sel = SelectionManager::new();
    sel.replace([MachineId(1), MachineId(2)]);
    sel.retain(|id| id != MachineId(2));
    assert_eq!(sel.selected(), vec![MachineId(1)]);
}
