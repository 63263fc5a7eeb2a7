//! Free-text machine search and scroll targeting.

use floorkit_core::{Machine, MachineId};

use crate::viewport::Point;

/// Returns true if the machine number or name contains `query`,
/// ignoring case. An empty query matches everything.
pub fn matches(machine: &Machine, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    [machine.machine_number.as_deref(), machine.machine_name.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
}

/// First machine, in working-set order, whose number contains `query`.
pub fn first_number_match(machines: &[Machine], query: &str) -> Option<MachineId> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    machines
        .iter()
        .find(|m| {
            m.machine_number
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&query))
        })
        .map(|m| m.id)
}

/// Scroll offsets that centre a point in a client area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollTarget {
    pub left: f64,
    pub top: f64,
}

/// Scroll position placing `center` in the middle of a client area.
pub fn scroll_to_center(center: Point, client_width: f64, client_height: f64) -> ScrollTarget {
    ScrollTarget {
        left: center.x - client_width / 2.0,
        top: center.y - client_height / 2.0,
    }
}
