//! Bounded undo log of floor position snapshots.

use chrono::{DateTime, Utc};
use floorkit_core::PositionUpdate;
use std::collections::VecDeque;

/// Every machine's position on the floor at the start of a gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSnapshot {
    pub entries: Vec<PositionUpdate>,
    pub captured_at: DateTime<Utc>,
}

impl PositionSnapshot {
    pub fn new(entries: Vec<PositionUpdate>) -> Self {
        Self {
            entries,
            captured_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Undo stack that evicts its oldest snapshot once over capacity.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<PositionSnapshot>,
    capacity: usize,
}

impl History {
    /// Creates a stack holding at most `capacity` snapshots (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, snapshot: PositionSnapshot) {
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.capacity {
            if let Some(evicted) = self.snapshots.pop_front() {
                tracing::debug!("History full, dropped snapshot from {}", evicted.captured_at);
            }
        }
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<PositionSnapshot> {
        self.snapshots.pop_back()
    }

    pub fn peek(&self) -> Option<&PositionSnapshot> {
        self.snapshots.back()
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(floorkit_core::constants::HISTORY_LIMIT)
    }
}
