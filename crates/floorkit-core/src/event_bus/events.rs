//! Change event definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::MachineId;

/// Backend tables that publish change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Machines,
    Team,
    Jcu,
    Jpc,
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Table::Machines => write!(f, "machines"),
            Table::Team => write!(f, "team"),
            Table::Jcu => write!(f, "jcu"),
            Table::Jpc => write!(f, "jpc"),
        }
    }
}

/// Kind of row mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// A row-level change notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub table: Table,
    pub kind: ChangeKind,
    /// The affected row, when the backend reports it.
    pub id: Option<MachineId>,
    pub at: DateTime<Utc>,
}

impl ChangeEvent {
    pub fn new(table: Table, kind: ChangeKind, id: Option<MachineId>) -> Self {
        Self {
            table,
            kind,
            id,
            at: Utc::now(),
        }
    }

    pub fn inserted(table: Table, id: MachineId) -> Self {
        Self::new(table, ChangeKind::Insert, Some(id))
    }

    pub fn updated(table: Table, id: MachineId) -> Self {
        Self::new(table, ChangeKind::Update, Some(id))
    }

    pub fn deleted(table: Table, id: MachineId) -> Self {
        Self::new(table, ChangeKind::Delete, Some(id))
    }

    /// Short description for logging.
    pub fn description(&self) -> String {
        match self.id {
            Some(id) => format!("{:?} on {} (row {})", self.kind, self.table, id),
            None => format!("{:?} on {}", self.kind, self.table),
        }
    }
}
