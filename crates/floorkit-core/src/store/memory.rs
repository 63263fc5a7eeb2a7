//! In-process record store.
//!
//! Holds rows in memory and behaves like the hosted backend from the
//! editor's point of view: partial updates, row ordering by id, and a change
//! notification after every mutation. Individual rows can be made to fail
//! so partial-failure paths can be exercised.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::broadcast;

use super::{RecordStore, StoreResult};
use crate::data::{Floor, Machine, MachineId, PositionUpdate, StatusPatch};
use crate::error::{Error, StoreError};
use crate::event_bus::{ChangeEvent, EventBus, Table};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: RwLock<BTreeMap<MachineId, Machine>>,
    failing: RwLock<HashSet<MachineId>>,
    unavailable: AtomicBool,
    position_writes: AtomicUsize,
    bus: EventBus,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `rows`. Later rows replace earlier ones with the same id.
    pub fn with_rows(rows: impl IntoIterator<Item = Machine>) -> Self {
        let store = Self::new();
        {
            let mut table = store.rows.write();
            for row in rows {
                table.insert(row.id, row);
            }
        }
        store
    }

    /// Loads rows from a JSON array in the backend's column layout.
    pub fn load_json(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let rows: Vec<Machine> = serde_json::from_str(&content)
            .map_err(|e| Error::other(format!("Invalid machine seed file: {}", e)))?;
        tracing::info!("Loaded {} machines from {}", rows.len(), path.display());
        Ok(Self::with_rows(rows))
    }

    /// Inserts or replaces a row.
    pub fn insert(&self, machine: Machine) {
        let id = machine.id;
        let existed = self.rows.write().insert(id, machine).is_some();
        let event = if existed {
            ChangeEvent::updated(Table::Machines, id)
        } else {
            ChangeEvent::inserted(Table::Machines, id)
        };
        self.notify(event);
    }

    /// Deletes a row, returning it if present.
    pub fn delete(&self, id: MachineId) -> Option<Machine> {
        let removed = self.rows.write().remove(&id);
        if removed.is_some() {
            self.notify(ChangeEvent::deleted(Table::Machines, id));
        }
        removed
    }

    pub fn get(&self, id: MachineId) -> Option<Machine> {
        self.rows.read().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Makes every position update for `id` fail with `Rejected`.
    pub fn fail_updates_for(&self, id: MachineId) {
        self.failing.write().insert(id);
    }

    /// Clears all injected per-row failures.
    pub fn clear_failures(&self) {
        self.failing.write().clear();
    }

    /// Simulates the backend being unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of position updates attempted, including failed ones.
    pub fn position_writes(&self) -> usize {
        self.position_writes.load(Ordering::SeqCst)
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                reason: "backend offline".to_string(),
            });
        }
        Ok(())
    }

    fn notify(&self, event: ChangeEvent) {
        self.bus.publish(event);
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn fetch_page(&self, offset: usize, limit: usize) -> StoreResult<Vec<Machine>> {
        self.check_available()?;
        Ok(self
            .rows
            .read()
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn fetch_by_floor(&self, floor: Floor) -> StoreResult<Vec<Machine>> {
        self.check_available()?;
        Ok(self
            .rows
            .read()
            .values()
            .filter(|m| m.is_on(floor))
            .cloned()
            .collect())
    }

    async fn update_machine_position(&self, update: PositionUpdate) -> StoreResult<()> {
        self.position_writes.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        if self.failing.read().contains(&update.id) {
            return Err(StoreError::Rejected {
                id: update.id,
                reason: "write refused".to_string(),
            });
        }
        {
            let mut rows = self.rows.write();
            let row = rows
                .get_mut(&update.id)
                .ok_or(StoreError::NotFound { id: update.id })?;
            row.x = update.x;
            row.y = update.y;
        }
        self.notify(ChangeEvent::updated(Table::Machines, update.id));
        Ok(())
    }

    async fn bulk_update_status(
        &self,
        ids: &[MachineId],
        patch: &StatusPatch,
    ) -> StoreResult<usize> {
        self.check_available()?;
        if patch.is_empty() {
            return Err(StoreError::InvalidRequest {
                reason: "status patch is empty".to_string(),
            });
        }
        let mut touched = Vec::new();
        {
            let mut rows = self.rows.write();
            for id in ids {
                if let Some(row) = rows.get_mut(id) {
                    patch.apply_to(row);
                    touched.push(*id);
                }
            }
        }
        for id in &touched {
            self.notify(ChangeEvent::updated(Table::Machines, *id));
        }
        Ok(touched.len())
    }

    fn changes(&self) -> broadcast::Receiver<ChangeEvent> {
        self.bus.receiver()
    }
}
