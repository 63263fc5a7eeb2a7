//! Record store contract
//!
//! The floor-map editor never talks to the backend directly. It reads and
//! repositions `machines` rows through a `RecordStore`, and learns about
//! other clients' edits through the store's change channel.

mod memory;

pub use memory::InMemoryStore;

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::data::{Floor, Machine, MachineId, PositionUpdate, StatusPatch};
use crate::error::StoreError;
use crate::event_bus::ChangeEvent;

/// Result type for record store calls.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Access to the `machines` table.
///
/// Every call is an independent request; implementations must not
/// serialize or queue overlapping calls on behalf of the caller.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns up to `limit` rows ordered by id ascending, skipping `offset`.
    async fn fetch_page(&self, offset: usize, limit: usize) -> StoreResult<Vec<Machine>>;

    /// Returns every machine whose floor equals `floor`.
    async fn fetch_by_floor(&self, floor: Floor) -> StoreResult<Vec<Machine>>;

    /// Writes exactly the position fields of one row.
    async fn update_machine_position(&self, update: PositionUpdate) -> StoreResult<()>;

    /// Applies `patch` to every listed row in one request.
    ///
    /// Returns the number of rows written.
    async fn bulk_update_status(&self, ids: &[MachineId], patch: &StatusPatch)
        -> StoreResult<usize>;

    /// Subscribes to insert/update/delete notifications.
    fn changes(&self) -> broadcast::Receiver<ChangeEvent>;
}

/// Fetches the whole table page by page.
///
/// Stops after the first page shorter than `batch_size`, which lets callers
/// read past a per-request row cap.
pub async fn fetch_all(store: &dyn RecordStore, batch_size: usize) -> StoreResult<Vec<Machine>> {
    if batch_size == 0 {
        return Err(StoreError::InvalidRequest {
            reason: "batch size must be > 0".to_string(),
        });
    }

    let mut all = Vec::new();
    let mut offset = 0;
    loop {
        let batch = store.fetch_page(offset, batch_size).await?;
        let len = batch.len();
        tracing::debug!("Fetched {} machines at offset {}", len, offset);
        all.extend(batch);
        offset += batch_size;
        if len < batch_size {
            break;
        }
    }
    Ok(all)
}
