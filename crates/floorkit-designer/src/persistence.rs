//! Concurrent best-effort persistence of position updates.
//!
//! Every update in a batch is dispatched at once and the batch completes
//! when all of them have settled. A failure is logged and reported for its
//! own machine only; siblings are neither rolled back nor cancelled.

use floorkit_core::{MachineId, PositionUpdate, RecordStore, StoreError};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Result of persisting one machine's position.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistOutcome {
    pub update: PositionUpdate,
    pub result: Result<(), StoreError>,
}

impl PersistOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-item results of a persistence batch, in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    outcomes: Vec<PersistOutcome>,
}

impl BatchReport {
    pub fn outcomes(&self) -> &[PersistOutcome] {
        &self.outcomes
    }

    /// Number of updates issued.
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &PersistOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    pub fn failed_ids(&self) -> Vec<MachineId> {
        self.failed().map(|o| o.update.id).collect()
    }

    pub fn is_complete_success(&self) -> bool {
        self.outcomes.iter().all(PersistOutcome::is_ok)
    }
}

/// Writes every update concurrently and waits for all of them.
pub async fn persist_positions(
    store: Arc<dyn RecordStore>,
    updates: Vec<PositionUpdate>,
) -> BatchReport {
    let mut outcomes: Vec<PersistOutcome> = updates
        .iter()
        .map(|update| PersistOutcome {
            update: *update,
            result: Err(StoreError::TaskFailed {
                reason: "update did not complete".to_string(),
            }),
        })
        .collect();

    let mut tasks = JoinSet::new();
    for (index, update) in updates.into_iter().enumerate() {
        let store = Arc::clone(&store);
        tasks.spawn(async move { (index, store.update_machine_position(update).await) });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => {
                if let Err(e) = &result {
                    tracing::error!(machine = %outcomes[index].update.id, "Position update failed: {}", e);
                }
                outcomes[index].result = result;
            }
            Err(e) => {
                tracing::error!("Position update task failed: {}", e);
            }
        }
    }

    let report = BatchReport { outcomes };
    tracing::debug!(
        "Persisted {}/{} position(s)",
        report.succeeded(),
        report.attempted()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorkit_core::{Floor, InMemoryStore, Machine};

    #[tokio::test]
    async fn test_empty_batch() {
        let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
        let report = persist_positions(store, Vec::new()).await;
        assert_eq!(report.attempted(), 0);
        assert!(report.is_complete_success());
    }

    #[tokio::test]
    async fn test_report_keeps_submission_order() {
        let store = Arc::new(InMemoryStore::with_rows(
            (1..=4).map(|id| Machine::new(id, Floor::CyberStudio, 0.0, 0.0)),
        ));
        store.fail_updates_for(MachineId(3));
        let updates: Vec<_> = [4, 3, 2, 1]
            .into_iter()
            .map(|id| PositionUpdate::new(id, 5.0, 5.0))
            .collect();

        let report = persist_positions(store.clone(), updates.clone()).await;

        let order: Vec<_> = report.outcomes().iter().map(|o| o.update).collect();
        assert_eq!(order, updates);
        assert_eq!(report.failed_ids(), vec![MachineId(3)]);
        assert_eq!(report.succeeded(), 3);
        assert_eq!(store.get(MachineId(1)).unwrap().x, 5.0);
        assert_eq!(store.get(MachineId(3)).unwrap().x, 0.0);
    }
}
