//! Loading the floor and reacting to remote changes.

use floorkit_core::{Floor, Table};
use tokio::sync::broadcast::error::TryRecvError;

use super::{FloorMapEditor, Gesture};

impl FloorMapEditor {
    /// Fetches every machine on the current floor into the working set.
    ///
    /// A failed fetch is logged and leaves the floor empty. Returns the
    /// number of machines loaded.
    pub async fn load(&mut self) -> usize {
        let floor = self.floor();
        match self.store.fetch_by_floor(floor).await {
            Ok(rows) => {
                tracing::info!("Loaded {} machine(s) on {}", rows.len(), floor);
                self.canvas.set_machines(rows);
            }
            Err(e) => {
                tracing::error!("Failed to load machines for {}: {}", floor, e);
                self.canvas.set_machines(Vec::new());
            }
        }
        let canvas = &self.canvas;
        self.selection.retain(|id| canvas.contains(id));
        self.refresh_highlight();
        self.canvas.len()
    }

    /// Drains pending change notifications and refetches the floor once if
    /// any concerned the machines table.
    ///
    /// The refetch overwrites the working set, including positions of a
    /// drag that has not been released yet. Returns true if it refetched.
    pub async fn sync_remote_changes(&mut self) -> bool {
        let mut refetch = false;
        loop {
            match self.changes.try_recv() {
                Ok(event) => {
                    if event.table == Table::Machines {
                        tracing::debug!("Remote change: {}", event.description());
                        refetch = true;
                    }
                }
                Err(TryRecvError::Lagged(missed)) => {
                    tracing::warn!("Missed {} change notification(s)", missed);
                    refetch = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        if refetch {
            self.load().await;
        }
        refetch
    }

    /// Moves the editor to another floor.
    ///
    /// Selection, gestures, pan, search, and history are discarded before
    /// the new floor is fetched.
    pub async fn switch_floor(&mut self, floor: Floor) -> usize {
        tracing::info!("Switching floor {} -> {}", self.floor(), floor);
        self.gesture = Gesture::Idle;
        self.selection.clear();
        self.history.clear();
        self.drag_readout = None;
        self.search_query.clear();
        self.highlighted = None;
        if let Some(viewport) = self.canvas.viewport_mut() {
            viewport.reset_pan();
        }
        self.canvas.set_floor(floor);
        self.changes = self.changes.resubscribe();
        self.load().await
    }
}
