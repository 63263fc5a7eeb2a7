use super::FloorMapEditor;
use crate::notifications::Notification;
use crate::persistence::{persist_positions, BatchReport};

impl FloorMapEditor {
    /// Restores the most recent snapshot and re-persists every entry in it.
    ///
    /// With an empty history this only queues an info notification.
    pub async fn undo(&mut self) -> Option<BatchReport> {
        let Some(snapshot) = self.history.pop() else {
            self.notify(Notification::info("Nothing to undo"));
            return None;
        };

        self.canvas.restore_positions(&snapshot.entries);
        tracing::info!(
            "Undoing to snapshot from {} ({} position(s))",
            snapshot.captured_at,
            snapshot.len()
        );
        let report = persist_positions(self.store.clone(), snapshot.entries).await;
        self.notify(Notification::success("Undo applied"));
        self.report_batch(&report);
        Some(report)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }
}
