//! Event Bus implementation.
//!
//! Each record store owns one `EventBus`; there is no process-wide instance.

use tokio::sync::broadcast;

use super::events::ChangeEvent;

/// Events buffered per receiver before it starts lagging.
pub const CHANNEL_CAPACITY: usize = 256;

/// Broadcasts row changes to every interested editor
pub struct EventBus {
    sender: broadcast::Sender<ChangeEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publish an event to all receivers
    ///
    /// Returns the number of receivers that will see the event; zero when
    /// nobody is listening.
    pub fn publish(&self, event: ChangeEvent) -> usize {
        tracing::trace!("Publishing {}", event.description());
        self.sender.send(event).unwrap_or(0)
    }

    /// Get a receiver for polling events from an async context
    pub fn receiver(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    /// Number of live receivers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("receivers", &self.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MachineId;
    use crate::event_bus::Table;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn test_publish_without_receivers() {
        let bus = EventBus::new();
        assert_eq!(bus.publish(ChangeEvent::updated(Table::Machines, MachineId(1))), 0);
    }

    #[tokio::test]
    async fn test_async_receiver() {
        let bus = EventBus::new();
        let mut receiver = bus.receiver();
        assert_eq!(bus.receiver_count(), 1);

        assert_eq!(bus.publish(ChangeEvent::updated(Table::Machines, MachineId(9))), 1);

        let received = receiver.try_recv().expect("event queued");
        assert_eq!(received.table, Table::Machines);
        assert_eq!(received.id, Some(MachineId(9)));
    }

    #[test]
    fn test_slow_receiver_lags() {
        let bus = EventBus::new();
        let mut receiver = bus.receiver();
        for id in 0..(CHANNEL_CAPACITY as u64 + 10) {
            bus.publish(ChangeEvent::inserted(Table::Machines, MachineId(id)));
        }
        assert!(matches!(receiver.try_recv(), Err(TryRecvError::Lagged(10))));
    }
}
