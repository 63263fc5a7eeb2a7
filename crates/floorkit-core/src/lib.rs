//! # Floorkit Core
//!
//! Core types, traits, and utilities for Floorkit.
//! Provides the machine data model, the record store contract the floor-map
//! editor persists through, and the change-notification bus that tells
//! editors when another client touched the `machines` table.

pub mod constants;
pub mod data;
pub mod error;
pub mod event_bus;
pub mod store;

pub use data::{
    Floor, Machine, MachineId, MachineStatus, PositionUpdate, PowerStatus, Rgb, Role,
    StatusKind, StatusPatch, TokenFill,
};

pub use error::{EditorError, Error, ExportError, Result, StoreError};

// Re-export event bus for convenience
pub use event_bus::{ChangeEvent, ChangeKind, EventBus, Table};

pub use store::{fetch_all, InMemoryStore, RecordStore, StoreResult};
