//! # Change Notification Bus
//!
//! Broadcast channel that tells editors a row of a backend table was
//! inserted, updated, or deleted.
//!
//! - Record stores publish a `ChangeEvent` after every successful mutation
//! - Editors hold a broadcast receiver and refetch their floor when a
//!   `machines` event arrives, or when they fell behind and missed events

mod bus;
mod events;

pub use bus::*;
pub use events::*;
