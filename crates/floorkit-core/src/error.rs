//! Error handling for Floorkit
//!
//! Provides error types for each layer of the application:
//! - Store errors (record fetch/update failures at the backend)
//! - Editor errors (operations the floor-map editor refuses)
//! - Export errors (CSV/PNG generation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::data::MachineId;

/// Record store error type
///
/// Represents failures reported by the backend that owns the `machines`
/// table. Store errors are cloneable so a batch report can hand the same
/// failure to both the log and the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No row with the given id exists
    #[error("Machine {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: MachineId,
    },

    /// The backend refused the write
    #[error("Update rejected for machine {id}: {reason}")]
    Rejected {
        /// The id whose update was refused.
        id: MachineId,
        /// The reason given by the backend.
        reason: String,
    },

    /// The request payload was invalid before it reached the backend
    #[error("Invalid request: {reason}")]
    InvalidRequest {
        /// Why the request was refused.
        reason: String,
    },

    /// The backend could not be reached
    #[error("Record store unavailable: {reason}")]
    Unavailable {
        /// A description of the transport failure.
        reason: String,
    },

    /// A spawned persistence task did not finish
    #[error("Persistence task failed: {reason}")]
    TaskFailed {
        /// The join failure reported by the runtime.
        reason: String,
    },
}

/// Editor error type
///
/// Operations on the floor-map editor that are refused outright. Store
/// failures never surface here; they are logged and reported per item.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// The operator's role cannot edit positions
    #[error("Role '{role}' cannot edit the floor map")]
    ReadOnlyRole {
        /// The role name.
        role: String,
    },

    /// The viewport has no usable area
    #[error("Invalid viewport size {width}x{height}")]
    InvalidViewport {
        /// The requested width in pixels.
        width: f64,
        /// The requested height in pixels.
        height: f64,
    },

    /// Unknown status kind string
    #[error("Unknown status kind: {value}")]
    UnknownStatusKind {
        /// The rejected input.
        value: String,
    },
}

/// Export error type
#[derive(Error, Debug)]
pub enum ExportError {
    /// The raster surface could not be allocated
    #[error("Cannot allocate a {width}x{height} image")]
    Surface {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// Writing the export file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main error type for Floorkit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Record store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Editor error
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a record store error
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }

    /// Check if this is an editor error
    pub fn is_editor_error(&self) -> bool {
        matches!(self, Error::Editor(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
