//! Snapshot error types

use thiserror::Error;

/// Errors that abort a snapshot run.
///
/// Per-group failures never show up here; they are recorded as
/// [`Diagnostic`](crate::Diagnostic)s and the run continues.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Storage error: {0}")]
    Storage(#[from] tabshelf_storage::StorageError),

    #[error("Session capture error: {0}")]
    Capture(#[from] tabshelf_tabs::TabError),
}
