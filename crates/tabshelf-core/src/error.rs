//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] tabshelf_storage::StorageError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] tabshelf_snapshot::SnapshotError),

    #[error("Session error: {0}")]
    Session(#[from] tabshelf_tabs::TabError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("A snapshot is already in progress")]
    SnapshotInProgress,
}
