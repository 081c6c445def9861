//! Storage error types

use thiserror::Error;

use crate::node::NodeId;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Bookmark node not found: {0}")]
    NotFound(NodeId),

    #[error("Bookmark node {0} is not a folder")]
    NotAFolder(NodeId),

    #[error("Cannot move node {node} into {target}")]
    InvalidMove { node: NodeId, target: NodeId },
}
