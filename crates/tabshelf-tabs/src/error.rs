//! Tab and group error types

use thiserror::Error;

use crate::tab::GroupId;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab URL cannot be empty")]
    EmptyUrl,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of the optional group metadata capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// The host has no tab-group support at all
    #[error("Tab groups are not available")]
    Unavailable,

    #[error("Failed to retrieve group {id}: {reason}")]
    LookupFailed { id: GroupId, reason: String },
}
