//! tabshelf Core
//!
//! Coordination layer: configuration, the [`Shelf`] that owns the bookmark
//! database and triggers snapshots, and bookmark export.

mod config;
mod error;
mod export;
mod shelf;

pub use config::Config;
pub use error::CoreError;
pub use export::{export_bookmarks_html, render_outline};
pub use shelf::Shelf;

// Re-export core components
pub use tabshelf_snapshot::{
    Diagnostic, GroupReport, PruneMatch, SnapshotError, SnapshotLayout, SnapshotOrganizer,
    SnapshotReport, SnapshotStrategy, WindowReport,
};
pub use tabshelf_storage::{
    BookmarkStore, BookmarkTree, Database, NodeId, SqliteBookmarkStore, StorageError, StorageNode,
};
pub use tabshelf_tabs::{
    Group, GroupDirectory, GroupError, GroupId, GroupTable, NoGroups, Session, SessionExport,
    SessionFile, SessionSource, StaticSession, Tab, TabError, Window,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
