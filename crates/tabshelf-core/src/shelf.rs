//! Main shelf state container
//!
//! Owns the bookmark database and is the only place snapshots are triggered
//! from, so it also enforces that at most one snapshot runs at a time.

use std::sync::Arc;
use tokio::sync::Mutex;

use tabshelf_snapshot::{SnapshotOrganizer, SnapshotReport};
use tabshelf_storage::{BookmarkStore, BookmarkTree, Database, SqliteBookmarkStore};
use tabshelf_tabs::{GroupDirectory, SessionSource};

use crate::config::Config;
use crate::error::CoreError;
use crate::export;
use crate::Result;

pub struct Shelf {
    config: Config,
    store: Arc<SqliteBookmarkStore>,
    organizer: Arc<SnapshotOrganizer>,
    /// Held for the duration of a snapshot run
    snapshot_gate: Arc<Mutex<()>>,
}

impl Shelf {
    /// Open the shelf database named in `config`.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Ok(Self::with_database(config, db))
    }

    /// A shelf backed by an in-memory database.
    pub fn in_memory(config: Config) -> Result<Self> {
        config.validate()?;
        let db = Database::open_in_memory()?;
        Ok(Self::with_database(config, db))
    }

    fn with_database(config: Config, db: Database) -> Self {
        let store = Arc::new(SqliteBookmarkStore::new(db));
        let organizer = SnapshotOrganizer::new(store.clone(), config.layout.clone())
            .with_strategy(config.strategy);

        Self {
            config,
            store,
            organizer: Arc::new(organizer),
            snapshot_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Capture the session and replace the stored snapshot with it.
    ///
    /// Fails with [`CoreError::SnapshotInProgress`] instead of waiting when
    /// another snapshot is still running.
    pub async fn take_snapshot(
        &self,
        source: &dyn SessionSource,
        groups: &dyn GroupDirectory,
    ) -> Result<SnapshotReport> {
        let _guard = self.snapshot_gate.try_lock().map_err(|_| {
            tracing::warn!("Snapshot requested while another one is running");
            CoreError::SnapshotInProgress
        })?;

        let session = source.capture().await?;
        let report = self.organizer.take_snapshot(&session, groups).await?;

        for diagnostic in &report.diagnostics {
            tracing::debug!(?diagnostic, "Snapshot diagnostic");
        }

        Ok(report)
    }

    /// The snapshot root and everything under it, if a snapshot was ever taken.
    pub async fn snapshot_tree(&self) -> Result<Option<BookmarkTree>> {
        let root = self
            .store
            .search_folders(&self.config.layout.root_title)
            .await?
            .into_iter()
            .next();

        match root {
            Some(root) => Ok(Some(self.store.subtree(root.id).await?)),
            None => Ok(None),
        }
    }

    /// Netscape bookmark HTML of the snapshot root.
    pub async fn export_html(&self) -> Result<String> {
        let tree = self.snapshot_tree().await?.ok_or_else(|| {
            CoreError::Config(format!(
                "No snapshot root named \"{}\" yet",
                self.config.layout.root_title
            ))
        })?;

        tracing::debug!(nodes = tree.node_count(), "Exporting snapshot");
        Ok(export::export_bookmarks_html(&tree))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Clone for Shelf {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            store: Arc::clone(&self.store),
            organizer: Arc::clone(&self.organizer),
            snapshot_gate: Arc::clone(&self.snapshot_gate),
        }
    }
}
