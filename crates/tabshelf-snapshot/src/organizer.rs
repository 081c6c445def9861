//! Snapshot orchestration
//!
//! resolve root → prune stale windows → build one subtree per window

use std::sync::Arc;

use tabshelf_storage::{BookmarkStore, NewNode, StorageNode};
use tabshelf_tabs::{GroupDirectory, Session};
use tracing::Instrument;
use uuid::Uuid;

use crate::builder::build_window_subtree;
use crate::layout::{SnapshotLayout, SnapshotStrategy, STAGING_MARKER};
use crate::prune::prune_stale_windows;
use crate::report::{RunState, SnapshotReport, WindowReport};
use crate::root::resolve_root;
use crate::Result;

/// Writes session snapshots into a bookmark store.
///
/// Runs are not coordinated with each other: the caller must make sure only
/// one snapshot per root is in flight at a time.
pub struct SnapshotOrganizer {
    store: Arc<dyn BookmarkStore>,
    layout: SnapshotLayout,
    strategy: SnapshotStrategy,
}

impl SnapshotOrganizer {
    pub fn new(store: Arc<dyn BookmarkStore>, layout: SnapshotLayout) -> Self {
        Self {
            store,
            layout,
            strategy: SnapshotStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: SnapshotStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the snapshot under the root with one built from `session`.
    pub async fn take_snapshot(
        &self,
        session: &Session,
        groups: &dyn GroupDirectory,
    ) -> Result<SnapshotReport> {
        let run_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!("snapshot", run_id = %run_id, strategy = ?self.strategy);
        self.run(run_id, session, groups).instrument(span).await
    }

    async fn run(
        &self,
        run_id: String,
        session: &Session,
        groups: &dyn GroupDirectory,
    ) -> Result<SnapshotReport> {
        tracing::info!(
            windows = session.windows.len(),
            tabs = session.tab_count(),
            captured_at = %session.captured_at,
            "Taking snapshot"
        );

        let root = resolve_root(self.store.as_ref(), &self.layout.root_title).await?;
        let mut state = RunState::new(groups.is_supported());

        let (pruned, windows) = match self.strategy {
            SnapshotStrategy::InPlace => {
                self.run_in_place(&root, session, groups, &mut state).await?
            }
            SnapshotStrategy::Staged => {
                self.run_staged(&root, session, groups, &mut state).await?
            }
        };

        let report = SnapshotReport {
            run_id,
            root_id: root.id,
            pruned,
            windows,
            diagnostics: state.diagnostics,
        };

        tracing::info!(
            root_id = %report.root_id,
            pruned = report.pruned,
            windows = report.windows.len(),
            saved_tabs = report.saved_tabs(),
            diagnostics = report.diagnostics.len(),
            "Snapshot complete"
        );

        Ok(report)
    }

    async fn build_windows(
        &self,
        parent: &StorageNode,
        session: &Session,
        groups: &dyn GroupDirectory,
        state: &mut RunState,
    ) -> Result<Vec<WindowReport>> {
        let mut windows = Vec::with_capacity(session.windows.len());
        for (index, window) in session.windows.iter().enumerate() {
            let report = build_window_subtree(
                self.store.as_ref(),
                parent,
                index,
                window,
                groups,
                &self.layout,
                state,
            )
            .await?;
            windows.push(report);
        }
        Ok(windows)
    }

    async fn run_in_place(
        &self,
        root: &StorageNode,
        session: &Session,
        groups: &dyn GroupDirectory,
        state: &mut RunState,
    ) -> Result<(usize, Vec<WindowReport>)> {
        let pruned = prune_stale_windows(self.store.as_ref(), root, &self.layout, None).await?;
        let windows = self.build_windows(root, session, groups, state).await?;
        Ok((pruned, windows))
    }

    /// Build everything under a staging folder first; the previous snapshot
    /// stays untouched until the new one is complete.
    async fn run_staged(
        &self,
        root: &StorageNode,
        session: &Session,
        groups: &dyn GroupDirectory,
        state: &mut RunState,
    ) -> Result<(usize, Vec<WindowReport>)> {
        let store = self.store.as_ref();
        let staging = store
            .create(
                Some(root.id),
                NewNode::folder(self.layout.staging_title()).with_marker(STAGING_MARKER),
            )
            .await?;

        let windows = match self.build_windows(&staging, session, groups, state).await {
            Ok(windows) => windows,
            Err(e) => {
                if let Err(cleanup) = store.remove_tree(staging.id).await {
                    tracing::error!(
                        staging_id = %staging.id,
                        error = %cleanup,
                        "Failed to remove staging folder after aborted build"
                    );
                }
                return Err(e);
            }
        };

        let pruned = prune_stale_windows(store, root, &self.layout, Some(staging.id)).await?;

        for window in &windows {
            store.move_node(window.folder_id, root.id, usize::MAX).await?;
        }
        store.remove_tree(staging.id).await?;

        Ok((pruned, windows))
    }
}
