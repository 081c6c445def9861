//! Removal of window folders left by earlier runs

use futures_util::future::join_all;
use tabshelf_storage::{BookmarkStore, NodeId, StorageNode};

use crate::layout::{PruneMatch, SnapshotLayout, STAGING_MARKER, WINDOW_MARKER};
use crate::Result;

fn is_stale(child: &StorageNode, layout: &SnapshotLayout) -> bool {
    if !child.is_folder() {
        return false;
    }
    if child.has_marker(WINDOW_MARKER) || child.has_marker(STAGING_MARKER) {
        return true;
    }
    match layout.prune_match {
        PruneMatch::Marker => false,
        PruneMatch::TitlePrefix => child.title.starts_with(&layout.window_tag),
    }
}

/// Delete every stale window subtree directly under `root`, except `keep`.
///
/// Returns only after every deletion has been acknowledged, so callers can
/// start creating new window folders right away. If any deletion fails the
/// first error is returned once all of them have settled.
pub async fn prune_stale_windows(
    store: &dyn BookmarkStore,
    root: &StorageNode,
    layout: &SnapshotLayout,
    keep: Option<NodeId>,
) -> Result<usize> {
    let stale: Vec<StorageNode> = store
        .children(root.id)
        .await?
        .into_iter()
        .filter(|child| Some(child.id) != keep && is_stale(child, layout))
        .collect();

    let results = join_all(stale.iter().map(|folder| store.remove_tree(folder.id))).await;

    let mut pruned = 0;
    let mut first_error = None;
    for (folder, result) in stale.iter().zip(results) {
        match result {
            Ok(()) => {
                pruned += 1;
                tracing::debug!(folder_id = %folder.id, title = %folder.title, "Pruned stale window folder");
            }
            Err(e) => {
                tracing::error!(folder_id = %folder.id, error = %e, "Failed to prune window folder");
                first_error.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_error {
        return Err(e.into());
    }

    tracing::info!(root_id = %root.id, pruned, "Pruned stale window folders");
    Ok(pruned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabshelf_storage::{NewNode, SqliteBookmarkStore};

    async fn seeded() -> (SqliteBookmarkStore, StorageNode) {
        let store = SqliteBookmarkStore::open_in_memory().unwrap();
        let root = store.create(None, NewNode::folder("Memory")).await.unwrap();

        let w1 = store
            .create(Some(root.id), NewNode::folder("Window 1").with_marker(WINDOW_MARKER))
            .await
            .unwrap();
        store
            .create(Some(w1.id), NewNode::leaf("A", "http://a"))
            .await
            .unwrap();
        store
            .create(Some(root.id), NewNode::folder("Window notes"))
            .await
            .unwrap();
        store
            .create(Some(root.id), NewNode::folder("Reading"))
            .await
            .unwrap();
        store
            .create(Some(root.id), NewNode::leaf("Window cleaner", "http://shop"))
            .await
            .unwrap();
        store
            .create(Some(root.id), NewNode::folder("Window (staging)").with_marker(STAGING_MARKER))
            .await
            .unwrap();

        (store, root)
    }

    fn titles(nodes: &[StorageNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_marker_policy_spares_user_folders() {
        let (store, root) = seeded().await;

        let pruned = prune_stale_windows(&store, &root, &SnapshotLayout::default(), None)
            .await
            .unwrap();

        assert_eq!(pruned, 2);
        assert_eq!(
            titles(&store.children(root.id).await.unwrap()),
            vec!["Window notes", "Reading", "Window cleaner"]
        );
    }

    #[tokio::test]
    async fn test_title_prefix_policy_matches_folders_only() {
        let (store, root) = seeded().await;
        let layout = SnapshotLayout {
            prune_match: PruneMatch::TitlePrefix,
            ..SnapshotLayout::default()
        };

        let pruned = prune_stale_windows(&store, &root, &layout, None).await.unwrap();

        assert_eq!(pruned, 3);
        assert_eq!(
            titles(&store.children(root.id).await.unwrap()),
            vec!["Reading", "Window cleaner"]
        );
    }

    #[tokio::test]
    async fn test_keep_is_never_pruned() {
        let (store, root) = seeded().await;
        let staging = store
            .children(root.id)
            .await
            .unwrap()
            .into_iter()
            .find(|n| n.has_marker(STAGING_MARKER))
            .unwrap();

        let pruned = prune_stale_windows(&store, &root, &SnapshotLayout::default(), Some(staging.id))
            .await
            .unwrap();

        assert_eq!(pruned, 1);
        assert!(store.get(staging.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_nothing_to_prune() {
        let store = SqliteBookmarkStore::open_in_memory().unwrap();
        let root = store.create(None, NewNode::folder("Memory")).await.unwrap();

        let pruned = prune_stale_windows(&store, &root, &SnapshotLayout::default(), None)
            .await
            .unwrap();
        assert_eq!(pruned, 0);
    }
}
