//! Root folder lookup

use tabshelf_storage::{BookmarkStore, NewNode, StorageNode};

use crate::Result;

/// Find the snapshot root folder by title, creating it under the storage
/// root when missing. Safe to call on every run.
pub async fn resolve_root(store: &dyn BookmarkStore, root_title: &str) -> Result<StorageNode> {
    if let Some(existing) = store.search_folders(root_title).await?.into_iter().next() {
        tracing::debug!(root_id = %existing.id, title = %existing.title, "Reusing snapshot root");
        return Ok(existing);
    }

    let root = store.create(None, NewNode::folder(root_title)).await?;
    tracing::info!(root_id = %root.id, title = %root.title, "Created snapshot root");
    Ok(root)
}
