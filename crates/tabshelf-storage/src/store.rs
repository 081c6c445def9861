//! Storage capability consumed by the snapshot organizer

use async_trait::async_trait;

use crate::node::{BookmarkTree, NewNode, NodeId, StorageNode};
use crate::Result;

/// Hierarchical, ordered bookmark storage.
///
/// Every mutation is an awaited step; callers sequence them explicitly when
/// order matters. Implementations must keep sibling positions contiguous
/// (`0..n`) after every create, remove and move.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Folders whose title matches `title` (surrounding whitespace ignored),
    /// oldest first.
    async fn search_folders(&self, title: &str) -> Result<Vec<StorageNode>>;

    async fn get(&self, id: NodeId) -> Result<StorageNode>;

    /// Direct children of a folder, in position order.
    async fn children(&self, id: NodeId) -> Result<Vec<StorageNode>>;

    /// Create a node under `parent`, or under the storage root when `None`.
    async fn create(&self, parent: Option<NodeId>, node: NewNode) -> Result<StorageNode>;

    /// Remove a node and all of its descendants.
    async fn remove_tree(&self, id: NodeId) -> Result<()>;

    /// Re-parent a node, placing it at `index` (clamped) among its new siblings.
    async fn move_node(&self, id: NodeId, parent: NodeId, index: usize) -> Result<StorageNode>;

    /// Load a node and its full descendant tree.
    async fn subtree(&self, id: NodeId) -> Result<BookmarkTree>;
}
