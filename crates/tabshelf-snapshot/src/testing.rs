//! Test helpers shared by the snapshot modules

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tabshelf_storage::{
    BookmarkStore, BookmarkTree, NewNode, NodeId, SqliteBookmarkStore, StorageError, StorageNode,
};
use tabshelf_tabs::Tab;

pub fn tab(title: &str, url: &str) -> Tab {
    Tab::new(title, url).unwrap()
}

fn render(tree: &BookmarkTree, out: &mut String) {
    out.push_str(&tree.node.title);
    match &tree.node.url {
        Some(url) => {
            out.push('<');
            out.push_str(url);
            out.push('>');
        }
        None => {
            out.push('[');
            for (i, child) in tree.children.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render(child, out);
            }
            out.push(']');
        }
    }
}

/// Compact rendering: folders as `Title[children]`, leaves as `Title<url>`.
pub async fn shape_of(store: &dyn BookmarkStore, id: NodeId) -> String {
    let tree = store.subtree(id).await.unwrap();
    let mut out = String::new();
    render(&tree, &mut out);
    out
}

/// Store whose `create` starts failing after a fixed number of successes,
/// and whose `remove_tree` can be made to fail outright.
pub struct FailingStore {
    inner: SqliteBookmarkStore,
    creates_left: AtomicUsize,
    fail_removals: AtomicBool,
}

impl FailingStore {
    pub fn new(inner: SqliteBookmarkStore, successful_creates: usize) -> Self {
        Self {
            inner,
            creates_left: AtomicUsize::new(successful_creates),
            fail_removals: AtomicBool::new(false),
        }
    }

    pub fn with_failing_removals(self) -> Self {
        self.fail_removals.store(true, Ordering::SeqCst);
        self
    }
}

fn io_failure() -> StorageError {
    StorageError::Sqlite(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_IOERR),
        Some("disk I/O error".to_string()),
    ))
}

#[async_trait]
impl BookmarkStore for FailingStore {
    async fn search_folders(&self, title: &str) -> tabshelf_storage::Result<Vec<StorageNode>> {
        self.inner.search_folders(title).await
    }

    async fn get(&self, id: NodeId) -> tabshelf_storage::Result<StorageNode> {
        self.inner.get(id).await
    }

    async fn children(&self, id: NodeId) -> tabshelf_storage::Result<Vec<StorageNode>> {
        self.inner.children(id).await
    }

    async fn create(
        &self,
        parent: Option<NodeId>,
        node: NewNode,
    ) -> tabshelf_storage::Result<StorageNode> {
        let allowed = self
            .creates_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if !allowed {
            return Err(io_failure());
        }
        self.inner.create(parent, node).await
    }

    async fn remove_tree(&self, id: NodeId) -> tabshelf_storage::Result<()> {
        if self.fail_removals.load(Ordering::SeqCst) {
            return Err(io_failure());
        }
        self.inner.remove_tree(id).await
    }

    async fn move_node(
        &self,
        id: NodeId,
        parent: NodeId,
        index: usize,
    ) -> tabshelf_storage::Result<StorageNode> {
        self.inner.move_node(id, parent, index).await
    }

    async fn subtree(&self, id: NodeId) -> tabshelf_storage::Result<BookmarkTree> {
        self.inner.subtree(id).await
    }
}
