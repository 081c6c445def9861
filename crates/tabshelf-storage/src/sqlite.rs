//! SQLite-backed [`BookmarkStore`]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row};

use crate::database::Database;
use crate::error::StorageError;
use crate::node::{BookmarkTree, NewNode, NodeId, StorageNode};
use crate::store::BookmarkStore;
use crate::Result;

const NODE_COLUMNS: &str = "id, parent_id, title, url, position, marker, date_added";

pub struct SqliteBookmarkStore {
    db: Database,
}

impl SqliteBookmarkStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }
}

impl Clone for SqliteBookmarkStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

fn node_from_row(row: &Row<'_>) -> rusqlite::Result<StorageNode> {
    let added_str: String = row.get(6)?;
    let date_added = DateTime::parse_from_rfc3339(&added_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());
    let position: i64 = row.get(4)?;

    Ok(StorageNode {
        id: NodeId(row.get(0)?),
        parent_id: row.get::<_, Option<i64>>(1)?.map(NodeId),
        title: row.get(2)?,
        url: row.get(3)?,
        index: usize::try_from(position).unwrap_or_default(),
        marker: row.get(5)?,
        date_added,
    })
}

fn find_node(conn: &Connection, id: NodeId) -> Result<Option<StorageNode>> {
    let node = conn
        .query_row(
            &format!("SELECT {NODE_COLUMNS} FROM bookmarks WHERE id = ?1"),
            [id.0],
            node_from_row,
        )
        .optional()?;
    Ok(node)
}

fn load_node(conn: &Connection, id: NodeId) -> Result<StorageNode> {
    find_node(conn, id)?.ok_or(StorageError::NotFound(id))
}

fn load_folder(conn: &Connection, id: NodeId) -> Result<StorageNode> {
    let node = load_node(conn, id)?;
    if !node.is_folder() {
        return Err(StorageError::NotAFolder(id));
    }
    Ok(node)
}

fn load_children(conn: &Connection, id: NodeId) -> Result<Vec<StorageNode>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {NODE_COLUMNS} FROM bookmarks WHERE parent_id = ?1 ORDER BY position, id"
    ))?;
    let children = stmt
        .query_map([id.0], node_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(children)
}

fn sibling_count(conn: &Connection, parent: Option<NodeId>) -> Result<usize> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM bookmarks WHERE parent_id IS ?1",
        [parent.map(|p| p.0)],
        |row| row.get(0),
    )?;
    Ok(usize::try_from(count).unwrap_or_default())
}

/// Open a gap at `index` among the children of `parent`.
fn shift_up(conn: &Connection, parent: Option<NodeId>, index: usize) -> Result<()> {
    conn.execute(
        "UPDATE bookmarks SET position = position + 1 WHERE parent_id IS ?1 AND position >= ?2",
        rusqlite::params![parent.map(|p| p.0), index as i64],
    )?;
    Ok(())
}

/// Close the gap left at `index` among the children of `parent`.
fn shift_down(conn: &Connection, parent: Option<NodeId>, index: usize) -> Result<()> {
    conn.execute(
        "UPDATE bookmarks SET position = position - 1 WHERE parent_id IS ?1 AND position > ?2",
        rusqlite::params![parent.map(|p| p.0), index as i64],
    )?;
    Ok(())
}

fn load_tree(conn: &Connection, node: StorageNode) -> Result<BookmarkTree> {
    let children = if node.is_folder() {
        load_children(conn, node.id)?
            .into_iter()
            .map(|child| load_tree(conn, child))
            .collect::<Result<Vec<_>>>()?
    } else {
        Vec::new()
    };
    Ok(BookmarkTree { node, children })
}

#[async_trait]
impl BookmarkStore for SqliteBookmarkStore {
    async fn search_folders(&self, title: &str) -> Result<Vec<StorageNode>> {
        let title = title.trim();
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {NODE_COLUMNS} FROM bookmarks
                 WHERE url IS NULL AND title = ?1
                 ORDER BY id"
            ))?;
            let nodes = stmt
                .query_map([title], node_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(nodes)
        })
    }

    async fn get(&self, id: NodeId) -> Result<StorageNode> {
        self.db.with_connection(|conn| load_node(conn, id))
    }

    async fn children(&self, id: NodeId) -> Result<Vec<StorageNode>> {
        self.db.with_connection(|conn| {
            load_node(conn, id)?;
            load_children(conn, id)
        })
    }

    async fn create(&self, parent: Option<NodeId>, node: NewNode) -> Result<StorageNode> {
        let created = self.db.transaction(|conn| {
            if let Some(parent_id) = parent {
                load_folder(conn, parent_id)?;
            }

            let count = sibling_count(conn, parent)?;
            let index = node.index.map_or(count, |i| i.min(count));
            shift_up(conn, parent, index)?;

            // Folder titles are stored trimmed so lookups can compare the column as is
            let title = match node.url {
                Some(_) => node.title.as_str(),
                None => node.title.trim(),
            };

            conn.execute(
                "INSERT INTO bookmarks (parent_id, title, url, position, marker, date_added)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    parent.map(|p| p.0),
                    title,
                    node.url,
                    index as i64,
                    node.marker,
                    Utc::now().to_rfc3339(),
                ],
            )?;

            load_node(conn, NodeId(conn.last_insert_rowid()))
        })?;

        tracing::trace!(
            node_id = %created.id,
            parent_id = ?created.parent_id,
            index = created.index,
            "Created bookmark node"
        );

        Ok(created)
    }

    async fn remove_tree(&self, id: NodeId) -> Result<()> {
        self.db.transaction(|conn| {
            let node = load_node(conn, id)?;
            // Descendants go with it via ON DELETE CASCADE
            conn.execute("DELETE FROM bookmarks WHERE id = ?1", [id.0])?;
            shift_down(conn, node.parent_id, node.index)?;
            Ok(())
        })?;

        tracing::trace!(node_id = %id, "Removed bookmark subtree");
        Ok(())
    }

    async fn move_node(&self, id: NodeId, parent: NodeId, index: usize) -> Result<StorageNode> {
        self.db.transaction(|conn| {
            let node = load_node(conn, id)?;
            load_folder(conn, parent)?;

            // Refuse to move a folder into itself or one of its descendants
            let mut cursor = Some(parent);
            while let Some(ancestor) = cursor {
                if ancestor == id {
                    return Err(StorageError::InvalidMove {
                        node: id,
                        target: parent,
                    });
                }
                cursor = load_node(conn, ancestor)?.parent_id;
            }

            // Detach from the old position first so the count below excludes it
            conn.execute(
                "UPDATE bookmarks SET position = -1 WHERE id = ?1",
                [id.0],
            )?;
            shift_down(conn, node.parent_id, node.index)?;

            let count = sibling_count(conn, Some(parent))?.saturating_sub(
                usize::from(node.parent_id == Some(parent)),
            );
            let index = index.min(count);
            shift_up(conn, Some(parent), index)?;

            conn.execute(
                "UPDATE bookmarks SET parent_id = ?1, position = ?2 WHERE id = ?3",
                rusqlite::params![parent.0, index as i64, id.0],
            )?;

            load_node(conn, id)
        })
    }

    async fn subtree(&self, id: NodeId) -> Result<BookmarkTree> {
        self.db.with_connection(|conn| {
            let node = load_node(conn, id)?;
            load_tree(conn, node)
        })
    }
}
