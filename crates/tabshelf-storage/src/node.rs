//! Bookmark node types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node in the bookmark tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub i64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored bookmark or folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageNode {
    pub id: NodeId,
    /// `None` for nodes directly under the storage root
    pub parent_id: Option<NodeId>,
    pub title: String,
    /// Present on leaves only
    pub url: Option<String>,
    /// Position among siblings, 0-based
    pub index: usize,
    /// Tag identifying nodes owned by a tool rather than the user
    pub marker: Option<String>,
    pub date_added: DateTime<Utc>,
}

impl StorageNode {
    pub fn is_folder(&self) -> bool {
        self.url.is_none()
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.marker.as_deref() == Some(marker)
    }
}

/// Creation request for a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNode {
    pub title: String,
    pub url: Option<String>,
    pub marker: Option<String>,
    /// Explicit sibling position; appended when `None`
    pub index: Option<usize>,
}

impl NewNode {
    pub fn folder(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn leaf(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// A node together with all of its descendants, children in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkTree {
    pub node: StorageNode,
    pub children: Vec<BookmarkTree>,
}

impl BookmarkTree {
    /// Total node count including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(BookmarkTree::node_count)
            .sum::<usize>()
    }
}
