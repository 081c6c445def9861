//! tabshelf Storage Layer
//!
//! Hierarchical, ordered bookmark storage. Folders hold ordered children,
//! leaves carry a URL. The snapshot organizer only talks to the
//! [`BookmarkStore`] trait; [`SqliteBookmarkStore`] is the bundled backend.

mod database;
mod error;
mod migrations;
mod node;
mod sqlite;
mod store;

pub use database::Database;
pub use error::StorageError;
pub use node::{BookmarkTree, NewNode, NodeId, StorageNode};
pub use sqlite::SqliteBookmarkStore;
pub use store::BookmarkStore;

pub type Result<T> = std::result::Result<T, StorageError>;
