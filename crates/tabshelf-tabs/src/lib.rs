//! tabshelf Tabs
//!
//! The captured browsing session: windows in order, each holding tabs that
//! are pinned, grouped or ungrouped. A capture is immutable; the organizer
//! reads it and never writes back.

mod buckets;
mod error;
mod group;
mod placement;
mod source;
mod tab;

pub use buckets::WindowBuckets;
pub use error::{GroupError, TabError};
pub use group::{Group, GroupDirectory, GroupTable, NoGroups};
pub use placement::TabPlacement;
pub use source::{SessionExport, SessionFile, SessionSource, StaticSession};
pub use tab::{GroupId, Session, Tab, Window};

pub type Result<T> = std::result::Result<T, TabError>;
