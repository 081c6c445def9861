//! tabshelf Snapshot Organizer
//!
//! Turns a captured session into a bookmark hierarchy:
//! ```text
//! <root>
//!   Window 1
//!     pinned leaves...
//!     <group folder>  (one per group, first-occurrence order)
//!       grouped leaves...
//!     ungrouped leaves...
//!   Window 2
//!   ...
//! ```
//! Each run replaces every window folder left by earlier runs.

mod builder;
mod error;
mod groups;
mod layout;
mod organizer;
mod prune;
mod report;
mod root;

pub use builder::build_window_subtree;
pub use error::SnapshotError;
pub use groups::{group_folder_title, resolve_group_title};
pub use layout::{PruneMatch, SnapshotLayout, SnapshotStrategy, STAGING_MARKER, WINDOW_MARKER};
pub use organizer::SnapshotOrganizer;
pub use prune::prune_stale_windows;
pub use report::{Diagnostic, GroupReport, RunState, SnapshotReport, WindowReport};
pub use root::resolve_root;

pub type Result<T> = std::result::Result<T, SnapshotError>;

#[cfg(test)]
pub(crate) mod testing;
