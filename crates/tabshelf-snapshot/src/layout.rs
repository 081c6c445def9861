//! Naming and identity of snapshot-managed nodes

use serde::{Deserialize, Serialize};

/// Marker stored on every window folder a snapshot creates.
pub const WINDOW_MARKER: &str = "tabshelf:window";

/// Marker stored on the temporary folder used by [`SnapshotStrategy::Staged`].
pub const STAGING_MARKER: &str = "tabshelf:staging";

/// How the pruner recognises window folders from earlier runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PruneMatch {
    /// Only folders carrying a snapshot marker
    #[default]
    Marker,
    /// Marked folders plus any folder whose title starts with the window tag
    TitlePrefix,
}

/// Order of pruning and rebuilding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotStrategy {
    /// Prune old window folders, then build the new ones under the root
    #[default]
    InPlace,
    /// Build into a staging folder, then prune and move the new folders up
    Staged,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotLayout {
    /// Title of the persistent root folder
    pub root_title: String,
    /// Window folders are titled "<window_tag> <n>", n starting at 1
    pub window_tag: String,
    /// Untitled groups become "<group_fallback_prefix> <group id>"
    pub group_fallback_prefix: String,
    pub prune_match: PruneMatch,
}

impl SnapshotLayout {
    pub fn window_title(&self, window_index: usize) -> String {
        format!("{} {}", self.window_tag, window_index + 1)
    }

    pub fn staging_title(&self) -> String {
        format!("{} (staging)", self.window_tag)
    }
}

impl Default for SnapshotLayout {
    fn default() -> Self {
        Self {
            root_title: "Memory".to_string(),
            window_tag: "Window".to_string(),
            group_fallback_prefix: "Group".to_string(),
            prune_match: PruneMatch::Marker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_titles_are_one_based() {
        let layout = SnapshotLayout::default();
        assert_eq!(layout.window_title(0), "Window 1");
        assert_eq!(layout.window_title(9), "Window 10");
    }

    #[test]
    fn test_partial_layout_deserializes_with_defaults() {
        let layout: SnapshotLayout =
            serde_json::from_str(r#"{"window_tag": "Chrome Window", "prune_match": "title_prefix"}"#)
                .unwrap();
        assert_eq!(layout.root_title, "Memory");
        assert_eq!(layout.window_title(1), "Chrome Window 2");
        assert_eq!(layout.prune_match, PruneMatch::TitlePrefix);
    }
}
