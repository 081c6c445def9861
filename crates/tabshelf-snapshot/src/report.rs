//! Outcome of a snapshot run

use serde::{Deserialize, Serialize};
use tabshelf_storage::NodeId;
use tabshelf_tabs::GroupId;

/// Non-fatal conditions recorded while building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The host has no tab groups; grouped tabs were saved as ungrouped
    /// from `window_index` onwards.
    GroupsUnavailable { window_index: usize },
    /// One group's metadata could not be fetched; its tabs were left out.
    GroupLookupFailed {
        window_index: usize,
        group_id: GroupId,
        reason: String,
        dropped_tabs: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupReport {
    pub group_id: GroupId,
    pub folder_id: NodeId,
    pub title: String,
    pub tabs: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowReport {
    pub folder_id: NodeId,
    pub title: String,
    pub pinned: usize,
    pub groups: Vec<GroupReport>,
    pub ungrouped: usize,
}

impl WindowReport {
    pub fn saved_tabs(&self) -> usize {
        self.pinned + self.ungrouped + self.groups.iter().map(|g| g.tabs).sum::<usize>()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotReport {
    pub run_id: String,
    pub root_id: NodeId,
    pub pruned: usize,
    pub windows: Vec<WindowReport>,
    pub diagnostics: Vec<Diagnostic>,
}

impl SnapshotReport {
    pub fn saved_tabs(&self) -> usize {
        self.windows.iter().map(WindowReport::saved_tabs).sum()
    }
}

/// Mutable state carried across the windows of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    honor_groups: bool,
    degrade_reported: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunState {
    pub fn new(groups_supported: bool) -> Self {
        Self {
            honor_groups: groups_supported,
            degrade_reported: false,
            diagnostics: Vec::new(),
        }
    }

    pub fn honor_groups(&self) -> bool {
        self.honor_groups
    }

    /// Stop honoring groups for the rest of the run. Reported once.
    pub fn degrade_groups(&mut self, window_index: usize) {
        self.honor_groups = false;
        if !self.degrade_reported {
            self.degrade_reported = true;
            tracing::warn!(window_index, "Tab groups are not available, saving grouped tabs as ungrouped");
            self.diagnostics
                .push(Diagnostic::GroupsUnavailable { window_index });
        }
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
