//! Per-window subtree construction

use futures_util::future::join_all;
use tabshelf_storage::{BookmarkStore, NewNode, NodeId, StorageNode};
use tabshelf_tabs::{GroupDirectory, GroupError, GroupId, Tab, Window, WindowBuckets};

use crate::groups::resolve_group_title;
use crate::layout::{SnapshotLayout, WINDOW_MARKER};
use crate::report::{Diagnostic, GroupReport, RunState, WindowReport};
use crate::Result;

/// Create leaves for `tabs` under `parent`, starting at `position`.
/// Returns the next free position.
async fn emit_leaves(
    store: &dyn BookmarkStore,
    parent: NodeId,
    tabs: &[&Tab],
    mut position: usize,
) -> Result<usize> {
    for tab in tabs {
        store
            .create(
                Some(parent),
                NewNode::leaf(tab.title.as_str(), tab.url.as_str()).at(position),
            )
            .await?;
        position += 1;
    }
    Ok(position)
}

/// Build the folder for one window under `parent`.
///
/// Child order is pinned leaves, group folders in first-occurrence order,
/// then ungrouped leaves. Group titles are resolved concurrently before any
/// group folder is created.
pub async fn build_window_subtree(
    store: &dyn BookmarkStore,
    parent: &StorageNode,
    window_index: usize,
    window: &Window,
    groups: &dyn GroupDirectory,
    layout: &SnapshotLayout,
    state: &mut RunState,
) -> Result<WindowReport> {
    let title = layout.window_title(window_index);
    let folder = store
        .create(
            Some(parent.id),
            NewNode::folder(title.as_str()).with_marker(WINDOW_MARKER),
        )
        .await?;

    let has_grouped_tabs = window.tabs.iter().any(|t| !t.pinned && t.group_id.is_some());
    if has_grouped_tabs && !state.honor_groups() {
        state.degrade_groups(window_index);
    }

    let mut buckets = WindowBuckets::classify(window, state.honor_groups());

    let mut titles: Vec<std::result::Result<String, GroupError>> = join_all(
        buckets
            .groups
            .iter()
            .map(|(id, _)| resolve_group_title(groups, *id, &layout.group_fallback_prefix)),
    )
    .await;

    if titles
        .iter()
        .any(|t| matches!(t, Err(GroupError::Unavailable)))
    {
        state.degrade_groups(window_index);
        buckets = WindowBuckets::classify(window, false);
        titles.clear();
    }

    let mut position = emit_leaves(store, folder.id, &buckets.pinned, 0).await?;

    let mut group_reports = Vec::new();
    for ((group_id, tabs), resolved) in buckets.groups.iter().zip(titles) {
        let group_title = match resolved {
            Ok(group_title) => group_title,
            Err(e) => {
                skip_group(state, window_index, *group_id, tabs.len(), e);
                continue;
            }
        };

        let group_folder = store
            .create(
                Some(folder.id),
                NewNode::folder(group_title.as_str()).at(position),
            )
            .await?;
        position += 1;
        emit_leaves(store, group_folder.id, tabs, 0).await?;

        group_reports.push(GroupReport {
            group_id: *group_id,
            folder_id: group_folder.id,
            title: group_title,
            tabs: tabs.len(),
        });
    }

    emit_leaves(store, folder.id, &buckets.ungrouped, position).await?;

    let report = WindowReport {
        folder_id: folder.id,
        title,
        pinned: buckets.pinned.len(),
        groups: group_reports,
        ungrouped: buckets.ungrouped.len(),
    };

    tracing::debug!(
        window_index,
        folder_id = %report.folder_id,
        pinned = report.pinned,
        groups = report.groups.len(),
        ungrouped = report.ungrouped,
        "Built window subtree"
    );

    Ok(report)
}

fn skip_group(
    state: &mut RunState,
    window_index: usize,
    group_id: GroupId,
    dropped_tabs: usize,
    error: GroupError,
) {
    tracing::error!(
        window_index,
        group_id = %group_id,
        dropped_tabs,
        error = %error,
        "Failed to retrieve group, skipping its tabs"
    );
    state.record(Diagnostic::GroupLookupFailed {
        window_index,
        group_id,
        reason: error.to_string(),
        dropped_tabs,
    });
}
