//! `tabshelf snapshot`

use anyhow::{Context, Result};
use std::path::Path;

use tabshelf_core::{
    Diagnostic, GroupDirectory, SessionFile, Shelf, SnapshotReport, StaticSession,
};

use super::CommandResult;

/// Read the export once so windows and group metadata come from the same capture.
fn load_session(path: &Path) -> Result<(StaticSession, Box<dyn GroupDirectory>)> {
    let export = SessionFile::new(path)
        .read()
        .with_context(|| format!("reading session export {}", path.display()))?;
    Ok((StaticSession::new(export.session()), export.group_directory()))
}

pub async fn run(shelf: &Shelf, session: &Path, json: bool) -> Result<()> {
    let (source, groups) = load_session(session)?;
    let outcome = shelf.take_snapshot(&source, groups.as_ref()).await;

    if json {
        let envelope = match &outcome {
            Ok(report) => CommandResult::ok(report),
            Err(e) => CommandResult::err(e.to_string()),
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    }

    let report = outcome?;
    if !json {
        print!("{}", summary(&report));
    }
    Ok(())
}

fn describe(diagnostic: &Diagnostic) -> String {
    match diagnostic {
        Diagnostic::GroupsUnavailable { window_index } => format!(
            "tab groups unavailable from window {}, grouped tabs saved as ungrouped",
            window_index + 1
        ),
        Diagnostic::GroupLookupFailed {
            window_index,
            group_id,
            reason,
            dropped_tabs,
        } => format!(
            "window {}: group {} skipped ({}), {} tab(s) not saved",
            window_index + 1,
            group_id,
            reason,
            dropped_tabs
        ),
    }
}

fn summary(report: &SnapshotReport) -> String {
    let mut out = format!(
        "Saved {} tab(s) from {} window(s), replaced {} old folder(s)\n",
        report.saved_tabs(),
        report.windows.len(),
        report.pruned
    );
    for window in &report.windows {
        out.push_str(&format!(
            "  {}: {} pinned, {} group(s), {} ungrouped\n",
            window.title,
            window.pinned,
            window.groups.len(),
            window.ungrouped
        ));
    }
    for diagnostic in &report.diagnostics {
        out.push_str(&format!("  warning: {}\n", describe(diagnostic)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabshelf_core::{GroupId, GroupReport, NodeId, WindowReport};

    #[test]
    fn test_summary() {
        let report = SnapshotReport {
            run_id: "run".to_string(),
            root_id: NodeId(1),
            pruned: 2,
            windows: vec![WindowReport {
                folder_id: NodeId(2),
                title: "Window 1".to_string(),
                pinned: 1,
                groups: vec![GroupReport {
                    group_id: GroupId(4),
                    folder_id: NodeId(3),
                    title: "Work".to_string(),
                    tabs: 2,
                }],
                ungrouped: 3,
            }],
            diagnostics: vec![Diagnostic::GroupLookupFailed {
                window_index: 0,
                group_id: GroupId(9),
                reason: "gone".to_string(),
                dropped_tabs: 1,
            }],
        };

        assert_eq!(
            summary(&report),
            "Saved 6 tab(s) from 1 window(s), replaced 2 old folder(s)\n  \
             Window 1: 1 pinned, 1 group(s), 3 ungrouped\n  \
             warning: window 1: group 9 skipped (gone), 1 tab(s) not saved\n"
        );
    }

    #[tokio::test]
    async fn test_run_against_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(
            &path,
            r#"{"windows": [{"tabs": [
                {"title": "A", "url": "http://a", "pinned": true},
                {"title": "B", "url": "http://b", "groupId": 1}
            ]}], "groups": [{"id": 1, "title": "Work"}]}"#,
        )
        .unwrap();

        let shelf = Shelf::in_memory(tabshelf_core::Config::new(dir.path().to_path_buf())).unwrap();
        run(&shelf, &path, true).await.unwrap();

        let tree = shelf.snapshot_tree().await.unwrap().unwrap();
        assert_eq!(tree.children[0].children[1].node.title, "Work");
    }

    #[tokio::test]
    async fn test_session_file_read_only_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(
            &path,
            r#"{"windows": [{"tabs": [
                {"title": "B", "url": "http://b", "groupId": 1}
            ]}], "groups": [{"id": 1, "title": "Work"}]}"#,
        )
        .unwrap();

        let (source, groups) = load_session(&path).unwrap();
        // Later changes to the file must not leak into this run
        std::fs::write(&path, r#"{"windows": []}"#).unwrap();

        let shelf = Shelf::in_memory(tabshelf_core::Config::new(dir.path().to_path_buf())).unwrap();
        let report = shelf.take_snapshot(&source, groups.as_ref()).await.unwrap();

        assert_eq!(report.windows.len(), 1);
        assert_eq!(report.windows[0].groups[0].title, "Work");
    }

    #[test]
    fn test_missing_session_file() {
        let err = load_session(Path::new("/definitely/not/here.json")).err().unwrap();
        assert!(err.to_string().contains("reading session export"));
    }
}
