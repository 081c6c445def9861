//! Session capture sources

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::group::{Group, GroupDirectory, GroupTable, NoGroups};
use crate::tab::{Session, Window};
use crate::Result;

/// Host capability enumerating every open window at call time.
#[async_trait]
pub trait SessionSource: Send + Sync {
    async fn capture(&self) -> Result<Session>;
}

/// A session that was captured ahead of time.
#[derive(Debug, Clone)]
pub struct StaticSession {
    session: Session,
}

impl StaticSession {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait]
impl SessionSource for StaticSession {
    async fn capture(&self) -> Result<Session> {
        Ok(self.session.clone())
    }
}

/// On-disk form of a captured session.
///
/// `groups` is absent when the exporting host had no tab-group support.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExport {
    #[serde(default)]
    pub captured_at: Option<chrono::DateTime<chrono::Utc>>,
    pub windows: Vec<Window>,
    #[serde(default)]
    pub groups: Option<Vec<Group>>,
}

impl SessionExport {
    pub fn session(&self) -> Session {
        match self.captured_at {
            Some(captured_at) => Session {
                captured_at,
                windows: self.windows.clone(),
            },
            None => Session::capture_now(self.windows.clone()),
        }
    }

    pub fn group_directory(&self) -> Box<dyn GroupDirectory> {
        match &self.groups {
            Some(groups) => Box::new(GroupTable::new(groups.iter().cloned())),
            None => Box::new(NoGroups),
        }
    }
}

/// A JSON session export read fresh on every capture.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn read(&self) -> Result<SessionExport> {
        let contents = std::fs::read_to_string(&self.path)?;
        let export: SessionExport = serde_json::from_str(&contents)?;

        tracing::debug!(
            path = %self.path.display(),
            windows = export.windows.len(),
            groups = export.groups.as_ref().map(Vec::len),
            "Read session export"
        );

        Ok(export)
    }
}

#[async_trait]
impl SessionSource for SessionFile {
    async fn capture(&self) -> Result<Session> {
        Ok(self.read()?.session())
    }
}
