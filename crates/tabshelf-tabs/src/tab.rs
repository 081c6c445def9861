//! Session data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::TabError;
use crate::Result;

/// Host-assigned tab group identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub i64);

impl GroupId {
    /// Hosts report "no group" as -1
    pub const NONE: i64 = -1;
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn group_id_from_host<'de, D>(deserializer: D) -> std::result::Result<Option<GroupId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.filter(|id| *id != GroupId::NONE).map(GroupId))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub pinned: bool,
    #[serde(
        default,
        deserialize_with = "group_id_from_host",
        skip_serializing_if = "Option::is_none"
    )]
    pub group_id: Option<GroupId>,
}

impl Tab {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if url.is_empty() {
            return Err(TabError::EmptyUrl);
        }

        Ok(Self {
            title: title.into(),
            url,
            pinned: false,
            group_id: None,
        })
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn in_group(mut self, group_id: i64) -> Self {
        self.group_id = Some(GroupId(group_id));
        self
    }
}

/// One browser window. Identified only by its position in the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

impl Window {
    pub fn new(tabs: Vec<Tab>) -> Self {
        Self { tabs }
    }
}

/// All open windows at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub captured_at: DateTime<Utc>,
    pub windows: Vec<Window>,
}

impl Session {
    pub fn capture_now(windows: Vec<Window>) -> Self {
        Self {
            captured_at: Utc::now(),
            windows,
        }
    }

    pub fn tab_count(&self) -> usize {
        self.windows.iter().map(|w| w.tabs.len()).sum()
    }
}
