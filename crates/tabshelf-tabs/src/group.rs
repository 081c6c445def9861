//! Tab group metadata capability

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::GroupError;
use crate::tab::GroupId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    #[serde(default)]
    pub title: Option<String>,
}

impl Group {
    pub fn new(id: i64, title: Option<&str>) -> Self {
        Self {
            id: GroupId(id),
            title: title.map(str::to_string),
        }
    }
}

/// Optional host capability resolving group ids to their metadata.
#[async_trait]
pub trait GroupDirectory: Send + Sync {
    /// Whether the host supports tab groups at all.
    fn is_supported(&self) -> bool {
        true
    }

    async fn get_group(&self, id: GroupId) -> Result<Group, GroupError>;
}

/// A host without tab-group support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGroups;

#[async_trait]
impl GroupDirectory for NoGroups {
    fn is_supported(&self) -> bool {
        false
    }

    async fn get_group(&self, _id: GroupId) -> Result<Group, GroupError> {
        Err(GroupError::Unavailable)
    }
}

/// Group metadata captured alongside a session.
#[derive(Debug, Clone, Default)]
pub struct GroupTable {
    groups: HashMap<GroupId, Group>,
    failing: HashSet<GroupId>,
}

impl GroupTable {
    pub fn new(groups: impl IntoIterator<Item = Group>) -> Self {
        Self {
            groups: groups.into_iter().map(|g| (g.id, g)).collect(),
            failing: HashSet::new(),
        }
    }

    /// Make lookups of `id` fail the way a transient host error would.
    pub fn fail_lookup(mut self, id: i64) -> Self {
        self.failing.insert(GroupId(id));
        self
    }
}

#[async_trait]
impl GroupDirectory for GroupTable {
    async fn get_group(&self, id: GroupId) -> Result<Group, GroupError> {
        if self.failing.contains(&id) {
            return Err(GroupError::LookupFailed {
                id,
                reason: "host lookup failed".to_string(),
            });
        }

        self.groups
            .get(&id)
            .cloned()
            .ok_or_else(|| GroupError::LookupFailed {
                id,
                reason: "no group with this id".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_groups_is_unavailable() {
        assert!(!NoGroups.is_supported());
        assert_eq!(
            NoGroups.get_group(GroupId(1)).await,
            Err(GroupError::Unavailable)
        );
    }

    #[tokio::test]
    async fn test_group_table_lookup() {
        let table = GroupTable::new([Group::new(1, Some("Work")), Group::new(2, None)])
            .fail_lookup(2);
        assert!(table.is_supported());

        let work = table.get_group(GroupId(1)).await.unwrap();
        assert_eq!(work.title.as_deref(), Some("Work"));

        assert!(matches!(
            table.get_group(GroupId(2)).await,
            Err(GroupError::LookupFailed { id: GroupId(2), .. })
        ));
        assert!(matches!(
            table.get_group(GroupId(3)).await,
            Err(GroupError::LookupFailed { id: GroupId(3), .. })
        ));
    }
}
