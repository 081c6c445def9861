//! Tab classification
//!
//! Every tab lands in exactly one bucket of its window:
//! ```text
//! pinned?  ── yes ──> Pinned
//!   │ no
//! grouped? ── yes ──> Grouped(id)   (only while groups are honored)
//!   │ no
//! Ungrouped
//! ```

use serde::{Deserialize, Serialize};

use crate::tab::{GroupId, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabPlacement {
    Pinned,
    Grouped(GroupId),
    Ungrouped,
}

impl TabPlacement {
    /// Pin status wins over group membership. With `honor_groups` off, grouped
    /// tabs fall through to `Ungrouped`.
    pub fn of(tab: &Tab, honor_groups: bool) -> Self {
        match (tab.pinned, tab.group_id) {
            (true, _) => TabPlacement::Pinned,
            (false, Some(id)) if honor_groups => TabPlacement::Grouped(id),
            _ => TabPlacement::Ungrouped,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabPlacement::Pinned => "pinned",
            TabPlacement::Grouped(_) => "grouped",
            TabPlacement::Ungrouped => "ungrouped",
        }
    }
}

impl std::fmt::Display for TabPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabPlacement::Grouped(id) => write!(f, "grouped({})", id),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_wins_over_group() {
        let tab = Tab::new("A", "http://a").unwrap().pinned().in_group(1);
        assert_eq!(TabPlacement::of(&tab, true), TabPlacement::Pinned);
        assert_eq!(TabPlacement::of(&tab, false), TabPlacement::Pinned);
    }

    #[test]
    fn test_grouped_only_when_honored() {
        let tab = Tab::new("B", "http://b").unwrap().in_group(2);
        assert_eq!(TabPlacement::of(&tab, true), TabPlacement::Grouped(GroupId(2)));
        assert_eq!(TabPlacement::of(&tab, false), TabPlacement::Ungrouped);
    }

    #[test]
    fn test_plain_tab_is_ungrouped() {
        let tab = Tab::new("C", "http://c").unwrap();
        assert_eq!(TabPlacement::of(&tab, true), TabPlacement::Ungrouped);
        assert_eq!(TabPlacement::Grouped(GroupId(5)).to_string(), "grouped(5)");
    }
}
