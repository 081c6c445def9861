//! Single-pass bucketing of a window's tabs

use std::collections::HashMap;

use crate::placement::TabPlacement;
use crate::tab::{GroupId, Tab, Window};

/// A window's tabs split into pinned, per-group and ungrouped lists.
///
/// Each list keeps the original tab order; `groups` is ordered by the first
/// occurrence of each group id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowBuckets<'a> {
    pub pinned: Vec<&'a Tab>,
    pub groups: Vec<(GroupId, Vec<&'a Tab>)>,
    pub ungrouped: Vec<&'a Tab>,
}

impl<'a> WindowBuckets<'a> {
    pub fn classify(window: &'a Window, honor_groups: bool) -> Self {
        let mut buckets = Self::default();
        let mut group_slots: HashMap<GroupId, usize> = HashMap::new();

        for tab in &window.tabs {
            match TabPlacement::of(tab, honor_groups) {
                TabPlacement::Pinned => buckets.pinned.push(tab),
                TabPlacement::Grouped(id) => {
                    let slot = *group_slots.entry(id).or_insert_with(|| {
                        buckets.groups.push((id, Vec::new()));
                        buckets.groups.len() - 1
                    });
                    buckets.groups[slot].1.push(tab);
                }
                TabPlacement::Ungrouped => buckets.ungrouped.push(tab),
            }
        }

        buckets
    }

    pub fn group_ids(&self) -> Vec<GroupId> {
        self.groups.iter().map(|(id, _)| *id).collect()
    }

    pub fn tab_count(&self) -> usize {
        self.pinned.len()
            + self.ungrouped.len()
            + self.groups.iter().map(|(_, tabs)| tabs.len()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(tabs: &[&Tab]) -> Vec<String> {
        tabs.iter().map(|t| t.title.clone()).collect()
    }

    fn window() -> Window {
        Window::new(vec![
            Tab::new("p1", "http://p1").unwrap().pinned(),
            Tab::new("x1", "http://x1").unwrap().in_group(9),
            Tab::new("u1", "http://u1").unwrap(),
            Tab::new("y1", "http://y1").unwrap().in_group(3),
            Tab::new("p2", "http://p2").unwrap().pinned().in_group(3),
            Tab::new("x2", "http://x2").unwrap().in_group(9),
            Tab::new("u2", "http://u2").unwrap(),
        ])
    }

    #[test]
    fn test_classify_preserves_order_within_buckets() {
        let window = window();
        let buckets = WindowBuckets::classify(&window, true);

        assert_eq!(titles(&buckets.pinned), vec!["p1", "p2"]);
        assert_eq!(buckets.group_ids(), vec![GroupId(9), GroupId(3)]);
        assert_eq!(titles(&buckets.groups[0].1), vec!["x1", "x2"]);
        assert_eq!(titles(&buckets.groups[1].1), vec!["y1"]);
        assert_eq!(titles(&buckets.ungrouped), vec!["u1", "u2"]);
    }

    #[test]
    fn test_every_tab_in_exactly_one_bucket() {
        let window = window();
        for honor in [true, false] {
            let buckets = WindowBuckets::classify(&window, honor);
            assert_eq!(buckets.tab_count(), window.tabs.len());
        }
    }

    #[test]
    fn test_without_groups_grouped_tabs_join_ungrouped_in_order() {
        let window = window();
        let buckets = WindowBuckets::classify(&window, false);

        assert!(buckets.groups.is_empty());
        assert_eq!(titles(&buckets.pinned), vec!["p1", "p2"]);
        assert_eq!(titles(&buckets.ungrouped), vec!["x1", "u1", "y1", "x2", "u2"]);
    }

    #[test]
    fn test_empty_window() {
        let window = Window::default();
        let buckets = WindowBuckets::classify(&window, true);
        assert_eq!(buckets, WindowBuckets::default());
    }
}
