//! Group list rendered after the inline actions.

use super::partition::Partition;
use crate::menu::{Item, MenuAction, MenuGroup};

/// How a rendered group came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// A caller group shown with its own actions
    Static,
    /// The caller's trailing group, carrying rolled-up actions first
    Rollup,
    /// Synthesized because overflow happened without any caller group
    DefaultRollup,
}

/// A group as handed to the dropdown renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGroup {
    pub title: String,
    pub actions: Vec<MenuAction>,
    pub icon: Option<String>,
    pub details: Option<String>,
    pub disabled: bool,
    pub kind: GroupKind,
}

impl RenderedGroup {
    fn from_group(group: &MenuGroup, actions: Vec<MenuAction>, kind: GroupKind) -> Self {
        Self {
            title: group.title.clone(),
            actions,
            icon: group.icon.clone(),
            details: group.details.clone(),
            disabled: group.disabled,
            kind,
        }
    }
}

/// Actions relocated by `partition`, with rolled-up groups flattened.
pub fn rolled_up_actions(partition: &Partition) -> Vec<MenuAction> {
    partition.rolled_up.iter().flat_map(Item::flatten).collect()
}

/// Build the final group list.
///
/// Caller groups that were rolled up disappear (their actions live in the
/// trailing group now). The trailing group is always kept and lists the
/// rolled-up actions before its own. Without caller groups, overflow goes
/// into a synthesized group titled `default_title`.
pub fn merge_groups(groups: &[MenuGroup], partition: &Partition, default_title: &str) -> Vec<RenderedGroup> {
    let rolled_up = rolled_up_actions(partition);
    let last_index = groups.len().checked_sub(1);
    let mut rendered = Vec::with_capacity(groups.len() + 1);

    for (index, group) in groups.iter().enumerate() {
        if Some(index) == last_index {
            let mut actions = rolled_up.clone();
            actions.extend(group.actions.iter().cloned());
            rendered.push(RenderedGroup::from_group(group, actions, GroupKind::Rollup));
            continue;
        }

        let was_rolled_up = partition
            .rolled_up
            .iter()
            .any(|item| item.as_group().is_some_and(|rolled| rolled.title == group.title));
        if !was_rolled_up {
            rendered.push(RenderedGroup::from_group(group, group.actions.clone(), GroupKind::Static));
        }
    }

    if groups.is_empty() && !rolled_up.is_empty() {
        rendered.push(RenderedGroup {
            title: default_title.to_string(),
            actions: rolled_up,
            icon: None,
            details: None,
            disabled: false,
            kind: GroupKind::DefaultRollup,
        });
    }

    rendered
}

/// Which dropdown is open, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMenuState {
    active: Option<String>,
}

impl GroupMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `title`, or close whichever dropdown is currently open
    pub fn toggle(&mut self, title: &str) {
        self.active = match self.active {
            Some(_) => None,
            None => Some(title.to_string()),
        };
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_open(&self, title: &str) -> bool {
        self.active.as_deref() == Some(title)
    }
}
