//! Action and group descriptors shown in the action bar.
//!
//! An [`ActionSet`] is the ordered input of the bar: plain actions first,
//! then named groups. Sets can be written by hand in TOML or JSON and loaded
//! with [`ActionSet::load_from_file`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single activatable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MenuAction {
    /// Visible label, also used as the action's identity
    pub content: String,
    /// Command dispatched when the action is activated
    pub command: Option<String>,
    /// Optional icon rendered before the label
    pub icon: Option<String>,
    pub disabled: bool,
    pub accessibility_label: Option<String>,
}

/// A named collection of actions rendered as one dropdown trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MenuGroup {
    /// Trigger label, also used as the group's identity
    pub title: String,
    pub actions: Vec<MenuAction>,
    pub icon: Option<String>,
    /// Extra text shown at the bottom of the open dropdown
    pub details: Option<String>,
    pub disabled: bool,
}

/// Either kind of entry, in bar order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Action(MenuAction),
    Group(MenuGroup),
}

/// Ordered input of the action bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ActionSet {
    pub actions: Vec<MenuAction>,
    pub groups: Vec<MenuGroup>,
}

impl MenuAction {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Command to dispatch, falling back to the label
    pub fn command_or_content(&self) -> &str {
        self.command.as_deref().unwrap_or(&self.content)
    }
}

impl MenuGroup {
    pub fn new(title: impl Into<String>, actions: Vec<MenuAction>) -> Self {
        Self {
            title: title.into(),
            actions,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Item {
    /// Label used for identity: content for actions, title for groups
    pub fn label(&self) -> &str {
        match self {
            Item::Action(action) => &action.content,
            Item::Group(group) => &group.title,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Item::Group(_))
    }

    pub fn as_action(&self) -> Option<&MenuAction> {
        match self {
            Item::Action(action) => Some(action),
            Item::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&MenuGroup> {
        match self {
            Item::Group(group) => Some(group),
            Item::Action(_) => None,
        }
    }

    /// Actions carried by this item: itself, or a group's children
    pub fn flatten(&self) -> Vec<MenuAction> {
        match self {
            Item::Action(action) => vec![action.clone()],
            Item::Group(group) => group.actions.clone(),
        }
    }

    /// Identity comparison: actions by content, groups by title
    pub fn same_identity(&self, other: &Item) -> bool {
        match (self, other) {
            (Item::Action(a), Item::Action(b)) => a.content == b.content,
            (Item::Group(a), Item::Group(b)) => a.title == b.title,
            _ => false,
        }
    }
}

impl From<MenuAction> for Item {
    fn from(action: MenuAction) -> Self {
        Item::Action(action)
    }
}

impl From<MenuGroup> for Item {
    fn from(group: MenuGroup) -> Self {
        Item::Group(group)
    }
}

impl ActionSet {
    pub fn new(actions: Vec<MenuAction>, groups: Vec<MenuGroup>) -> Self {
        Self { actions, groups }
    }

    /// All entries in measurement order: actions, then groups
    pub fn items(&self) -> Vec<Item> {
        self.actions
            .iter()
            .cloned()
            .map(Item::Action)
            .chain(self.groups.iter().cloned().map(Item::Group))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len() + self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load an action set from a `.toml` or `.json` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read action file: {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Failed to parse action file: {}", path.display())),
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse action file: {}", path.display())),
            other => anyhow::bail!(
                "Unsupported action file extension '{}' (expected .toml or .json)",
                other.unwrap_or("")
            ),
        }
    }

    /// Built-in set used when no action file is given
    pub fn demo() -> Self {
        Self::new(
            vec![
                MenuAction::new("Duplicate").with_command("duplicate").with_icon("⧉"),
                MenuAction::new("View on store").with_command("view"),
                MenuAction::new("Export").with_command("export"),
                MenuAction::new("Archive").with_command("archive").disabled(),
            ],
            vec![
                MenuGroup::new(
                    "Promote",
                    vec![
                        MenuAction::new("Share on social").with_command("share"),
                        MenuAction::new("Send newsletter").with_command("newsletter"),
                    ],
                ),
                MenuGroup::new(
                    "More actions",
                    vec![
                        MenuAction::new("Embed on a website").with_command("embed"),
                        MenuAction::new("Delete").with_command("delete"),
                    ],
                )
                .with_details("Deleted items stay in the trash for 30 days"),
            ],
        )
    }
}
