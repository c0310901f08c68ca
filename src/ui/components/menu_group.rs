//! Dropdown listing a group's actions

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use super::action_bar::action_label;
use crate::icons::IconService;
use crate::menu::MenuAction;
use crate::overflow::{GroupKind, RenderedGroup};
use crate::ui::layout::LayoutManager;

/// Dropdown for an open group
pub struct MenuGroupPopup;

impl MenuGroupPopup {
    /// Entry text, with the disabled marker appended when needed
    fn entry_label(action: &MenuAction, icons: &IconService) -> String {
        if action.disabled {
            format!("{} {}", action_label(action), icons.disabled())
        } else {
            action_label(action)
        }
    }

    /// Columns and lines needed to show `group`
    pub fn dimensions(group: &RenderedGroup, icons: &IconService) -> (u16, u16) {
        let widest_action = group
            .actions
            .iter()
            .map(|action| Line::from(Self::entry_label(action, icons)).width())
            .max()
            .unwrap_or(0);
        let title_width = Line::from(group.title.as_str()).width();
        let details_width = group.details.as_deref().map_or(0, |d| Line::from(d).width());

        // marker + space on the left, border on both sides
        let content = widest_action.saturating_add(2).max(title_width).max(details_width);
        let width = u16::try_from(content + 2).unwrap_or(u16::MAX);
        let lines = group.actions.len() + usize::from(group.details.is_some()) + 2;
        let height = u16::try_from(lines).unwrap_or(u16::MAX);
        (width, height)
    }

    /// Render the dropdown under the trigger at `anchor_x`
    pub fn render(
        f: &mut Frame,
        group: &RenderedGroup,
        selected: usize,
        anchor_x: u16,
        below_y: u16,
        icons: &IconService,
    ) {
        let (width, height) = Self::dimensions(group, icons);
        let area = LayoutManager::dropdown_rect(anchor_x, below_y, width, height, f.area());
        if area.width == 0 || area.height == 0 {
            return;
        }

        f.render_widget(Clear, area);

        let border_color = match group.kind {
            GroupKind::Static => Color::Cyan,
            GroupKind::Rollup | GroupKind::DefaultRollup => Color::Yellow,
        };

        let mut items: Vec<ListItem> = group
            .actions
            .iter()
            .enumerate()
            .map(|(index, action)| {
                let marker = if index == selected { icons.selection() } else { " " };
                let mut style = if action.disabled {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                if index == selected {
                    style = style.add_modifier(Modifier::BOLD);
                }
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", marker)),
                    Span::styled(Self::entry_label(action, icons), style),
                ]))
            })
            .collect();

        if let Some(details) = &group.details {
            items.push(ListItem::new(Line::from(Span::styled(
                details.clone(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            ))));
        }

        let list = List::new(items).block(
            Block::default()
                .title(group.title.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

        f.render_widget(list, area);
    }
}
