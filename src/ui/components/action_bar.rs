//! Action bar component
//!
//! Lays out inline buttons followed by group triggers. Every newly mounted
//! item reports its width to the [`OverflowMeasurer`] during the first
//! draw, and each draw feeds the measurer a layout tick until it settles.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::menu_group::MenuGroupPopup;
use crate::constants::ACTION_BAR_TITLE;
use crate::icons::IconService;
use crate::menu::{ActionSet, Item, MenuAction};
use crate::overflow::{GroupMenuState, MeasureOptions, OverflowMeasurer, RenderedGroup};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

/// A visible slot of the bar
#[derive(Debug, Clone, PartialEq)]
pub enum BarEntry {
    Action(MenuAction),
    Group(RenderedGroup),
}

/// Responsive row of actions with a trailing rollup group
pub struct ActionBar {
    measurer: OverflowMeasurer,
    menu_state: GroupMenuState,
    icons: IconService,
    more_actions_title: String,
    focus: usize,
    menu_selection: usize,
}

/// Label of an inline action, icon first
pub fn action_label(action: &MenuAction) -> String {
    match &action.icon {
        Some(icon) => format!("{} {}", icon, action.content),
        None => action.content.clone(),
    }
}

fn group_label(title: &str, icon: Option<&str>, caret: &str) -> String {
    match icon {
        Some(icon) => format!("{} {} {}", icon, title, caret),
        None => format!("{} {}", title, caret),
    }
}

fn button_text(label: &str) -> String {
    format!("[ {} ]", label)
}

fn text_width(text: &str) -> u16 {
    u16::try_from(Line::from(text).width()).unwrap_or(u16::MAX)
}

/// Rendered width of an item's button, in columns
pub fn item_width(item: &Item, icons: &IconService) -> u16 {
    let label = match item {
        Item::Action(action) => action_label(action),
        Item::Group(group) => group_label(&group.title, group.icon.as_deref(), icons.disclosure()),
    };
    text_width(&button_text(&label))
}

impl ActionBar {
    pub fn new(set: ActionSet, options: MeasureOptions, icons: IconService, more_actions_title: String) -> Self {
        Self {
            measurer: OverflowMeasurer::new(set, options),
            menu_state: GroupMenuState::new(),
            icons,
            more_actions_title,
            focus: 0,
            menu_selection: 0,
        }
    }

    /// Swap the bar's actions, keeping the measured boundary when possible
    pub fn set_action_set(&mut self, set: ActionSet) {
        self.measurer.set_items(set);
        self.menu_state.close();
        self.clamp_focus();
    }

    pub fn measurer(&self) -> &OverflowMeasurer {
        &self.measurer
    }

    pub fn menu_state(&self) -> &GroupMenuState {
        &self.menu_state
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn menu_selection(&self) -> usize {
        self.menu_selection
    }

    /// Whether another draw can move the layout measurement forward
    pub fn is_measuring(&self) -> bool {
        self.measurer.needs_layout_pass()
    }

    /// Visible slots: inline actions, then the merged group list.
    ///
    /// A default rollup group is not reserved for during measurement and can
    /// be clipped by the bar border; it stays reachable through focus.
    pub fn entries(&self) -> Vec<BarEntry> {
        let partition = self.measurer.partition();

        let inline: Vec<MenuAction> = if partition.showable.is_empty() {
            // Nothing measured inline yet: show every action that did not overflow
            self.measurer
                .action_set()
                .actions
                .iter()
                .filter(|action| {
                    !partition
                        .rolled_up
                        .iter()
                        .any(|item| item.as_action().is_some_and(|rolled| rolled.content == action.content))
                })
                .cloned()
                .collect()
        } else {
            partition.showable.iter().filter_map(Item::as_action).cloned().collect()
        };

        inline
            .into_iter()
            .map(BarEntry::Action)
            .chain(
                self.measurer
                    .rendered_groups(&self.more_actions_title)
                    .into_iter()
                    .map(BarEntry::Group),
            )
            .collect()
    }

    /// The group whose dropdown is open
    pub fn open_group(&self) -> Option<RenderedGroup> {
        let active = self.menu_state.active()?;
        self.measurer
            .rendered_groups(&self.more_actions_title)
            .into_iter()
            .find(|group| group.title == active)
    }

    fn entry_label(&self, entry: &BarEntry) -> String {
        match entry {
            BarEntry::Action(action) => action_label(action),
            BarEntry::Group(group) => {
                let caret = if self.menu_state.is_open(&group.title) {
                    self.icons.disclosure_open()
                } else {
                    self.icons.disclosure()
                };
                group_label(&group.title, group.icon.as_deref(), caret)
            }
        }
    }

    fn separator(&self) -> String {
        " ".repeat(usize::from(self.measurer.options().spacing) * 2)
    }

    fn clamp_focus(&mut self) {
        let len = self.entries().len();
        if len == 0 {
            self.focus = 0;
        } else if self.focus >= len {
            self.focus = len - 1;
        }
    }

    fn report_widths(&mut self) {
        let pending = self.measurer.pending_width_reports();
        if pending.is_empty() {
            return;
        }

        let widths: Vec<u16> = self.measurer.items()[pending]
            .iter()
            .map(|item| item_width(item, &self.icons))
            .collect();
        for width in widths {
            self.measurer.register_width(width);
        }
    }

    fn activation_result(action: MenuAction) -> Action {
        if action.disabled {
            log::info!("Ignored disabled action '{}'", action.content);
            Action::InvokeDisabled(action.content)
        } else {
            log::info!("Invoking '{}'", action.command_or_content());
            Action::Invoke(action)
        }
    }
}

impl Component for ActionBar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.menu_state.active().is_some() {
            return match key.code {
                KeyCode::Esc => Action::CloseGroup,
                KeyCode::Down | KeyCode::Char('j') => Action::MenuNext,
                KeyCode::Up | KeyCode::Char('k') => Action::MenuPrevious,
                KeyCode::Enter | KeyCode::Char(' ') => Action::MenuActivate,
                KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Action::FocusPrevious,
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::FocusNext,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::FocusNext,
            KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::FocusNext | Action::FocusPrevious => {
                self.menu_state.close();
                let len = self.entries().len();
                if len > 0 {
                    self.focus = if action == Action::FocusNext {
                        (self.focus + 1) % len
                    } else {
                        (self.focus + len - 1) % len
                    };
                }
                Action::Render
            }
            Action::Activate => match self.entries().get(self.focus).cloned() {
                Some(BarEntry::Action(action)) => Self::activation_result(action),
                Some(BarEntry::Group(group)) if group.disabled => Action::InvokeDisabled(group.title),
                Some(BarEntry::Group(group)) => self.update(Action::ToggleGroup(group.title)),
                None => Action::None,
            },
            Action::ToggleGroup(title) => {
                self.menu_state.toggle(&title);
                self.menu_selection = 0;
                Action::Render
            }
            Action::CloseGroup => {
                self.menu_state.close();
                Action::Render
            }
            Action::MenuNext | Action::MenuPrevious => {
                if let Some(group) = self.open_group() {
                    let len = group.actions.len();
                    if len > 0 {
                        self.menu_selection = if action == Action::MenuNext {
                            (self.menu_selection + 1) % len
                        } else {
                            (self.menu_selection + len - 1) % len
                        };
                    }
                }
                Action::Render
            }
            Action::MenuActivate => {
                let selected = self
                    .open_group()
                    .and_then(|group| group.actions.get(self.menu_selection).cloned());
                self.menu_state.close();
                selected.map_or(Action::Render, Self::activation_result)
            }
            Action::ResizeSettled(width) => {
                let available = LayoutManager::action_bar_inner_width(width);
                if self.measurer.on_resize(available) {
                    self.menu_state.close();
                    self.clamp_focus();
                }
                Action::Render
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.report_widths();

        let inner = LayoutManager::action_bar_inner(rect);
        if self.measurer.layout_tick(inner.width) {
            self.clamp_focus();
        }

        let block = Block::default()
            .title(ACTION_BAR_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        f.render_widget(block, rect);

        let entries = self.entries();
        let separator = self.separator();
        let mut spans = Vec::with_capacity(entries.len() * 2);
        let mut offsets = Vec::with_capacity(entries.len());
        let mut x = inner.x;

        for (index, entry) in entries.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(separator.clone()));
                x = x.saturating_add(text_width(&separator));
            }

            let disabled = match entry {
                BarEntry::Action(action) => action.disabled,
                BarEntry::Group(group) => group.disabled,
            };
            let mut style = if disabled {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            if index == self.focus {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }

            let text = button_text(&self.entry_label(entry));
            offsets.push(x);
            x = x.saturating_add(text_width(&text));
            spans.push(Span::styled(text, style));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), inner);

        if let Some(active) = self.menu_state.active() {
            let open = entries.iter().zip(offsets).find_map(|(entry, offset)| match entry {
                BarEntry::Group(group) if group.title == active => Some((group, offset)),
                _ => None,
            });
            if let Some((group, anchor_x)) = open {
                let below_y = rect.y.saturating_add(rect.height);
                MenuGroupPopup::render(f, group, self.menu_selection, anchor_x, below_y, &self.icons);
            }
        }
    }
}
