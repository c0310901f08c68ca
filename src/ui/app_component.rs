//! Root component wiring the action bar, status line and log overlay

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{ActionBar, DebugOverlay, StatusBar};
use super::core::{Action, Component};
use super::layout::LayoutManager;
use crate::config::Config;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::menu::ActionSet;

pub struct AppComponent {
    action_bar: ActionBar,
    status_bar: StatusBar,
    logger: Logger,
    show_status_bar: bool,
    show_logs: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, set: ActionSet, logger: Logger) -> Self {
        let action_bar = ActionBar::new(
            set,
            config.layout.measure_options(),
            IconService::new(config.ui.icon_theme),
            config.layout.more_actions_title.clone(),
        );

        Self {
            action_bar,
            status_bar: StatusBar::new(),
            logger,
            show_status_bar: config.ui.show_status_bar,
            show_logs: false,
            should_quit: false,
        }
    }

    pub fn action_bar(&self) -> &ActionBar {
        &self.action_bar
    }

    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_showing_logs(&self) -> bool {
        self.show_logs
    }

    /// The bar still needs draws to finish measuring
    pub fn needs_layout_pass(&self) -> bool {
        self.action_bar.is_measuring()
    }

    fn render_body(&self, f: &mut Frame, area: Rect) {
        let measurer = self.action_bar.measurer();
        let partition = measurer.partition();
        let text = format!(
            "{} actions, {} groups\nAvailable width: {} columns\nInline: {}  Rolled up: {}\nPhase: {:?}",
            measurer.action_set().actions.len(),
            measurer.action_set().groups.len(),
            measurer.available_width(),
            partition.showable.len(),
            partition.rolled_up.len(),
            measurer.phase(),
        );

        let body = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(" Layout "))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        f.render_widget(body, area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        if self.show_logs {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('G') => Action::ToggleDebugLogs,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('G') => Action::ToggleDebugLogs,
            _ => self.action_bar.handle_key_events(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            Action::ToggleDebugLogs => {
                self.show_logs = !self.show_logs;
                Action::Render
            }
            Action::Invoke(menu_action) => {
                self.status_bar.show_invoked(&menu_action);
                Action::Render
            }
            Action::InvokeDisabled(label) => {
                self.status_bar.show_disabled(label);
                Action::Render
            }
            Action::FocusNext | Action::FocusPrevious => {
                self.status_bar.reset();
                self.action_bar.update(action)
            }
            Action::None | Action::Render => action,
            other => {
                // Follow-ups produced by the bar (activations) are handled here
                let follow_up = self.action_bar.update(other);
                match follow_up {
                    Action::Invoke(_) | Action::InvokeDisabled(_) => self.update(follow_up),
                    follow_up => follow_up,
                }
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::main_layout(rect, self.show_status_bar);

        self.render_body(f, layout.body);
        if self.show_status_bar {
            self.status_bar.render(f, layout.status);
        }
        // Drawn after the body so dropdowns stay on top
        self.action_bar.render(f, layout.action_bar);

        if self.show_logs {
            DebugOverlay::render(f, &self.logger, rect);
        }
    }
}
