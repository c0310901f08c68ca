//! Overlay listing the in-memory log lines

use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::logger::Logger;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::ui::layout::LayoutManager;

pub struct DebugOverlay;

impl DebugOverlay {
    /// Render the newest log lines over 80% of `area`
    pub fn render(frame: &mut Frame, logger: &Logger, area: Rect) {
        let modal_area = LayoutManager::centered_rect(80, 80, area);
        frame.render_widget(Clear, modal_area);

        let visible = usize::from(modal_area.height.saturating_sub(2));
        let items: Vec<ListItem> = logger
            .get_logs()
            .into_iter()
            .take(visible)
            .map(|line| {
                let color = if line.contains("WARN") || line.contains("ERROR") {
                    Color::Yellow
                } else {
                    Color::Gray
                };
                ListItem::new(line).style(Style::default().fg(color))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(DIALOG_TITLE_DEBUG_LOGS)
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::Black))
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(list, modal_area);
    }
}
