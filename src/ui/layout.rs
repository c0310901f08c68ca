//! Layout management and calculations

use crate::constants::ACTION_BAR_PADDING;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the bordered action bar
pub const ACTION_BAR_HEIGHT: u16 = 3;

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub action_bar: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Action bar on top, body in the middle, optional status line at the bottom
    #[must_use]
    pub fn main_layout(area: Rect, show_status: bool) -> MainLayout {
        let status_height = u16::from(show_status);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(ACTION_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(status_height),
            ])
            .split(area);

        MainLayout {
            action_bar: chunks[0],
            body: chunks[1],
            status: chunks[2],
        }
    }

    /// Width available to buttons inside a bar of `bar_width` columns
    #[must_use]
    pub fn action_bar_inner_width(bar_width: u16) -> u16 {
        bar_width.saturating_sub(2 + 2 * ACTION_BAR_PADDING)
    }

    /// Button row inside the bar's border and padding
    #[must_use]
    pub fn action_bar_inner(bar: Rect) -> Rect {
        Rect {
            x: bar.x.saturating_add(1 + ACTION_BAR_PADDING),
            y: bar.y.saturating_add(1),
            width: Self::action_bar_inner_width(bar.width),
            height: bar.height.saturating_sub(2).min(1),
        }
    }

    /// Dropdown placed under a trigger starting at column `anchor_x`,
    /// shifted left and clipped so it stays inside `screen`
    #[must_use]
    pub fn dropdown_rect(anchor_x: u16, below_y: u16, width: u16, height: u16, screen: Rect) -> Rect {
        let width = width.min(screen.width);
        let max_x = screen.x + screen.width - width;
        let x = anchor_x.clamp(screen.x, max_x);
        let y = below_y.min(screen.y + screen.height);
        let height = height.min(screen.y + screen.height - y);

        Rect { x, y, width, height }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
