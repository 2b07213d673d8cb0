//! Shared rendering helpers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// What: A bordered block whose border color reflects focus.
///
/// Inputs:
/// - `title`: Localized block title
/// - `focused`: Whether the pane owns the keyboard
#[must_use]
pub fn pane_block(title: String, focused: bool) -> Block<'static> {
    let th = theme();
    let color = if focused { th.accent } else { th.overlay };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
}

/// What: Whether a Browse pane currently has focus.
#[must_use]
pub fn is_focused(app: &AppState, pane: Focus) -> bool {
    app.focus == pane
}

/// What: A centered rectangle of the given percentage size, for modals.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
