//! Declarative rendering: every frame is a pure function of [`AppState`].

mod browse;
mod categories;
mod contactview;
mod eventsview;
pub mod helpers;
mod modals;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::i18n::t;
use crate::state::{AppState, AppTab};
use crate::theme::theme;

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: ratatui frame
/// - `app`: Application state (list states need `&mut`)
///
/// Details:
/// - Tab bar on top, active tab below, at most one modal overlaid. Nothing
///   is cached between frames; collapsed category content simply is not
///   built.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(f.area());

    draw_tab_bar(f, app, chunks[0]);
    match app.tab {
        AppTab::Browse => browse::draw(f, app, chunks[1]),
        AppTab::Events => eventsview::draw(f, app, chunks[1]),
        AppTab::Contact => contactview::draw(f, app, chunks[1]),
    }
    modals::draw(f, app);
}

/// What: Render the top tab bar with the active tab highlighted.
fn draw_tab_bar(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let th = theme();
    let tabs = [
        (AppTab::Browse, t(app, "tabs.browse"), "F2"),
        (AppTab::Events, t(app, "tabs.events"), "F3"),
        (AppTab::Contact, t(app, "tabs.contact"), "F4"),
    ];
    let mut spans: Vec<Span> = vec![Span::styled(
        " Rising Flow ",
        Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
    )];
    for (tab, label, key) in tabs {
        let style = if app.tab == tab {
            Style::default().fg(th.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.overlay)
        };
        spans.push(Span::styled(format!(" {key}:{label} "), style));
    }
    spans.push(Span::styled(
        format!(" [{}] ", app.locale),
        Style::default().fg(th.yellow),
    ));
    f.render_widget(ratatui::widgets::Paragraph::new(Line::from(spans)), area);
}
