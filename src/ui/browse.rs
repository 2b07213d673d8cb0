//! Browse tab: game selector, search box with tags, category results.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::i18n::t;
use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::ui::helpers::{is_focused, pane_block};

/// What: Render the whole Browse tab.
pub fn draw(f: &mut Frame, app: &mut AppState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(area);
    draw_games(f, app, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(1)])
        .split(columns[1]);
    draw_search_box(f, app, right[0]);
    draw_tag_row(f, app, right[1]);
    super::categories::draw(f, app, right[2]);
}

/// What: Render the game selector pane.
fn draw_games(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = is_focused(app, Focus::Games);
    let items: Vec<ListItem> = crate::games::GAMES
        .iter()
        .map(|g| ListItem::new(Line::from(g.name)))
        .collect();
    let list = List::new(items)
        .block(pane_block(t(app, "games.title"), focused))
        .highlight_style(
            Style::default()
                .bg(th.selection)
                .fg(th.text)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    app.games_state.select(Some(app.game_cursor));
    f.render_stateful_widget(list, area, &mut app.games_state);
}

/// What: Render the live search input.
fn draw_search_box(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = is_focused(app, Focus::Search);
    let query = app.session.as_ref().map(|s| s.query.as_str()).unwrap_or_default();
    let content = if query.is_empty() && !focused {
        Span::styled(t(app, "search.placeholder"), Style::default().fg(th.overlay))
    } else {
        Span::styled(query.to_string(), Style::default().fg(th.text))
    };
    let para = Paragraph::new(Line::from(content))
        .block(pane_block(t(app, "search.title"), focused));
    f.render_widget(para, area);
}

/// What: Render active filter tags as chips on one line.
fn draw_tag_row(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let Some(session) = app.session.as_ref() else {
        return;
    };
    if session.tags.is_empty() {
        return;
    }
    let mut spans: Vec<Span> = vec![Span::styled(
        format!("{}: ", t(app, "search.tags")),
        Style::default().fg(th.overlay),
    )];
    for tag in &session.tags {
        spans.push(Span::styled(
            format!("[{tag} ×] "),
            Style::default().fg(th.yellow),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
