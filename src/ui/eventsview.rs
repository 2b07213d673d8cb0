//! Events tab: upcoming and past community events.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::i18n::{t, t_fmt1};
use crate::sources::events::EventRecord;
use crate::state::AppState;
use crate::theme::theme;
use crate::ui::helpers::pane_block;

/// What: Render the Events tab.
///
/// Details:
/// - One flat list: an "upcoming" section then a "past" section, each with
///   its own localized empty-state text when it has no entries.
pub fn draw(f: &mut Frame, app: &mut AppState, area: Rect) {
    let block = pane_block(t(app, "tabs.events"), true);
    if !app.events_loaded {
        let para = Paragraph::new(t(app, "events.loading"))
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(para, area);
        return;
    }

    let th = theme();
    let mut rows: Vec<ListItem> = Vec::new();
    let mut selectable_rows: Vec<usize> = Vec::new();

    rows.push(section_header(t(app, "events.upcoming")));
    if app.events.upcoming.is_empty() {
        rows.push(dim_row(t(app, "events.none_upcoming")));
    }
    for event in &app.events.upcoming {
        selectable_rows.push(rows.len());
        rows.push(event_row(app, event, true));
    }

    rows.push(section_header(t(app, "events.past")));
    if app.events.past.is_empty() {
        rows.push(dim_row(t(app, "events.none_past")));
    }
    for event in &app.events.past {
        selectable_rows.push(rows.len());
        rows.push(event_row(app, event, false));
    }

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().bg(th.selection));
    let mut state = ListState::default();
    state.select(selectable_rows.get(app.events_cursor).copied());
    f.render_stateful_widget(list, area, &mut state);
}

/// What: Bold section header row.
fn section_header(text: String) -> ListItem<'static> {
    let th = theme();
    ListItem::new(Line::from(Span::styled(
        text,
        Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
    )))
}

/// What: Dimmed single-line informational row.
fn dim_row(text: String) -> ListItem<'static> {
    let th = theme();
    ListItem::new(Line::from(Span::styled(
        format!("  {text}"),
        Style::default().fg(th.overlay),
    )))
}

/// What: Multi-line row for one event card.
fn event_row(app: &AppState, event: &EventRecord, upcoming: bool) -> ListItem<'static> {
    let th = theme();
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("  {} ", event.title),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} → {}", event.starting_date, event.ending_date),
            Style::default().fg(th.overlay),
        ),
    ])];
    if !event.location.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("    {}", event.location),
            Style::default().fg(th.overlay),
        )));
    }
    if !event.games.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("    {}", event.games.join(", ")),
            Style::default().fg(th.green),
        )));
    }
    if upcoming {
        if event.registration_required {
            lines.push(Line::from(Span::styled(
                format!("    {}", t(app, "events.registration_required")),
                Style::default().fg(th.yellow),
            )));
        }
    } else {
        if let Some(winner) = &event.winner {
            lines.push(Line::from(Span::styled(
                format!("    {}", t_fmt1(app, "events.winner", winner)),
                Style::default().fg(th.yellow),
            )));
        }
        if let Some(count) = event.participants_count {
            lines.push(Line::from(Span::styled(
                format!("    {}", t_fmt1(app, "events.participants", count)),
                Style::default().fg(th.overlay),
            )));
        }
    }
    ListItem::new(lines)
}
