//! Category result list: headers with counts, lazily built expanded
//! bodies, and the per-category letter bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::catalog::Song;
use crate::i18n::{t, t_fmt1};
use crate::state::{AppState, CatalogStatus, Focus, LetterFilter};
use crate::theme::theme;
use crate::ui::helpers::{is_focused, pane_block};
use crate::util::truncate_to_width;

/// What: Render the category list pane, including every empty state.
///
/// Details:
/// - Message selection mirrors the site: no game yet -> "select a game";
///   loading -> spinner text; empty catalog -> "no songs available";
///   filters that match nothing -> "no songs found matching your
///   criteria".
pub fn draw(f: &mut Frame, app: &mut AppState, area: Rect) {
    let focused = is_focused(app, Focus::Categories);
    let block = pane_block(t(app, "results.title"), focused);

    let message_key = match app.catalog_status {
        CatalogStatus::Idle => Some("search.select_game"),
        CatalogStatus::Loading => Some("search.loading"),
        CatalogStatus::Empty => Some("search.no_songs_available"),
        CatalogStatus::Ready => match app.session.as_ref() {
            Some(s) if s.view().is_empty() && s.has_filters() => {
                Some("search.no_songs_criteria")
            }
            Some(s) if s.view().is_empty() => Some("search.no_songs_available"),
            Some(_) => None,
            None => Some("search.select_game"),
        },
    };
    if let Some(key) = message_key {
        let th = theme();
        let para = Paragraph::new(Line::from(Span::styled(
            t(app, key),
            Style::default().fg(th.overlay),
        )))
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(para, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let (items, selected_row) = build_rows(app, width);
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme().selection));
    let mut list_state = ListState::default();
    list_state.select(selected_row);
    f.render_stateful_widget(list, area, &mut list_state);
}

/// What: Flatten the session view into list rows.
///
/// Output:
/// - `(rows, selected_row)` where `selected_row` is the header row of the
///   category under the cursor.
///
/// Details:
/// - Collapsed categories contribute exactly one header row; their song
///   rows are never constructed, which is what bounds memory on large
///   catalogs.
fn build_rows(app: &AppState, width: usize) -> (Vec<ListItem<'static>>, Option<usize>) {
    let th = theme();
    let Some(session) = app.session.as_ref() else {
        return (Vec::new(), None);
    };
    let mut rows: Vec<ListItem> = Vec::new();
    let mut selected_row = None;
    for (idx, view) in session.view().iter().enumerate() {
        let expanded = session.is_expanded(&view.name);
        if idx == app.category_cursor {
            selected_row = Some(rows.len());
        }
        let chevron = if expanded { "▾" } else { "▸" };
        let header = Line::from(vec![
            Span::styled(
                format!("{chevron} {} ", view.name),
                Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({})", t_fmt1(app, "results.song_count", view.songs.len())),
                Style::default().fg(th.overlay),
            ),
        ]);
        rows.push(ListItem::new(header));
        if !expanded {
            continue;
        }
        rows.push(ListItem::new(letter_bar_line(session.letter(&view.name))));
        let letter_rows = session.letter_rows(&view.name);
        if letter_rows.is_empty() {
            rows.push(ListItem::new(Line::from(Span::styled(
                format!("    {}", t(app, "search.no_songs_letter")),
                Style::default().fg(th.overlay),
            ))));
            continue;
        }
        for song in letter_rows {
            rows.push(song_row(song, width));
        }
    }
    (rows, selected_row)
}

/// What: Render the `All A-Z #` bar with the active bucket highlighted.
fn letter_bar_line(active: LetterFilter) -> Line<'static> {
    let th = theme();
    let mut spans: Vec<Span> = vec![Span::raw("    ")];
    let mut bucket = LetterFilter::All;
    loop {
        let style = if bucket == active {
            Style::default()
                .fg(th.yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(th.overlay)
        };
        spans.push(Span::styled(bucket.label(), style));
        spans.push(Span::raw(" "));
        bucket = bucket.next();
        if bucket == LetterFilter::All {
            break;
        }
    }
    Line::from(spans)
}

/// What: Build the two-line row for one song.
fn song_row(song: &Song, width: usize) -> ListItem<'static> {
    let th = theme();
    let mut first = vec![Span::styled(
        format!("    {}", truncate_to_width(&song.display_title(), width)),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )];
    let artist = song.display_artist();
    if !artist.is_empty() {
        first.push(Span::styled(
            format!("  — {}", truncate_to_width(&artist, width / 2)),
            Style::default().fg(th.overlay),
        ));
    }
    let subtitle = song.display_subtitle();
    if !subtitle.is_empty() {
        first.push(Span::styled(
            format!("  ({})", truncate_to_width(&subtitle, width / 2)),
            Style::default().fg(th.overlay),
        ));
    }
    let mut lines = vec![Line::from(first)];
    for (label, text) in song.difficulty_lines() {
        let prefix = if label.is_empty() {
            "      ".to_string()
        } else {
            format!("      {label}: ")
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, Style::default().fg(th.green)),
            Span::styled(text, Style::default().fg(th.overlay)),
        ]));
    }
    ListItem::new(lines)
}
