//! Browse-tab key handling: game selector, search box, category list.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, CatalogStatus, Focus, LoadInput};

/// What: Issue a catalog load for the game under the selector cursor.
///
/// Inputs:
/// - `app`: Application state; allocates the next load id
/// - `load_tx`: Loader request channel
///
/// Details:
/// - The monotonic id lets the result handler discard stale responses, so
///   a slow load can never clobber a newer selection. Prior session state
///   is dropped immediately.
pub fn request_game_load(app: &mut AppState, load_tx: &mpsc::UnboundedSender<LoadInput>) {
    let Some(game) = app.game_under_cursor() else {
        return;
    };
    let id = app.next_load_id;
    app.next_load_id += 1;
    app.latest_load_id = id;
    app.session = None;
    app.category_cursor = 0;
    app.catalog_status = CatalogStatus::Loading;
    tracing::info!(game, id, "catalog load requested");
    let _ = load_tx.send(LoadInput {
        id,
        game: game.to_string(),
    });
}

/// What: Handle one key on the Browse tab.
pub fn handle_key(key: KeyEvent, app: &mut AppState, load_tx: &mpsc::UnboundedSender<LoadInput>) {
    if key.code == KeyCode::Tab {
        app.focus = match app.focus {
            Focus::Games => Focus::Search,
            Focus::Search => Focus::Categories,
            Focus::Categories => Focus::Games,
        };
        return;
    }
    match app.focus {
        Focus::Games => games_key(key, app, load_tx),
        Focus::Search => search_key(key, app),
        Focus::Categories => categories_key(key, app),
    }
}

/// What: Game selector navigation and selection.
fn games_key(key: KeyEvent, app: &mut AppState, load_tx: &mpsc::UnboundedSender<LoadInput>) {
    let count = crate::games::GAMES.len();
    match key.code {
        KeyCode::Up => {
            app.game_cursor = app.game_cursor.saturating_sub(1);
            app.games_state.select(Some(app.game_cursor));
        }
        KeyCode::Down => {
            app.game_cursor = (app.game_cursor + 1).min(count.saturating_sub(1));
            app.games_state.select(Some(app.game_cursor));
        }
        KeyCode::Enter => request_game_load(app, load_tx),
        _ => {}
    }
}

/// What: Search box editing; every edit re-filters live.
///
/// Details:
/// - Enter promotes the query to a tag. Backspace on an empty box removes
///   the most recent tag. Ctrl+U clears everything, like the site's
///   "clear all filters" control.
fn search_key(key: KeyEvent, app: &mut AppState) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('u') {
            session.clear_filters();
            app.clamp_category_cursor();
        }
        return;
    }
    match key.code {
        KeyCode::Char(c) => {
            let mut q = session.query.clone();
            q.push(c);
            session.set_query(q);
            app.clamp_category_cursor();
        }
        KeyCode::Backspace => {
            if session.query.is_empty() {
                let len = session.tags.len();
                if len > 0 {
                    session.remove_tag(len - 1);
                }
            } else {
                let mut q = session.query.clone();
                q.pop();
                session.set_query(q);
            }
            app.clamp_category_cursor();
        }
        KeyCode::Enter => {
            if session.add_tag_from_query() {
                app.clamp_category_cursor();
            }
        }
        KeyCode::Esc => app.focus = Focus::Categories,
        _ => {}
    }
}

/// What: Category list navigation, expansion, and letter cycling.
fn categories_key(key: KeyEvent, app: &mut AppState) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    let visible = session.view().len();
    let name = session
        .view()
        .get(app.category_cursor)
        .map(|v| v.name.clone());
    match key.code {
        KeyCode::Up => app.category_cursor = app.category_cursor.saturating_sub(1),
        KeyCode::Down => {
            app.category_cursor = (app.category_cursor + 1).min(visible.saturating_sub(1));
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(name) = name {
                session.toggle_expanded(&name);
            }
        }
        KeyCode::Right => {
            if let Some(name) = name.filter(|n| session.is_expanded(n)) {
                session.cycle_letter(&name, true);
            }
        }
        KeyCode::Left => {
            if let Some(name) = name.filter(|n| session.is_expanded(n)) {
                session.cycle_letter(&name, false);
            }
        }
        KeyCode::Esc => app.focus = Focus::Search,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Song};
    use crate::logic::CatalogSession;
    use crate::state::LetterFilter;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_session() -> AppState {
        let mut app = AppState::default();
        app.focus = Focus::Search;
        app.session = Some(CatalogSession::new(
            "DDR".into(),
            vec![Category {
                name: "Anime Channel".into(),
                songs: vec![
                    Song {
                        title: Some("Freedom Dive".into()),
                        ..Default::default()
                    },
                    Song {
                        title: Some("Gee".into()),
                        ..Default::default()
                    },
                ],
            }],
            true,
        ));
        app.catalog_status = CatalogStatus::Ready;
        app
    }

    #[test]
    /// What: Selecting a game allocates a fresh monotonic load id
    ///
    /// - Input: Enter on the game selector twice
    /// - Output: Ids 1 then 2; session cleared; status Loading; requests on
    ///   the channel
    fn browse_enter_requests_load_with_token() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        games_key(press(KeyCode::Enter), &mut app, &tx);
        games_key(press(KeyCode::Enter), &mut app, &tx);
        assert_eq!(app.latest_load_id, 2);
        assert_eq!(app.catalog_status, CatalogStatus::Loading);
        assert!(app.session.is_none());
        let first = rx.try_recv().expect("first request");
        let second = rx.try_recv().expect("second request");
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.game, "Dance Dance Revolution");
    }

    #[test]
    /// What: Typing edits the live query; Enter promotes it to a tag
    ///
    /// - Input: Type "ge", press Enter, then Backspace on the empty box
    /// - Output: Query filters, tag added and box cleared, tag removed again
    fn browse_search_typing_and_tags() {
        let mut app = app_with_session();
        search_key(press(KeyCode::Char('g')), &mut app);
        search_key(press(KeyCode::Char('e')), &mut app);
        {
            let s = app.session.as_ref().expect("session");
            assert_eq!(s.query, "ge");
            assert_eq!(s.total_matches(), 1);
        }
        search_key(press(KeyCode::Enter), &mut app);
        {
            let s = app.session.as_ref().expect("session");
            assert_eq!(s.tags, vec!["ge".to_string()]);
            assert!(s.query.is_empty());
        }
        search_key(press(KeyCode::Backspace), &mut app);
        let s = app.session.as_ref().expect("session");
        assert!(s.tags.is_empty());
        assert_eq!(s.total_matches(), 2);
    }

    #[test]
    /// What: Letter cycling only applies to expanded categories
    ///
    /// - Input: Right arrow collapsed, then after Enter-expansion
    /// - Output: Bucket moves only once expanded
    fn browse_letter_cycling_requires_expansion() {
        let mut app = app_with_session();
        app.focus = Focus::Categories;
        categories_key(press(KeyCode::Right), &mut app);
        assert_eq!(
            app.session.as_ref().expect("session").letter("Anime Channel"),
            LetterFilter::All
        );
        categories_key(press(KeyCode::Enter), &mut app);
        categories_key(press(KeyCode::Right), &mut app);
        assert_eq!(
            app.session.as_ref().expect("session").letter("Anime Channel"),
            LetterFilter::Letter('a')
        );
    }
}
