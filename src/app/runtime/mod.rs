//! Runtime wiring: initialization, the event loop, and clean shutdown.

mod channels;
mod handlers;
mod workers;

use std::sync::atomic::Ordering;

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::args::Args;
use crate::i18n;
use crate::net::DataRoot;
use crate::state::AppState;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};
use channels::Channels;

/// Boxed error alias for the runtime.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the riseflow TUI end to end.
///
/// Inputs:
/// - `args`: Parsed command line
///
/// Output:
/// - `Ok(())` on clean exit; `Err` on unrecoverable terminal failures.
///
/// Details:
/// - Resolves settings (CLI over `settings.toml` over defaults), loads the
///   locale, spawns the loader/contact/feed workers and the input thread,
///   then drives the render/select loop until an exit key arrives.
/// - `RISEFLOW_TEST_HEADLESS=1` skips terminal setup and rendering so
///   integration tests can drive the loop through the channels alone.
pub async fn run(args: Args) -> Result<()> {
    let headless = std::env::var("RISEFLOW_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    initialize_app_state(&mut app, &args);

    let mut channels = Channels::new(app.data_root.clone(), app.contact_endpoint.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    if let Some(game) = args.game.as_deref() {
        if let Some(pos) = crate::games::GAMES.iter().position(|g| g.name == game) {
            app.game_cursor = pos;
            crate::events::request_game_load(&mut app, &channels.load_tx);
        } else {
            tracing::warn!(game, "unknown game on the command line; ignoring");
        }
    }

    loop {
        if let Some(term) = terminal.as_mut() {
            term.draw(|f| ui(f, &mut app))?;
        }
        if process_messages(&mut app, &mut channels).await {
            break;
        }
    }

    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}

/// What: Resolve settings and CLI flags into the initial state.
///
/// Details:
/// - Precedence per knob: CLI flag, then `settings.toml`, then the built-in
///   default. The locale additionally falls back to the system environment.
fn initialize_app_state(app: &mut AppState, args: &Args) {
    let settings = crate::theme::load_settings();
    let raw_root = args
        .data_root
        .clone()
        .or(settings.data_root)
        .unwrap_or_else(|| "data".to_string());
    app.data_root = DataRoot::parse(&raw_root);
    if let Some(endpoint) = args.contact_endpoint.clone().or(settings.contact_endpoint) {
        app.contact_endpoint = endpoint;
    }
    let locale = i18n::resolve_locale(args.locale.as_deref().or(settings.locale.as_deref()));
    app.set_locale(&locale);
    tracing::info!(
        data_root = ?app.data_root,
        locale = %app.locale,
        "state initialized"
    );
}

/// What: Wait for and process a single message from any channel.
///
/// Output:
/// - `true` when the loop should exit.
async fn process_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(ev, app, &channels.load_tx, &channels.contact_tx)
        }
        Some(results) = channels.load_res_rx.recv() => {
            handlers::handle_load_results(app, results);
            false
        }
        Some(outcome) = channels.contact_res_rx.recv() => {
            handlers::handle_contact_result(app, outcome);
            false
        }
        Some(feed) = channels.feed_res_rx.recv() => {
            handlers::handle_feed_results(app, feed);
            false
        }
        else => true,
    }
}

/// What: Spawn the blocking thread that reads terminal input.
///
/// Details:
/// - Polls with a short timeout so the cancellation flag is honored
///   promptly; a closed channel also ends the thread.
fn spawn_event_thread(
    headless: bool,
    event_tx: tokio::sync::mpsc::UnboundedSender<CEvent>,
    cancelled: std::sync::Arc<std::sync::atomic::AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // transient read errors are ignored
                    }
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}
