//! Background workers: catalog loading, contact submission, event feed.

use tokio::sync::mpsc;
use tracing::debug;

use crate::net::DataRoot;
use crate::sources;
use crate::sources::events::EventsFeed;
use crate::state::{ContactFormState, LoadInput, LoadResults};

/// What: Spawn the catalog loader worker.
///
/// Inputs:
/// - `req_rx`: Load requests carrying the monotonic token
/// - `res_tx`: Result channel back to the event loop
/// - `data_root`: Root of the static data tree
///
/// Details:
/// - Requests queued behind a newer one are drained first so only the most
///   recent selection is fetched; the loop additionally discards any stale
///   result by token, so a slow response can never win.
pub fn spawn_load_worker(
    mut req_rx: mpsc::UnboundedReceiver<LoadInput>,
    res_tx: mpsc::UnboundedSender<LoadResults>,
    data_root: DataRoot,
) {
    tokio::spawn(async move {
        while let Some(mut latest) = req_rx.recv().await {
            while let Ok(newer) = req_rx.try_recv() {
                debug!(superseded = latest.id, by = newer.id, "coalescing load requests");
                latest = newer;
            }
            let Some(game) = crate::games::find(&latest.game) else {
                debug!(game = %latest.game, "unknown game requested");
                let _ = res_tx.send(LoadResults {
                    id: latest.id,
                    game: latest.game,
                    categories: Vec::new(),
                    declared_order: false,
                });
                continue;
            };
            let (categories, declared_order) = sources::catalog::load_game(&data_root, game).await;
            let _ = res_tx.send(LoadResults {
                id: latest.id,
                game: latest.game,
                categories,
                declared_order,
            });
        }
    });
}

/// What: Spawn the contact submission worker.
pub fn spawn_contact_worker(
    mut req_rx: mpsc::UnboundedReceiver<ContactFormState>,
    res_tx: mpsc::UnboundedSender<Result<(), String>>,
    endpoint: String,
) {
    tokio::spawn(async move {
        while let Some(form) = req_rx.recv().await {
            let outcome = sources::contact::submit(&endpoint, &form).await;
            let _ = res_tx.send(outcome);
        }
    });
}

/// What: Spawn the one-shot community event feed loader.
pub fn spawn_feed_worker(res_tx: mpsc::UnboundedSender<EventsFeed>, data_root: DataRoot) {
    tokio::spawn(async move {
        let today = chrono::Local::now().date_naive();
        let feed = sources::events::load_feed(&data_root, today).await;
        let _ = res_tx.send(feed);
    });
}
