//! Channel definitions for runtime communication, plus worker spawning.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::net::DataRoot;
use crate::sources::events::EventsFeed;
use crate::state::{ContactFormState, LoadInput, LoadResults};

/// All channel ends used by the event loop.
///
/// Senders feeding the background workers are handed out at construction;
/// the loop keeps the receivers plus the senders the input handlers need.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Sender for the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Cancellation flag for the reader thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Catalog load requests (handlers -> loader worker).
    pub load_tx: mpsc::UnboundedSender<LoadInput>,
    /// Catalog load results (loader worker -> loop).
    pub load_res_rx: mpsc::UnboundedReceiver<LoadResults>,
    /// Contact submissions (handlers -> contact worker).
    pub contact_tx: mpsc::UnboundedSender<ContactFormState>,
    /// Contact outcomes (contact worker -> loop).
    pub contact_res_rx: mpsc::UnboundedReceiver<Result<(), String>>,
    /// Event feed result (feed worker -> loop, fires once).
    pub feed_res_rx: mpsc::UnboundedReceiver<EventsFeed>,
}

impl Channels {
    /// What: Create all channels and spawn the background workers.
    ///
    /// Inputs:
    /// - `data_root`: Root the loader and feed workers read from
    /// - `contact_endpoint`: Form processor URL for the contact worker
    pub fn new(data_root: DataRoot, contact_endpoint: String) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (load_tx, load_req_rx) = mpsc::unbounded_channel::<LoadInput>();
        let (load_res_tx, load_res_rx) = mpsc::unbounded_channel::<LoadResults>();
        let (contact_tx, contact_req_rx) = mpsc::unbounded_channel::<ContactFormState>();
        let (contact_res_tx, contact_res_rx) = mpsc::unbounded_channel::<Result<(), String>>();
        let (feed_res_tx, feed_res_rx) = mpsc::unbounded_channel::<EventsFeed>();

        super::workers::spawn_load_worker(load_req_rx, load_res_tx, data_root.clone());
        super::workers::spawn_contact_worker(contact_req_rx, contact_res_tx, contact_endpoint);
        super::workers::spawn_feed_worker(feed_res_tx, data_root);

        Self {
            event_rx,
            event_tx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            load_tx,
            load_res_rx,
            contact_tx,
            contact_res_rx,
            feed_res_rx,
        }
    }
}
