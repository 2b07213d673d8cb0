//! Community event feed: load `event.json` records and bucket them into
//! upcoming and past.

use chrono::{Days, NaiveDate};
use futures::future::join_all;
use tracing::{info, warn};

use crate::net::{DataRoot, fetch_json};

/// One community event record as stored in `event.json`.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct EventRecord {
    /// Stable identifier, also the record's folder name.
    pub id: String,
    /// Event title.
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Venue / city.
    #[serde(default)]
    pub location: String,
    /// First day, ISO `YYYY-MM-DD`.
    pub starting_date: NaiveDate,
    /// Last day, ISO `YYYY-MM-DD`.
    pub ending_date: NaiveDate,
    /// Games featured at the event.
    #[serde(default)]
    pub games: Vec<String>,
    /// Event Instagram page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    /// Event website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    /// Tournament winner (past events).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    /// Attendance (past events).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants_count: Option<u32>,
    /// Whether attendees must register beforehand.
    #[serde(default)]
    pub registration_required: bool,
    /// Entry fee text, free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_fee: Option<String>,
}

impl EventRecord {
    /// What: Whether the event counts as past on the given day.
    ///
    /// Details:
    /// - An event becomes past the day *after* its ending date; one ending
    ///   today is still upcoming.
    #[must_use]
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.ending_date
            .checked_add_days(Days::new(1))
            .is_some_and(|threshold| today >= threshold)
    }
}

/// The loaded feed, bucketed and sorted for display.
#[derive(Clone, Debug, Default)]
pub struct EventsFeed {
    /// Upcoming events, earliest start first.
    pub upcoming: Vec<EventRecord>,
    /// Past events, most recent end first.
    pub past: Vec<EventRecord>,
}

/// Folder buckets scanned under `events/`.
const BUCKETS: [&str; 2] = ["upcoming", "past"];

/// What: Load and bucket the whole event feed.
///
/// Inputs:
/// - `root`: Active data root
/// - `today`: Reference date for the upcoming/past split
///
/// Output:
/// - Feed with both buckets sorted; empty buckets are fine.
///
/// Details:
/// - Records are re-bucketed by date regardless of the folder they were
///   found in, so a stale `upcoming/` record still lands under past.
/// - Per-record failures are logged and skipped.
pub async fn load_feed(root: &DataRoot, today: NaiveDate) -> EventsFeed {
    let mut records: Vec<EventRecord> = Vec::new();
    for bucket in BUCKETS {
        let ids = bucket_ids(root, bucket).await;
        let fetches = ids.iter().map(|id| async move {
            let rel = format!("events/{bucket}/{id}/event.json");
            match fetch_json::<EventRecord>(root, &rel).await {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(file = rel, error = %err, "event record skipped");
                    None
                }
            }
        });
        records.extend(join_all(fetches).await.into_iter().flatten());
    }
    info!(events = records.len(), "event feed loaded");
    bucket_records(records, today)
}

/// What: Enumerate record ids for one bucket folder.
///
/// Details:
/// - Prefers `events/{bucket}/manifest.json` (array of ids). For directory
///   roots a filesystem scan backs it up; URL roots have no listing
///   fallback.
async fn bucket_ids(root: &DataRoot, bucket: &str) -> Vec<String> {
    if let Ok(ids) = fetch_json::<Vec<String>>(root, &format!("events/{bucket}/manifest.json")).await
    {
        return ids;
    }
    match root {
        DataRoot::Dir(dir) => {
            let folder = dir.join("events").join(bucket);
            let Ok(entries) = std::fs::read_dir(&folder) else {
                return Vec::new();
            };
            let mut ids: Vec<String> = entries
                .flatten()
                .filter(|e| e.path().join("event.json").is_file())
                .filter_map(|e| e.file_name().into_string().ok())
                .collect();
            ids.sort();
            ids
        }
        DataRoot::Url(_) => Vec::new(),
    }
}

/// What: Split records into upcoming/past and sort each bucket.
fn bucket_records(records: Vec<EventRecord>, today: NaiveDate) -> EventsFeed {
    let mut feed = EventsFeed::default();
    for record in records {
        if record.is_past(today) {
            feed.past.push(record);
        } else {
            feed.upcoming.push(record);
        }
    }
    feed.upcoming.sort_by_key(|e| e.starting_date);
    feed.past.sort_by_key(|e| std::cmp::Reverse(e.ending_date));
    feed
}
