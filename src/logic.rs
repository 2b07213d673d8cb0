//! Pure search/filter/sort logic and the per-game search session.
//!
//! Nothing in here touches the terminal or the network; the runtime feeds
//! loaded catalogs in and the UI renders the derived views out.

pub mod filter;
pub mod session;
pub mod sort;

pub use filter::song_matches;
pub use session::{CatalogSession, CategoryView};
pub use sort::{sort_categories, sort_songs};
