//! Application runtime: terminal lifecycle, channels, workers, event loop.

mod runtime;
mod terminal;

pub use runtime::run;
