//! Command-line interface.

use clap::Parser;

/// TUI for searching the Rising Flow song database.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "riseflow", version, about)]
pub struct Args {
    /// Data root: a directory path or an HTTP(S) base URL.
    #[arg(long)]
    pub data_root: Option<String>,

    /// UI locale tag (pt-BR or en-GB).
    #[arg(long)]
    pub locale: Option<String>,

    /// Contact form processor endpoint.
    #[arg(long)]
    pub contact_endpoint: Option<String>,

    /// Game to select and load on startup.
    #[arg(long)]
    pub game: Option<String>,
}
