//! Command-line arguments. Searches are driven by the interactive menu;
//! flags only control configuration and logging.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "movie-search", version)]
#[command(about = "Interactive movie catalog search with search history", long_about = None)]
pub(crate) struct Cli {
    /// Settings file to read instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,
}
