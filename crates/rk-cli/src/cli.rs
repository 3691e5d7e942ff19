//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Runkeeper archive analyzer.
///
/// Classifies exported Runkeeper posts and reports on activities, categories
/// and user-written commentary.
#[derive(Debug, Parser)]
#[command(name = "rk", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the post archive (JSON array or JSON Lines).
    #[arg(short, long, global = true)]
    pub archive: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize the archive: date range, categories and written posts.
    About {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Report activity types and distances.
    Activities {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Search user-written text.
    Search {
        /// Case-insensitive text to look for.
        query: String,

        /// Print matches as HTML table rows.
        #[arg(long)]
        html: bool,
    },

    /// Print every post with its classification as JSON Lines.
    Classify,
}
