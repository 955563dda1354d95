//! CLI argument parsing for zen-search.
//!
//! CLI flags override all other config sources.

use clap::{Parser, Subcommand};

/// zen-search
///
/// Exact-match search over organisations, tickets and users, with related
/// records resolved across groups.
#[derive(Parser, Debug)]
#[command(name = "zen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/zen-search/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory containing <group>.json files
    #[arg(short, long, global = true)]
    pub data_dir: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive search menu
    Interactive,

    /// List loaded groups
    Groups,

    /// List searchable fields
    Terms {
        /// Only this group (default: all groups)
        group: Option<String>,
    },

    /// Find records whose field equals a value (case-insensitive)
    Search {
        group: String,
        field: String,
        value: String,

        /// Also resolve related records in other groups
        #[arg(short, long)]
        related: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Like `search --related`
    Related {
        group: String,
        field: String,
        value: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}
