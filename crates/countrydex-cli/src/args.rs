use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for countrydex
#[derive(Debug, Parser)]
#[command(
    name = "countrydex",
    version,
    about = "Browse, search and bookmark countries from the REST Countries API"
)]
pub struct CliArgs {
    /// Directory for the catalog cache and favorites (default: platform data dir)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Root of the REST Countries API
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long = "timeout-secs", global = true)]
    pub timeout_secs: Option<u64>,

    /// Entries added by each page of the list
    #[arg(long = "page-size", global = true)]
    pub page_size: Option<usize>,

    /// Log debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List countries, optionally filtered, up to the given page
    List {
        /// Substring of the common or any localized name (case-insensitive)
        #[arg(short = 's', long = "search", default_value = "")]
        search: String,

        /// How many pages to show (cumulative)
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: usize,
    },

    /// Re-fetch the country list and replace the cache
    Refresh,

    /// Show details for a country by its 3-letter code
    Country {
        /// Code (e.g. FRA, deu)
        code: String,
    },

    /// List favorite countries
    Favorites,

    /// Add or remove a country from the favorites
    Toggle {
        /// Code (e.g. FRA)
        code: String,
    },

    /// Print the Wikipedia link for a language
    Wiki {
        /// Language display name (e.g. "Haitian Creole")
        language: String,

        /// Open the link in the system browser
        #[arg(long)]
        open: bool,
    },
}
