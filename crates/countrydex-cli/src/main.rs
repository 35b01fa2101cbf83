//! countrydex — Command-line interface for countrydex-core
//!
//! Browse the REST Countries catalog from a terminal: list and search
//! countries with cumulative paging, show one country's details, and keep a
//! persisted list of favorites.
//!
//! Usage examples
//! --------------
//!
//! - List the first page, then the first three pages of a search
//!   $ countrydex list
//!   $ countrydex list --search land --page 3
//!
//! - Show details (population rank, languages, neighbors)
//!   $ countrydex country fra
//!
//! - Manage favorites
//!   $ countrydex toggle FRA
//!   $ countrydex favorites
//!
//! Data source
//! -----------
//!
//! The first run fetches the full list and caches it in the data directory;
//! later runs read the cache until `countrydex refresh`. Use `--data-dir` to
//! keep separate profiles and `RUST_LOG` / `-v` for logging.
mod args;
mod opener;

use crate::args::{CliArgs, Commands};
use crate::opener::SystemOpener;
use anyhow::Context;
use clap::Parser;
use countrydex_core::prelude::*;
use countrydex_core::text::normalize_code;
use countrydex_core::{open_link, Country};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("countrydex={level},countrydex_core={level}"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn config_from(args: &CliArgs) -> Config {
    let mut config = Config::default();
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(url) = &args.base_url {
        config.base_url = url.clone();
    }
    if let Some(secs) = args.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(size) = args.page_size {
        config.page_size = size;
    }
    config
}

/// `67391582` -> `67,391,582`
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn print_row(c: &Country) {
    println!("{:<40} {}  {}", c.name(), c.code(), c.region());
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let config = config_from(&args);
    debug!(?config, "configuration");

    // Building the client does no I/O; requests happen per command.
    let client = RestCountriesClient::from_config(&config)?;
    let store = FileStore::new(&config.data_dir);
    let favorites = FavoritesStore::new(&store);

    match args.command {
        Commands::List { search, page } => {
            let catalog =
                CountryCatalog::load(&client, &store).context("could not load countries")?;
            let mut state = SearchState::new(config.page_size);
            state.set_term(search);
            state.set_page(page);

            let filtered = catalog.search(state.term());
            let visible = paginate(&filtered, state.page(), state.page_size());
            for c in visible {
                print_row(c);
            }
            println!();
            println!("showing {} of {}", visible.len(), filtered.len());
            if state.has_more(filtered.len()) {
                println!("more with --page {}", state.page() + 1);
            }
        }

        Commands::Refresh => {
            let mut catalog = CountryCatalog::default();
            catalog
                .refresh(&client, &store)
                .context("could not refresh countries")?;
            println!("Cached {} countries in {}", catalog.len(), store.dir().display());
        }

        Commands::Country { code } => {
            let catalog = CountryCatalog::load(&client, &store)?;
            let detail = match CountryDetail::fetch(&code, &catalog, &client, &favorites) {
                Ok(d) => d,
                Err(CountryDexError::NotFound(_)) => {
                    eprintln!("No country found for: {code}");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };
            let c = &detail.country;

            println!("{}", c.name());
            println!("  {}", c.official_name());
            println!("Code: {}", c.code());
            if let Some(capital) = &c.capital {
                println!("Capital: {capital}");
            }
            println!("Region: {}", c.region());
            println!("Population: {}", thousands(detail.population()));
            println!("Area: {} sq km", thousands(detail.area().round() as u64));
            println!("Population Rank: {}", detail.population_rank);
            if let Some(flag) = detail.flag_url() {
                println!("Flag: {flag}");
            }

            println!("\nLanguages:");
            if detail.languages.is_empty() {
                println!("  No languages available");
            }
            for lang in &detail.languages {
                println!("  {} <{}>", lang.name, lang.url);
            }

            println!("\nNeighboring Countries:");
            if detail.neighbors.is_empty() {
                println!("  No neighboring countries");
            }
            for n in &detail.neighbors {
                println!("  {} ({})", n.name(), n.code());
            }

            println!(
                "\n{}",
                if detail.is_favorite {
                    "★ In favorites"
                } else {
                    "☆ Not in favorites"
                }
            );
        }

        Commands::Favorites => {
            let list = favorites
                .favorites(&client)
                .context("could not load favorite countries")?;
            if list.is_empty() {
                println!("No favorite countries yet");
            }
            for c in &list {
                print_row(c);
            }
        }

        Commands::Toggle { code } => {
            let now = favorites.toggle(&code)?;
            let code = normalize_code(&code);
            if now {
                println!("Added {code} to favorites");
            } else {
                println!("Removed {code} from favorites");
            }
        }

        Commands::Wiki { language, open } => {
            let url = wikipedia_link_for(&language);
            println!("{url}");
            if open {
                open_link(&SystemOpener, &url);
            }
        }
    }

    Ok(())
}
