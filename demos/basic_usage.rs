//! Basic usage example for countrydex-rs
//!
//! Loads the catalog (from cache or network), pages through a search, shows
//! one country's details and toggles a favorite. Data lives in a temporary
//! directory so running the demo never touches your real favorites.

use countrydex_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydex-rs Basic Usage ===\n");

    let config = Config::default();
    let client = RestCountriesClient::from_config(&config)?;
    let store = FileStore::new(std::env::temp_dir().join("countrydex-demo"));

    // Example 1: load once, cached for next time
    let catalog = CountryCatalog::load(&client, &store)?;
    println!("Loaded {} countries\n", catalog.len());

    // Example 2: search + "load more"
    let mut state = SearchState::new(5);
    state.set_term("island");
    let filtered = catalog.search(state.term());
    println!("--- '{}' page {} ---", state.term(), state.page());
    for c in paginate(&filtered, state.page(), state.page_size()) {
        println!("  {} ({})", c.name(), c.code());
    }
    if state.load_more(filtered.len()) {
        println!("--- '{}' page {} ---", state.term(), state.page());
        for c in paginate(&filtered, state.page(), state.page_size()) {
            println!("  {} ({})", c.name(), c.code());
        }
    }
    println!();

    // Example 3: details
    let favorites = FavoritesStore::new(&store);
    let detail = CountryDetail::fetch("CHE", &catalog, &client, &favorites)?;
    println!("--- {} ---", detail.country.name());
    println!("  Population rank: {}", detail.population_rank);
    for lang in &detail.languages {
        println!("  {} -> {}", lang.name, lang.url);
    }
    let neighbors: Vec<_> = detail.neighbors.iter().map(|c| c.name()).collect();
    println!("  Neighbors: {}", neighbors.join(", "));
    println!();

    // Example 4: favorites
    let now = favorites.toggle("CHE")?;
    println!("CHE favorite: {now}");
    for c in favorites.favorites(&client)? {
        println!("  ★ {}", c.name());
    }
    favorites.toggle("CHE")?;

    Ok(())
}
