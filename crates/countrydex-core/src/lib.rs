// crates/countrydex-core/src/lib.rs
//! countrydex-core
//! ===============
//!
//! Country catalog built on the REST Countries API: substring search over
//! canonical and localized names, cumulative "load more" pagination, a
//! population rank, and a persisted set of favorite country codes.
//!
//! ```no_run
//! use countrydex_core::prelude::*;
//!
//! let config = Config::default();
//! let client = RestCountriesClient::from_config(&config)?;
//! let store = FileStore::new(&config.data_dir);
//!
//! let catalog = CountryCatalog::load(&client, &store)?;
//! let mut state = SearchState::new(config.page_size);
//! state.set_term("land");
//! for c in state.apply(catalog.countries()) {
//!     println!("{} ({})", c.name(), c.code());
//! }
//!
//! let favorites = FavoritesStore::new(&store);
//! favorites.toggle("FIN")?;
//! # Ok::<(), countrydex_core::CountryDexError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
#[cfg(feature = "http")]
pub mod client;
pub mod config;
pub mod detail;
pub mod error;
pub mod favorites;
pub mod model;
pub mod prelude;
pub mod search;
pub mod store;
pub mod text;
pub mod traits;
// Wire format of the external API (used by the client and its tests)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::catalog::{population_rank, sort_by_name, CountryCatalog};
#[cfg(feature = "http")]
pub use crate::client::RestCountriesClient;
pub use crate::config::Config;
pub use crate::detail::{
    neighbors_of, open_link, resolve_neighbors, wikipedia_link_for, CountryDetail, LanguageLink,
};
pub use crate::error::{CountryDexError, Result};
pub use crate::favorites::{FavoriteSet, FavoritesStore};
pub use crate::model::Country;
pub use crate::search::{paginate, search, SearchState};
pub use crate::store::{FileStore, MemoryStore};
pub use crate::traits::{CountrySource, KeyValueStore, LinkOpener, NameMatch};
