//! countrydex prelude: bring common types and traits into scope.

#![allow(unused_imports)]

#[cfg(feature = "http")]
pub use crate::client::RestCountriesClient;
pub use crate::catalog::{population_rank, CountryCatalog};
pub use crate::config::Config;
pub use crate::detail::{neighbors_of, wikipedia_link_for, CountryDetail};
pub use crate::error::{CountryDexError, Result};
pub use crate::favorites::{FavoriteSet, FavoritesStore};
pub use crate::model::Country;
pub use crate::search::{paginate, search, SearchState};
pub use crate::store::{FileStore, MemoryStore};
pub use crate::traits::{CountrySource, KeyValueStore, LinkOpener, NameMatch};
