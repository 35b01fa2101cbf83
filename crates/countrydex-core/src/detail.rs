// crates/countrydex-core/src/detail.rs
use crate::catalog::{population_rank, CountryCatalog};
use crate::error::{CountryDexError, Result};
use crate::favorites::{resolve_codes, FavoritesStore};
use crate::model::Country;
use crate::traits::{CountrySource, KeyValueStore, LinkOpener};
use serde::Serialize;
use tracing::warn;

pub const WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// Wikipedia article URL for a language display name.
///
/// ```rust
/// use countrydex_core::wikipedia_link_for;
///
/// assert_eq!(
///     wikipedia_link_for("Haitian Creole"),
///     "https://en.wikipedia.org/wiki/Haitian_Creole"
/// );
/// ```
pub fn wikipedia_link_for(language_name: &str) -> String {
    format!("{WIKIPEDIA_BASE_URL}{}", language_name.replace(' ', "_"))
}

/// `country.borders` mapped onto records from `resolved`, in border order.
///
/// Border codes with no matching record are dropped without error.
pub fn neighbors_of(country: &Country, resolved: &[Country]) -> Vec<Country> {
    country
        .borders
        .iter()
        .filter_map(|code| resolved.iter().find(|c| c.has_code(code)))
        .cloned()
        .collect()
}

/// Look the border codes up with one batched request, then
/// [`neighbors_of`] over the answer. No request for a country without borders.
pub fn resolve_neighbors<S>(country: &Country, source: &S) -> Result<Vec<Country>>
where
    S: CountrySource + ?Sized,
{
    let resolved = resolve_codes(source, &country.borders)?;
    Ok(neighbors_of(country, &resolved))
}

/// Ask `opener` to show `url`. Failure is logged and otherwise ignored.
pub fn open_link<O: LinkOpener + ?Sized>(opener: &O, url: &str) {
    if let Err(e) = opener.open(url) {
        warn!(url, error = %e, "couldn't open link");
    }
}

/// A spoken language with its Wikipedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageLink {
    pub code: String,
    pub name: String,
    pub url: String,
}

/// Everything the detail screen shows for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryDetail {
    pub country: Country,
    /// 1-based rank by population within the catalog, 0 if not listed.
    pub population_rank: usize,
    pub languages: Vec<LanguageLink>,
    pub neighbors: Vec<Country>,
    pub is_favorite: bool,
}

impl CountryDetail {
    /// Pure derivation from already fetched inputs.
    ///
    /// `neighbors` may be any superset of the border records (a resolved
    /// batch or the whole catalog); it is narrowed with [`neighbors_of`].
    pub fn derive(
        country: Country,
        all_countries: &[Country],
        neighbors: &[Country],
        is_favorite: bool,
    ) -> Self {
        let rank = population_rank(all_countries, &country.code);
        Self::assemble(country, rank, neighbors, is_favorite)
    }

    fn assemble(
        country: Country,
        population_rank: usize,
        neighbors: &[Country],
        is_favorite: bool,
    ) -> Self {
        let languages = country
            .languages
            .iter()
            .map(|(code, name)| LanguageLink {
                code: code.clone(),
                name: name.clone(),
                url: wikipedia_link_for(name),
            })
            .collect();
        let neighbors = neighbors_of(&country, neighbors);

        Self {
            country,
            population_rank,
            languages,
            neighbors,
            is_favorite,
        }
    }

    /// Fetch `code`, resolve its neighbors and read its favorite state, one
    /// call after another.
    ///
    /// [`CountryDexError::NotFound`] when the API has no record for `code`.
    pub fn fetch<S, K>(
        code: &str,
        catalog: &CountryCatalog,
        source: &S,
        favorites: &FavoritesStore<K>,
    ) -> Result<Self>
    where
        S: CountrySource + ?Sized,
        K: KeyValueStore,
    {
        let country = source
            .fetch_by_code(code)?
            .ok_or_else(|| CountryDexError::NotFound(code.to_string()))?;
        let neighbors = resolve_neighbors(&country, source)?;
        let is_favorite = favorites.is_favorite(&country.code)?;

        let rank = catalog.rank(&country.code);
        Ok(Self::assemble(country, rank, &neighbors, is_favorite))
    }

    pub fn area(&self) -> f64 {
        self.country.area
    }

    pub fn population(&self) -> u64 {
        self.country.population
    }

    pub fn flag_url(&self) -> Option<&str> {
        self.country.flag_url.as_deref()
    }
}
