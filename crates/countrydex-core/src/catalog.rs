// crates/countrydex-core/src/catalog.rs
use crate::error::Result;
use crate::model::Country;
use crate::search::search;
use crate::store::COUNTRIES_KEY;
use crate::text::collate;
use crate::traits::{CountrySource, KeyValueStore};
use once_cell::sync::OnceCell;
use tracing::{debug, info, warn};

/// 1-based position of `code` when `countries` is ordered by descending
/// population, or 0 if `code` is absent.
///
/// Sorts a copy, so the caller's order is untouched. Countries with equal
/// population keep their relative input order.
///
/// # Example
///
/// ```rust
/// use countrydex_core::{population_rank, Country};
///
/// let all = vec![
///     Country::new("FRA", "France").with_population(67_000_000),
///     Country::new("DEU", "Germany").with_population(83_000_000),
/// ];
/// assert_eq!(population_rank(&all, "FRA"), 2);
/// assert_eq!(population_rank(&all, "DEU"), 1);
/// assert_eq!(population_rank(&all, "XXX"), 0);
/// ```
pub fn population_rank(countries: &[Country], code: &str) -> usize {
    population_order(countries)
        .iter()
        .position(|c| c.has_code(code))
        .map_or(0, |i| i + 1)
}

fn population_order(countries: &[Country]) -> Vec<&Country> {
    let mut sorted: Vec<&Country> = countries.iter().collect();
    sorted.sort_by(|a, b| b.population.cmp(&a.population));
    sorted
}

/// Sort in place by canonical name, accent- and case-insensitively.
pub fn sort_by_name(countries: &mut [Country]) {
    countries.sort_by(|a, b| collate(&a.name, &b.name));
}

/// The session's full list of countries.
///
/// Populated once from the cache or the network and treated as immutable
/// until [`CountryCatalog::refresh`].
#[derive(Debug, Default)]
pub struct CountryCatalog {
    countries: Vec<Country>,
    /// Codes in descending population order, built on the first rank query.
    ranking: OnceCell<Vec<String>>,
}

impl CountryCatalog {
    /// Catalog over an already materialized list, kept in the given order.
    pub fn from_countries(countries: Vec<Country>) -> Self {
        Self {
            countries,
            ranking: OnceCell::new(),
        }
    }

    /// Cached list from a previous session if there is one, otherwise the
    /// full list from `source`, sorted by name and written to the cache.
    ///
    /// An undecodable cache entry counts as absent. Failing to write the cache
    /// is logged and otherwise ignored; failing to fetch is
    /// [`crate::CountryDexError::DataUnavailable`].
    pub fn load<S, K>(source: &S, store: &K) -> Result<Self>
    where
        S: CountrySource + ?Sized,
        K: KeyValueStore + ?Sized,
    {
        match store.get(COUNTRIES_KEY) {
            Ok(Some(cached)) => match serde_json::from_str::<Vec<Country>>(&cached) {
                Ok(countries) => {
                    debug!(count = countries.len(), "catalog loaded from cache");
                    return Ok(Self::from_countries(countries));
                }
                Err(e) => warn!(error = %e, "ignoring undecodable country cache"),
            },
            Ok(None) => debug!("no cached catalog"),
            Err(e) => warn!(error = %e, "country cache unreadable"),
        }

        let countries = fetch_sorted_and_cache(source, store)?;
        Ok(Self::from_countries(countries))
    }

    /// Always fetch, bypassing the cache, then replace the list and re-cache.
    ///
    /// On failure the current list is kept.
    pub fn refresh<S, K>(&mut self, source: &S, store: &K) -> Result<()>
    where
        S: CountrySource + ?Sized,
        K: KeyValueStore + ?Sized,
    {
        let countries = fetch_sorted_and_cache(source, store)?;
        self.countries = countries;
        self.ranking = OnceCell::new();
        Ok(())
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Find a country by code, case-insensitive (e.g. "FRA", "fra").
    pub fn find(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.has_code(code))
    }

    pub fn search(&self, term: &str) -> Vec<&Country> {
        search(&self.countries, term)
    }

    /// Same result as [`population_rank`] over [`CountryCatalog::countries`];
    /// the population order is computed once per loaded list.
    pub fn rank(&self, code: &str) -> usize {
        let ranking = self.ranking.get_or_init(|| {
            population_order(&self.countries)
                .into_iter()
                .map(|c| c.code.clone())
                .collect()
        });
        ranking
            .iter()
            .position(|c| c.eq_ignore_ascii_case(code.trim()))
            .map_or(0, |i| i + 1)
    }
}

fn fetch_sorted_and_cache<S, K>(source: &S, store: &K) -> Result<Vec<Country>>
where
    S: CountrySource + ?Sized,
    K: KeyValueStore + ?Sized,
{
    let mut countries = source.fetch_all()?;
    sort_by_name(&mut countries);

    match serde_json::to_string(&countries) {
        Ok(json) => match store.set(COUNTRIES_KEY, &json) {
            Ok(()) => info!(count = countries.len(), "catalog cached"),
            Err(e) => warn!(error = %e, "could not cache catalog"),
        },
        Err(e) => warn!(error = %e, "could not encode catalog"),
    }
    Ok(countries)
}
