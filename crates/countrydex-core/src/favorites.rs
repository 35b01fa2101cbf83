// crates/countrydex-core/src/favorites.rs
use crate::error::{CountryDexError, Result};
use crate::model::Country;
use crate::store::FAVORITES_KEY;
use crate::text::{normalize_code, parse_code};
use crate::traits::{CountrySource, KeyValueStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Persisted set of favorite country codes.
///
/// Stored as a plain JSON array of strings. No duplicates; additions are
/// appended and removals filter in place, so the order stays stable across
/// toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    codes: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, code: &str) -> bool {
        let code = normalize_code(code);
        self.codes.iter().any(|c| *c == code)
    }

    /// Flip membership of `code`. Returns the new membership state.
    ///
    /// [`CountryDexError::InvalidCode`] for blank or non-alphanumeric codes;
    /// the set is left untouched.
    pub fn toggle(&mut self, code: &str) -> Result<bool> {
        let code = parse_code(code)?;
        if self.codes.contains(&code) {
            self.codes.retain(|c| *c != code);
            Ok(false)
        } else {
            self.codes.push(code);
            Ok(true)
        }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FavoriteSet {
    /// Duplicates and invalid codes are dropped, first occurrence wins.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = FavoriteSet::new();
        for code in iter {
            let Ok(code) = parse_code(code.as_ref()) else {
                continue;
            };
            if !set.codes.contains(&code) {
                set.codes.push(code);
            }
        }
        set
    }
}

/// Favorites backed by a [`KeyValueStore`].
///
/// Every call reads the persisted set afresh; `toggle` is a plain
/// read-modify-write. Two writers racing on the same store lose one update
/// (last write wins).
#[derive(Debug, Clone)]
pub struct FavoritesStore<K> {
    store: K,
}

impl<K: KeyValueStore> FavoritesStore<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    /// The persisted set. An absent key is an empty set; a value that does not
    /// decode is [`CountryDexError::StorageUnavailable`].
    pub fn codes(&self) -> Result<FavoriteSet> {
        match self.store.get(FAVORITES_KEY)? {
            None => Ok(FavoriteSet::new()),
            Some(json) => {
                let codes: Vec<String> = serde_json::from_str(&json).map_err(|e| {
                    CountryDexError::StorageUnavailable(format!("undecodable favorites: {e}"))
                })?;
                // Older writers may have stored duplicates, blanks or lower-case codes.
                Ok(codes.into_iter().collect())
            }
        }
    }

    pub fn is_favorite(&self, code: &str) -> Result<bool> {
        Ok(self.codes()?.contains(code))
    }

    /// Add `code` if absent, remove it if present, then persist the whole set.
    /// Returns the new membership state.
    pub fn toggle(&self, code: &str) -> Result<bool> {
        let code = parse_code(code)?;
        let mut set = self.codes()?;
        let now = set.toggle(&code)?;

        let json = serde_json::to_string(&set)
            .map_err(|e| CountryDexError::StorageUnavailable(e.to_string()))?;
        self.store.set(FAVORITES_KEY, &json)?;

        info!(code = %code, favorite = now, "favorite toggled");
        Ok(now)
    }

    /// Full records for `codes`, fetched in one batched request.
    ///
    /// No request is made for an empty list. A failed request is
    /// [`CountryDexError::DataUnavailable`]; nothing partial is synthesized.
    pub fn resolve<S>(&self, source: &S, codes: &[String]) -> Result<Vec<Country>>
    where
        S: CountrySource + ?Sized,
    {
        resolve_codes(source, codes)
    }

    /// The persisted favorites, resolved into records.
    pub fn favorites<S>(&self, source: &S) -> Result<Vec<Country>>
    where
        S: CountrySource + ?Sized,
    {
        let set = self.codes()?;
        self.resolve(source, set.codes())
    }
}

pub(crate) fn resolve_codes<S>(source: &S, codes: &[String]) -> Result<Vec<Country>>
where
    S: CountrySource + ?Sized,
{
    if codes.is_empty() {
        return Ok(Vec::new());
    }
    debug!(count = codes.len(), "resolving codes");
    source.fetch_by_codes(codes)
}
