// crates/countrydex-core/src/traits.rs
use crate::error::Result;
use crate::model::Country;
use crate::text::fold_key;
use std::sync::Arc;

/// Name-based matching helpers for types that expose a canonical name plus
/// localized variants.
///
/// Comparisons are Unicode-aware, accent-insensitive and case-insensitive,
/// based on [`fold_key`]. Implementors provide the canonical name via
/// [`NameMatch::name_str`] and, optionally, the variants via
/// [`NameMatch::variant_names`]; they get:
/// - [`NameMatch::is_named`] — equality on folded canonical form
/// - [`NameMatch::name_contains`] — substring match on canonical or any variant
///
/// # Examples
/// ```rust
/// use countrydex_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Türkiye").is_named("turkiye"));
/// assert!(Place("Côte d'Ivoire").name_contains("COTE"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Localized name variants. None by default.
    fn variant_names(&self) -> Vec<&str> {
        Vec::new()
    }

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Returns `true` if the folded canonical name, or any folded variant,
    /// contains the folded `q`. An empty `q` matches everything.
    fn name_contains(&self, q: &str) -> bool {
        let q = fold_key(q);
        fold_key(self.name_str()).contains(&q)
            || self
                .variant_names()
                .into_iter()
                .any(|v| fold_key(v).contains(&q))
    }
}

impl NameMatch for Country {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }

    fn variant_names(&self) -> Vec<&str> {
        self.localized_names().collect()
    }
}

/// The remote country-data API.
///
/// Every failure (timeout, non-2xx, malformed body) is reported as
/// [`crate::CountryDexError::DataUnavailable`].
pub trait CountrySource {
    /// Every country the API knows about, in API order.
    fn fetch_all(&self) -> Result<Vec<Country>>;

    /// One country by code; `Ok(None)` when the API has no such record.
    fn fetch_by_code(&self, code: &str) -> Result<Option<Country>>;

    /// A batch of countries in a single request. Unknown codes are simply
    /// absent from the answer.
    fn fetch_by_codes(&self, codes: &[String]) -> Result<Vec<Country>>;
}

/// A persisted string key-value store.
///
/// Absent keys read as `Ok(None)`. Read/write failures are
/// [`crate::CountryDexError::StorageUnavailable`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Opens a URL in a system-level viewer.
pub trait LinkOpener {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

impl<T: CountrySource + ?Sized> CountrySource for &T {
    fn fetch_all(&self) -> Result<Vec<Country>> {
        (**self).fetch_all()
    }
    fn fetch_by_code(&self, code: &str) -> Result<Option<Country>> {
        (**self).fetch_by_code(code)
    }
    fn fetch_by_codes(&self, codes: &[String]) -> Result<Vec<Country>> {
        (**self).fetch_by_codes(codes)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
