// Shared fixtures for the integration tests.
#![allow(dead_code)]

use countrydex_core::{
    Country, CountryDexError, CountrySource, KeyValueStore, MemoryStore, Result,
};
use std::cell::{Cell, RefCell};

/// In-memory stand-in for the REST API.
///
/// Counts requests so tests can assert on "no request" paths, and can be
/// switched into a failing mode.
pub struct FakeSource {
    countries: Vec<Country>,
    failing: Cell<bool>,
    pub requests: Cell<usize>,
    pub last_batch: RefCell<Vec<String>>,
}

impl FakeSource {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            failing: Cell::new(false),
            requests: Cell::new(0),
            last_batch: RefCell::new(Vec::new()),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    fn hit(&self) -> Result<()> {
        self.requests.set(self.requests.get() + 1);
        if self.failing.get() {
            return Err(CountryDexError::DataUnavailable("fake outage".into()));
        }
        Ok(())
    }
}

impl CountrySource for FakeSource {
    fn fetch_all(&self) -> Result<Vec<Country>> {
        self.hit()?;
        Ok(self.countries.clone())
    }

    fn fetch_by_code(&self, code: &str) -> Result<Option<Country>> {
        self.hit()?;
        Ok(self.countries.iter().find(|c| c.has_code(code)).cloned())
    }

    fn fetch_by_codes(&self, codes: &[String]) -> Result<Vec<Country>> {
        self.hit()?;
        *self.last_batch.borrow_mut() = codes.to_vec();
        Ok(self
            .countries
            .iter()
            .filter(|c| codes.iter().any(|code| c.has_code(code)))
            .cloned()
            .collect())
    }
}

/// Store that serves reads from its seed entries and refuses every write,
/// like a full disk or a read-only data directory.
pub struct ReadOnlyStore {
    inner: MemoryStore,
}

impl ReadOnlyStore {
    pub fn new() -> Self {
        Self::with_entries([])
    }

    pub fn with_entries<const N: usize>(entries: [(&str, &str); N]) -> Self {
        let inner = MemoryStore::new();
        for (key, value) in entries {
            inner.set(key, value).unwrap();
        }
        Self { inner }
    }
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> Result<()> {
        Err(CountryDexError::StorageUnavailable(format!(
            "{key}: read-only store"
        )))
    }
}

/// A handful of European countries in deliberately unsorted order.
pub fn europe() -> Vec<Country> {
    vec![
        Country::new("FRA", "France")
            .with_population(67_000_000)
            .with_translation("deu", "Frankreich")
            .with_language("fra", "French")
            .with_borders(&["ESP", "DEU", "XXZ"]),
        Country::new("DEU", "Germany")
            .with_population(83_000_000)
            .with_translation("fra", "Allemagne")
            .with_language("deu", "German")
            .with_borders(&["FRA"]),
        Country::new("ESP", "Spain")
            .with_population(47_000_000)
            .with_translation("deu", "Spanien")
            .with_language("spa", "Spanish")
            .with_borders(&["FRA", "PRT"]),
        Country::new("ALA", "Åland Islands")
            .with_population(29_000)
            .with_language("swe", "Swedish"),
        Country::new("ISL", "Iceland").with_population(370_000),
    ]
}
