// crates/countrydex-core/src/model/domain.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A country record.
///
/// Records are fetched once per session and treated as immutable. Only the
/// `code` is ever persisted outside the catalog cache; everything else is
/// resolved again through a [`crate::traits::CountrySource`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-3 code (`cca3`). Unique within a fetched batch.
    pub code: String,
    pub iso2: Option<String>,
    /// Canonical (common) name, e.g. "France".
    pub name: String,
    /// Official name, e.g. "French Republic".
    pub official_name: Option<String>,

    /// Sorted map of (Language Tag, Localized common name).
    #[serde(default)]
    pub translations: BTreeMap<String, String>,

    #[serde(default)]
    pub population: u64,
    /// Square kilometres.
    #[serde(default)]
    pub area: f64,

    /// Sorted map of (Language Code, Display Name), e.g. ("fra", "French").
    #[serde(default)]
    pub languages: BTreeMap<String, String>,

    /// Neighbouring country codes in API order. May name codes that no
    /// lookup can resolve.
    #[serde(default)]
    pub borders: Vec<String>,

    pub flag_url: Option<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub capital: Option<String>,
}

impl Country {
    /// Minimal record, mostly useful for tests and fakes.
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            iso2: None,
            name: name.to_string(),
            official_name: None,
            translations: BTreeMap::new(),
            population: 0,
            area: 0.0,
            languages: BTreeMap::new(),
            borders: Vec::new(),
            flag_url: None,
            region: None,
            subregion: None,
            capital: None,
        }
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    pub fn with_borders(mut self, borders: &[&str]) -> Self {
        self.borders = borders.iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn with_translation(mut self, tag: &str, name: &str) -> Self {
        self.translations.insert(tag.to_string(), name.to_string());
        self
    }

    pub fn with_language(mut self, code: &str, name: &str) -> Self {
        self.languages.insert(code.to_string(), name.to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Official name, or the common name when the API has none.
    pub fn official_name(&self) -> &str {
        self.official_name.as_deref().unwrap_or(&self.name)
    }

    /// Region/continent label (e.g. "Europe") or empty string if unknown.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or("")
    }

    pub fn borders(&self) -> &[String] {
        &self.borders
    }

    /// Localized names, in tag order.
    pub fn localized_names(&self) -> impl Iterator<Item = &str> {
        self.translations.values().map(String::as_str)
    }

    /// True if `code` names this country (case-insensitive).
    pub fn has_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }
}
