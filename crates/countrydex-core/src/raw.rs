// crates/countrydex-core/src/raw.rs
use serde::Deserialize;
use std::collections::HashMap;

/// `{ "common": "France", "official": "French Republic", "nativeName": {...} }`
#[derive(Debug, Deserialize)]
pub struct NameRaw {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
}

/// One entry of `translations`: `{ "official": "...", "common": "..." }`.
#[derive(Debug, Deserialize)]
pub struct TranslationRaw {
    #[serde(default)]
    pub common: Option<String>,
    #[serde(default)]
    pub official: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
}

/// Raw country structure as returned by REST Countries v3.1.
/// NOTE: This type mirrors the external API and is converted once into
/// [`crate::Country`]; it is never cached or exposed from the public API.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: NameRaw,
    pub cca3: String,
    #[serde(default)]
    pub cca2: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub area: Option<f64>,
    /// languages: { "fra": "French", ... }
    #[serde(default)]
    pub languages: HashMap<String, String>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub flags: FlagsRaw,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Vec<String>,
    /// translations: { "deu": { "common": "Frankreich", ... }, ... }
    #[serde(default)]
    pub translations: HashMap<String, TranslationRaw>,
}

pub type CountriesRaw = Vec<CountryRaw>;
