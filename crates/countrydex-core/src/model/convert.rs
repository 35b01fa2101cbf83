// crates/countrydex-core/src/model/convert.rs
use crate::model::domain::Country;
use crate::raw::{CountriesRaw, CountryRaw};

/// **Standard Converter:** Raw -> Domain.
pub fn from_raw(raw: CountryRaw) -> Country {
    // Translations without a common name carry nothing searchable.
    let translations = raw
        .translations
        .into_iter()
        .filter_map(|(tag, t)| t.common.or(t.official).map(|name| (tag, name)))
        .collect();

    Country {
        code: raw.cca3,
        iso2: raw.cca2,
        name: raw.name.common,
        official_name: raw.name.official,
        translations,
        population: raw.population.unwrap_or(0),
        area: raw.area.unwrap_or(0.0).max(0.0),
        languages: raw.languages.into_iter().collect(),
        borders: raw.borders,
        flag_url: raw.flags.png.or(raw.flags.svg),
        region: raw.region,
        subregion: raw.subregion,
        capital: raw.capital.into_iter().next(),
    }
}

pub fn from_raw_list(raw: CountriesRaw) -> Vec<Country> {
    raw.into_iter().map(from_raw).collect()
}
