// crates/countrydex-core/src/text.rs
use crate::error::{CountryDexError, Result};
use std::cmp::Ordering;

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use countrydex_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("FRANCE"), "france");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
///
/// ```rust
/// use countrydex_core::text::equals_folded;
///
/// assert!(equals_folded("Türkiye", "turkiye"));
/// assert!(!equals_folded("Chad", "Chile"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Ordering used for the catalog's display order.
///
/// Approximates a locale-aware collation: names are compared on their folded
/// form first, so accents and case do not push "Åland Islands" behind "Zambia".
/// Ties on the folded form fall back to the raw strings to keep the order total.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b))
}

/// Normalize a country code for storage and lookups (`" fra "` -> `"FRA"`).
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// [`normalize_code`], rejecting anything that is not a non-empty run of
/// ASCII letters and digits.
///
/// Codes end up in URL paths and comma-joined query strings, so `""`,
/// `"../all"` or `"FRA,DEU"` never pass.
pub fn parse_code(code: &str) -> Result<String> {
    let normalized = normalize_code(code);
    if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CountryDexError::InvalidCode(code.to_string()));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collate_ignores_accents_and_case() {
        let mut names = vec!["Zambia", "Åland Islands", "albania", "Afghanistan"];
        names.sort_by(|a, b| collate(a, b));
        assert_eq!(
            names,
            vec!["Afghanistan", "Åland Islands", "albania", "Zambia"]
        );
    }

    #[test]
    fn normalize_code_trims_and_uppercases() {
        assert_eq!(normalize_code(" fra "), "FRA");
        assert_eq!(normalize_code("DEU"), "DEU");
    }

    #[test]
    fn parse_code_rejects_blank_and_path_like_codes() {
        assert_eq!(parse_code(" esp ").unwrap(), "ESP");
        for bad in ["", "   ", "../all", "FRA,DEU", "F R"] {
            assert!(
                matches!(parse_code(bad), Err(CountryDexError::InvalidCode(_))),
                "{bad:?}"
            );
        }
    }
}
