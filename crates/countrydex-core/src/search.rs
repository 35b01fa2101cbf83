// crates/countrydex-core/src/search.rs
use crate::config::DEFAULT_PAGE_SIZE;
use crate::model::Country;
use crate::traits::NameMatch;

/// Countries whose canonical name or any localized name contains `term`.
///
/// Matching is case- and accent-insensitive (see [`crate::text::fold_key`]).
/// The result keeps the order of `countries`; an empty `term` returns every
/// entry.
///
/// # Example
///
/// ```rust
/// use countrydex_core::{search, Country};
///
/// let all = vec![Country::new("FRA", "France"), Country::new("DEU", "Germany")];
/// let hits = search(&all, "fra");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].code, "FRA");
/// ```
pub fn search<'a>(countries: &'a [Country], term: &str) -> Vec<&'a Country> {
    if term.is_empty() {
        return countries.iter().collect();
    }
    countries.iter().filter(|c| c.name_contains(term)).collect()
}

/// The first `page * page_size` entries of `filtered`.
///
/// This is a cumulative slice, not a window: each page adds `page_size`
/// entries to what was already visible. Clamped to `filtered.len()`.
pub fn paginate<T>(filtered: &[T], page: usize, page_size: usize) -> &[T] {
    let end = page.saturating_mul(page_size).min(filtered.len());
    &filtered[..end]
}

/// Ephemeral search box + "load more" state.
///
/// `page` is always at least 1 and drops back to 1 whenever the term changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    term: String,
    page: usize,
    page_size: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl SearchState {
    pub fn new(page_size: usize) -> Self {
        Self {
            term: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.page = 1;
    }

    /// Jump to `page`; zero is treated as 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Number of entries visible for a filtered result of `filtered_len`.
    pub fn visible_len(&self, filtered_len: usize) -> usize {
        self.page.saturating_mul(self.page_size).min(filtered_len)
    }

    pub fn has_more(&self, filtered_len: usize) -> bool {
        self.visible_len(filtered_len) < filtered_len
    }

    /// Advance one page if anything is left to show. Returns whether it did.
    pub fn load_more(&mut self, filtered_len: usize) -> bool {
        if !self.has_more(filtered_len) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Filter `countries` by the current term and cut the cumulative page.
    pub fn apply<'a>(&self, countries: &'a [Country]) -> Vec<&'a Country> {
        let filtered = search(countries, &self.term);
        paginate(&filtered, self.page, self.page_size).to_vec()
    }
}
