// crates/countrydex-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the catalog, the favorites store and the collaborators
/// they talk to.
///
/// None of these are fatal: callers keep their previous (stale or empty) state
/// and decide whether to offer a retry.
#[derive(Debug, Error)]
pub enum CountryDexError {
    /// The remote country API could not be reached, answered with a non-2xx
    /// status, or returned a body that does not decode.
    #[error("Country data unavailable: {0}")]
    DataUnavailable(String),

    /// The key-value store could not be read or written.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A code has no matching record.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A country code that is empty or not plain ASCII letters/digits.
    #[error("Invalid country code: {0:?}")]
    InvalidCode(String),
}

pub type Result<T> = std::result::Result<T, CountryDexError>;

impl From<std::io::Error> for CountryDexError {
    fn from(e: std::io::Error) -> Self {
        CountryDexError::StorageUnavailable(e.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for CountryDexError {
    fn from(e: reqwest::Error) -> Self {
        CountryDexError::DataUnavailable(e.to_string())
    }
}
