// crates/countrydex-core/src/config.rs
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Number of entries added to the visible list by each "load more".
pub const DEFAULT_PAGE_SIZE: usize = 20;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime settings shared by the client, the stores and the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the REST Countries API, without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
    pub page_size: usize,
    /// Directory holding the file-backed key-value store.
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
            data_dir: Self::default_data_dir(),
        }
    }
}

impl Config {
    /// `<platform data dir>/countrydex`, or `./.countrydex` when the platform
    /// has no notion of a data directory.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("countrydex"))
            .unwrap_or_else(|| PathBuf::from(".countrydex"))
    }
}
