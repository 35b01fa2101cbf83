// crates/countrydex-core/src/store/mod.rs

//! # Key-Value Stores
//!
//! Implementations of [`crate::traits::KeyValueStore`]: a directory of files
//! for real sessions and an in-process map for tests and embedding.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key under which the sorted country list is cached between sessions.
pub const COUNTRIES_KEY: &str = "countriesData";

/// Key under which the favorite codes are persisted.
pub const FAVORITES_KEY: &str = "favorites";
