//! countrydex-rs: umbrella crate re-exporting [`countrydex_core`] so the
//! workspace demos can `use countrydex_rs::prelude::*`.
pub use countrydex_core::*;
