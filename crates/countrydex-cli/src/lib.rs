//! countrydex-cli
//! ==============
//!
//! Command-line interface for the `countrydex-core` country catalog.
//!
//! This crate primarily provides a binary (`countrydex`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install countrydex-cli
//! countrydex --help
//! countrydex list --search land --page 2
//! countrydex country FRA
//! countrydex toggle FRA
//! countrydex favorites
//! ```
//!
//! For programmatic access use the [`countrydex-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/holg/countrydex-rs>
//! - Core crate: <https://docs.rs/countrydex-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
